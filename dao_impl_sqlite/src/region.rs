use std::sync::Arc;

use async_trait::async_trait;
use dao::region::{RegionDao, RegionEntity};
use dao::DaoError;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::ResultDbErrorExt;

#[derive(FromRow)]
struct RegionDb {
    id: Vec<u8>,
    name: String,
}

pub struct RegionDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl RegionDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionDao for RegionDaoImpl {
    async fn find_active(&self) -> Result<Arc<[RegionEntity]>, DaoError> {
        sqlx::query_as::<_, RegionDb>(
            r"SELECT id, name FROM region WHERE deleted IS NULL ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_db_error()?
        .iter()
        .map(|row| {
            Ok(RegionEntity {
                id: Uuid::from_slice(&row.id)?,
                name: row.name.as_str().into(),
            })
        })
        .collect::<Result<_, DaoError>>()
    }
}
