use std::sync::Arc;

use async_trait::async_trait;
use dao::project::{ProjectDao, ProjectEntity};
use dao::DaoError;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use crate::ResultDbErrorExt;

#[derive(FromRow)]
struct ProjectDb {
    id: i64,
    name: String,
}

pub struct ProjectDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl ProjectDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectDao for ProjectDaoImpl {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Arc<[ProjectEntity]>, DaoError> {
        if ids.is_empty() {
            return Ok(Arc::new([]));
        }
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(r"SELECT id, name FROM project WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        Ok(builder
            .build_query_as::<ProjectDb>()
            .fetch_all(self.pool.as_ref())
            .await
            .map_db_error()?
            .iter()
            .map(|row| ProjectEntity {
                id: row.id,
                name: row.name.as_str().into(),
            })
            .collect())
    }
}
