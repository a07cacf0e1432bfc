use std::sync::Arc;

use async_trait::async_trait;
use dao::setting::SettingDao;
use dao::DaoError;
use sqlx::SqlitePool;

use crate::ResultDbErrorExt;

pub struct SettingDaoImpl {
    pub pool: Arc<SqlitePool>,
}
impl SettingDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingDao for SettingDaoImpl {
    async fn find_values(&self, name: &str) -> Result<Arc<[Arc<str>]>, DaoError> {
        let values: Vec<String> = sqlx::query_scalar(
            r"SELECT value FROM setting_value
            WHERE setting_name = ? AND deleted IS NULL
            ORDER BY position",
        )
        .bind(name)
        .fetch_all(self.pool.as_ref())
        .await
        .map_db_error()?;
        Ok(values.iter().map(|value| Arc::from(value.as_str())).collect())
    }
}
