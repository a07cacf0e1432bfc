use std::sync::Arc;

use async_trait::async_trait;
use dao::DaoError;
use sqlx::SqlitePool;
use uuid::Uuid;

pub mod project;
pub mod region;
pub mod report_category;
pub mod setting;
pub mod task;
pub mod user;
pub mod worklog;

pub trait ResultDbErrorExt<T, E> {
    fn map_db_error(self) -> Result<T, DaoError>;
}
impl<T, E: std::error::Error + Send + Sync + 'static> ResultDbErrorExt<T, E> for Result<T, E> {
    fn map_db_error(self) -> Result<T, DaoError> {
        self.map_err(|err| DaoError::DatabaseQueryError(Box::new(err)))
    }
}

pub struct PermissionDaoImpl {
    pool: Arc<SqlitePool>,
}
impl PermissionDaoImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl dao::permission::PermissionDao for PermissionDaoImpl {
    async fn has_privilege(&self, user: &str, privilege: &str) -> Result<bool, DaoError> {
        let count: i64 = sqlx::query_scalar(
            r"SELECT count(*) FROM user
                                 INNER JOIN user_role ON user.name = user_role.user_name
                                 INNER JOIN role ON user_role.role_name = role.name
                                 INNER JOIN role_privilege ON role.name = role_privilege.role_name
                                 WHERE role_privilege.privilege_name = ? AND user.name = ?",
        )
        .bind(privilege)
        .bind(user)
        .fetch_one(self.pool.as_ref())
        .await
        .map_db_error()?;
        Ok(count > 0)
    }

    async fn find_region_for_user(&self, user: &str) -> Result<Option<Uuid>, DaoError> {
        let region_id: Option<Vec<u8>> = sqlx::query_scalar(
            r"SELECT region_id FROM user_region WHERE user_name = ?",
        )
        .bind(user)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_db_error()?;
        Ok(region_id
            .as_deref()
            .map(Uuid::from_slice)
            .transpose()?)
    }
}
