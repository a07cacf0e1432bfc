use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::DaoError;

#[automock]
#[async_trait]
pub trait SettingDao {
    /// Active values of a named list setting, e.g. the work-status options.
    async fn find_values(&self, name: &str) -> Result<Arc<[Arc<str>]>, DaoError>;
}
