use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// An active report category together with its configured category-type
/// value and the task ids associated with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCategoryEntity {
    pub id: Uuid,
    pub name: Arc<str>,
    pub category_type_value: Arc<str>,
    pub task_ids: Arc<[i64]>,
}

#[automock]
#[async_trait]
pub trait ReportCategoryDao {
    async fn find_active(&self) -> Result<Arc<[ReportCategoryEntity]>, DaoError>;
}
