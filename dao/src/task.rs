use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskEntity {
    pub id: i64,
    pub name: Arc<str>,
}

#[automock]
#[async_trait]
pub trait TaskDao {
    /// Display names for the given task ids. Ids unknown to the store are
    /// simply absent from the result.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Arc<[TaskEntity]>, DaoError>;
}
