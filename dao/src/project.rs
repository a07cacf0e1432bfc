use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntity {
    pub id: i64,
    pub name: Arc<str>,
}

#[automock]
#[async_trait]
pub trait ProjectDao {
    /// Display names for the given project ids. Ids unknown to the store are
    /// simply absent from the result.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Arc<[ProjectEntity]>, DaoError>;
}
