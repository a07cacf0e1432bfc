use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionEntity {
    pub id: Uuid,
    pub name: Arc<str>,
}

#[automock]
#[async_trait]
pub trait RegionDao {
    async fn find_active(&self) -> Result<Arc<[RegionEntity]>, DaoError>;
}
