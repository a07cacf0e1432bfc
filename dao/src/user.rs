use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: Arc<str>,
    pub email: Arc<str>,
    pub job_title: Option<Arc<str>>,
    pub work_status: Arc<str>,
    pub region_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub hired_at: time::Date,
    pub ended_at: Option<time::Date>,
}

/// Optional filters over the active user population. `search` matches name
/// and email case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserQueryEntity {
    pub work_status: Option<Arc<str>>,
    pub region_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub search: Option<Arc<str>>,
}

#[automock]
#[async_trait]
pub trait UserDao {
    async fn find_active(&self, query: &UserQueryEntity)
        -> Result<Arc<[UserEntity]>, DaoError>;
}
