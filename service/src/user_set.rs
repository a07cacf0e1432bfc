use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::permission::Authentication;
use crate::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportUser {
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
impl From<&dao::user::UserEntity> for ReportUser {
    fn from(user: &dao::user::UserEntity) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            job_title: user.job_title.clone(),
            work_status: user.work_status.clone(),
            region_id: user.region_id,
            cohort_id: user.cohort_id,
            hired_at: user.hired_at,
            ended_at: user.ended_at,
        }
    }
}
tally_utils::derive_from_reference!(dao::user::UserEntity, ReportUser);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub id: Uuid,
    pub name: Arc<str>,
}
impl From<&dao::region::RegionEntity> for Region {
    fn from(region: &dao::region::RegionEntity) -> Self {
        Self {
            id: region.id,
            name: region.name.clone(),
        }
    }
}
tally_utils::derive_from_reference!(dao::region::RegionEntity, Region);

/// Visibility restriction resolved from the caller's permissions, threaded
/// explicitly through population resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionScope {
    Unrestricted,
    Region(Uuid),
}

impl RegionScope {
    pub fn applied(&self) -> bool {
        matches!(self, Self::Region(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserPopulationFilter {
    pub work_status: Option<Arc<str>>,
    pub region_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub search: Option<Arc<str>>,
}

#[automock(type Context=();)]
#[async_trait]
pub trait UserSetService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    /// Candidate population for a report: active users matching the filters,
    /// restricted to the scope's region when one is set.
    async fn resolve(
        &self,
        filter: &UserPopulationFilter,
        scope: &RegionScope,
        context: Authentication<Self::Context>,
    ) -> Result<Arc<[ReportUser]>, ServiceError>;
}
