use std::sync::Arc;

use async_trait::async_trait;
use dao::user::{UserDao, UserQueryEntity};
use service::permission::Authentication;
use service::user_set::{RegionScope, ReportUser, UserPopulationFilter, UserSetService};
use service::ServiceError;

use crate::gen_service_impl;

gen_service_impl! {
    struct UserSetServiceImpl: UserSetService = UserSetServiceDeps {
        UserDao: dao::user::UserDao = user_dao
    }
}

#[async_trait]
impl<Deps: UserSetServiceDeps> UserSetService for UserSetServiceImpl<Deps> {
    type Context = Deps::Context;

    async fn resolve(
        &self,
        filter: &UserPopulationFilter,
        scope: &RegionScope,
        _context: Authentication<Self::Context>,
    ) -> Result<Arc<[ReportUser]>, ServiceError> {
        let effective_region = match scope {
            RegionScope::Unrestricted => filter.region_id,
            RegionScope::Region(scope_region) => {
                // A scoped caller asking for another region gets nothing,
                // never rows from outside their own region.
                if filter.region_id.is_some_and(|requested| requested != *scope_region) {
                    let empty: Arc<[ReportUser]> = Arc::new([]);
                    return Ok(empty);
                }
                Some(*scope_region)
            }
        };

        let query = UserQueryEntity {
            work_status: filter.work_status.clone(),
            region_id: effective_region,
            cohort_id: filter.cohort_id,
            search: filter.search.clone(),
        };
        Ok(self
            .user_dao
            .find_active(&query)
            .await?
            .iter()
            .map(ReportUser::from)
            .collect())
    }
}
