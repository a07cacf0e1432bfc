use async_trait::async_trait;
use dao::permission::PermissionDao;
use service::access_scope::AccessScopeService;
use service::permission::{Authentication, REPORTS_ALL_PRIVILEGE, REPORTS_TEAM_PRIVILEGE};
use service::user_set::RegionScope;
use service::{PermissionService, ServiceError};
use tracing::warn;

use crate::gen_service_impl;

gen_service_impl! {
    struct AccessScopeServiceImpl: AccessScopeService = AccessScopeServiceDeps {
        PermissionService: service::PermissionService<Context = Self::Context> = permission_service,
        PermissionDao: dao::permission::PermissionDao = permission_dao
    }
}

#[async_trait]
impl<Deps: AccessScopeServiceDeps> AccessScopeService for AccessScopeServiceImpl<Deps> {
    type Context = Deps::Context;

    async fn resolve_scope(
        &self,
        context: Authentication<Self::Context>,
    ) -> Result<RegionScope, ServiceError> {
        if self
            .permission_service
            .has_privilege(REPORTS_ALL_PRIVILEGE, context.clone())
            .await?
        {
            return Ok(RegionScope::Unrestricted);
        }
        self.permission_service
            .check_permission(REPORTS_TEAM_PRIVILEGE, context.clone())
            .await?;

        let Some(user) = self.permission_service.current_user_id(context).await? else {
            // Full authentication carries no user to scope by.
            return Ok(RegionScope::Unrestricted);
        };
        match self.permission_dao.find_region_for_user(user.as_ref()).await? {
            Some(region_id) => Ok(RegionScope::Region(region_id)),
            None => {
                warn!(
                    "User {} holds team report access but has no region assignment",
                    user
                );
                Err(ServiceError::NoRegionAssigned)
            }
        }
    }
}
