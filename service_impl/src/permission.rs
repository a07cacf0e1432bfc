use std::sync::Arc;

use async_trait::async_trait;
use service::permission::Authentication;
use service::ServiceError;

pub struct PermissionServiceImpl<PermissionDao, UserService>
where
    PermissionDao: dao::permission::PermissionDao + Send + Sync,
    UserService: service::user_service::UserService + Send + Sync,
{
    permission_dao: Arc<PermissionDao>,
    user_service: Arc<UserService>,
}
impl<PermissionDao, UserService> PermissionServiceImpl<PermissionDao, UserService>
where
    PermissionDao: dao::permission::PermissionDao + Send + Sync,
    UserService: service::user_service::UserService + Send + Sync,
{
    pub fn new(permission_dao: Arc<PermissionDao>, user_service: Arc<UserService>) -> Self {
        Self {
            permission_dao,
            user_service,
        }
    }
}

#[async_trait]
impl<PermissionDao, UserService> service::PermissionService
    for PermissionServiceImpl<PermissionDao, UserService>
where
    PermissionDao: dao::permission::PermissionDao + Send + Sync,
    UserService: service::user_service::UserService + Send + Sync,
    UserService::Context: PartialEq + Eq + std::fmt::Debug,
{
    type Context = UserService::Context;

    async fn check_permission(
        &self,
        privilege: &str,
        context: Authentication<Self::Context>,
    ) -> Result<(), ServiceError> {
        if self.has_privilege(privilege, context).await? {
            Ok(())
        } else {
            Err(ServiceError::Forbidden)
        }
    }

    async fn has_privilege(
        &self,
        privilege: &str,
        context: Authentication<Self::Context>,
    ) -> Result<bool, ServiceError> {
        match context {
            Authentication::Full => Ok(true),
            Authentication::Context(context) => {
                let current_user = self.user_service.current_user(context).await?;
                Ok(self
                    .permission_dao
                    .has_privilege(current_user.as_ref(), privilege)
                    .await?)
            }
        }
    }

    async fn current_user_id(
        &self,
        context: Authentication<Self::Context>,
    ) -> Result<Option<Arc<str>>, ServiceError> {
        match context {
            Authentication::Full => Ok(None),
            Authentication::Context(context) => {
                let current_user = self.user_service.current_user(context).await?;
                Ok(Some(current_user))
            }
        }
    }
}
