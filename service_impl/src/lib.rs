use std::sync::Arc;

use async_trait::async_trait;

pub mod access_scope;
pub mod category_map;
pub mod clock;
pub mod config;
pub mod daily_performance;
pub mod eligibility;
pub mod macros;
pub mod nsh;
pub mod permission;
pub mod user_set;
pub mod worklog;

mod test;

/// Development user service: every request runs as a fixed local user.
/// Deployments wire the directory-backed implementation instead.
pub struct UserServiceDev;

#[async_trait]
impl service::user_service::UserService for UserServiceDev {
    type Context = service::permission::MockContext;

    async fn current_user(&self, _context: Self::Context) -> Result<Arc<str>, service::ServiceError> {
        Ok("DEVUSER".into())
    }
}
