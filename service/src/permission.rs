use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::ServiceError;

/// Unrestricted report access over the whole population.
pub const REPORTS_ALL_PRIVILEGE: &str = "reports-all";
/// Report access limited to the users of the caller's own region.
pub const REPORTS_TEAM_PRIVILEGE: &str = "reports-team";

/// Fixed caller identity used when the server runs with mock
/// authentication instead of a real identity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockContext;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authentication<Context: Clone + PartialEq + Eq + Send + Sync + Debug + 'static> {
    Full,
    Context(Context),
}
impl<Context: Clone + Debug + PartialEq + Eq + Send + Sync + 'static> From<Context>
    for Authentication<Context>
{
    fn from(context: Context) -> Self {
        Self::Context(context)
    }
}

#[automock(type Context=();)]
#[async_trait]
pub trait PermissionService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    async fn check_permission(
        &self,
        privilege: &str,
        context: Authentication<Self::Context>,
    ) -> Result<(), ServiceError>;

    async fn has_privilege(
        &self,
        privilege: &str,
        context: Authentication<Self::Context>,
    ) -> Result<bool, ServiceError>;

    async fn current_user_id(
        &self,
        context: Authentication<Self::Context>,
    ) -> Result<Option<Arc<str>>, ServiceError>;
}
