use std::fmt::Debug;

use async_trait::async_trait;
use mockall::automock;

use crate::permission::Authentication;
use crate::user_set::RegionScope;
use crate::ServiceError;

#[automock(type Context=();)]
#[async_trait]
pub trait AccessScopeService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    /// Resolves the caller to a region scope. Full report access passes
    /// through unrestricted; team access restricts to the caller's own
    /// region. A team-access caller without a region assignment is an
    /// access-configuration error, not an empty result.
    async fn resolve_scope(
        &self,
        context: Authentication<Self::Context>,
    ) -> Result<RegionScope, ServiceError>;
}
