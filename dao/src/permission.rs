use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

#[automock]
#[async_trait]
pub trait PermissionDao {
    async fn has_privilege(&self, user: &str, privilege: &str) -> Result<bool, DaoError>;

    /// Region assignment of a user, if any. Team-scoped report viewers are
    /// constrained to this region.
    async fn find_region_for_user(&self, user: &str) -> Result<Option<Uuid>, DaoError>;
}
