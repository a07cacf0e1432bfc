use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

/// A tracked work interval as delivered by the time-tracking provider.
/// Provider-owned ids are numeric and monotonically increasing.
#[derive(Clone, Debug, PartialEq)]
pub struct WorklogEntity {
    pub id: i64,
    pub user_id: Uuid,
    pub task_id: i64,
    pub project_id: i64,
    pub started_at: time::PrimitiveDateTime,
    pub ended_at: time::PrimitiveDateTime,
    pub duration_seconds: i64,
    pub comment: Option<Arc<str>>,
}

#[automock]
#[async_trait]
pub trait WorklogDao {
    /// All active worklogs of the given users whose start timestamp falls
    /// inside the window, fetched in a single query.
    async fn find_for_users_in_window(
        &self,
        user_ids: &[Uuid],
        from: time::PrimitiveDateTime,
        to: time::PrimitiveDateTime,
    ) -> Result<Arc<[WorklogEntity]>, DaoError>;
}
