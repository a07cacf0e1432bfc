use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::category_map::{Category, CategoryMap};
use crate::permission::Authentication;
use crate::ServiceError;

#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedWorklog {
    pub id: i64,
    pub task_id: i64,
    pub project_id: i64,
    pub started_at: time::PrimitiveDateTime,
    pub ended_at: time::PrimitiveDateTime,
    pub duration_seconds: i64,
    pub comment: Option<Arc<str>>,
    pub category: Category,
}

impl ClassifiedWorklog {
    pub fn hours(&self) -> f32 {
        self.duration_seconds as f32 / 3600.0
    }
}

/// Classified intervals grouped by owning user. Ordered map so per-user
/// reduction recombines deterministically.
pub type WorklogsByUser = BTreeMap<Uuid, Arc<[ClassifiedWorklog]>>;

#[automock(type Context=();)]
#[async_trait]
pub trait WorklogBatchService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    /// One storage read for the whole population: active worklogs of the
    /// given users starting inside the window, classified through the
    /// category map and grouped by user. An empty id set yields an empty map
    /// without touching storage.
    async fn load_classified(
        &self,
        user_ids: &[Uuid],
        from: time::PrimitiveDateTime,
        to: time::PrimitiveDateTime,
        category_map: &CategoryMap,
        context: Authentication<Self::Context>,
    ) -> Result<WorklogsByUser, ServiceError>;
}
