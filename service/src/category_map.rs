use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::permission::Authentication;
use crate::ServiceError;

/// Classification bucket of a tracked task. Exhaustive and mutually
/// exclusive: every task id resolves to exactly one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Billable,
    NonBillable,
    Uncategorized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCategory {
    pub id: Uuid,
    pub name: Arc<str>,
}
impl From<&dao::report_category::ReportCategoryEntity> for ReportCategory {
    fn from(category: &dao::report_category::ReportCategoryEntity) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

/// Immutable per-request snapshot of the task classification. Rebuilt on
/// every request so results always reflect the current configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryMap {
    pub billable: HashSet<i64>,
    pub non_billable: HashSet<i64>,
    /// Traceability: every category a task id matched, regardless of which
    /// bucket won.
    pub categories_by_task: HashMap<i64, Arc<[ReportCategory]>>,
}

impl CategoryMap {
    /// Billable wins over non-billable when a task matches both rule sets;
    /// anything unmapped is uncategorized.
    pub fn classify(&self, task_id: i64) -> Category {
        if self.billable.contains(&task_id) {
            Category::Billable
        } else if self.non_billable.contains(&task_id) {
            Category::NonBillable
        } else {
            Category::Uncategorized
        }
    }

    pub fn categories_for(&self, task_id: i64) -> &[ReportCategory] {
        self.categories_by_task
            .get(&task_id)
            .map(Arc::as_ref)
            .unwrap_or(&[])
    }
}

#[automock(type Context=();)]
#[async_trait]
pub trait CategoryMapService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    async fn build_map(
        &self,
        context: Authentication<Self::Context>,
    ) -> Result<CategoryMap, ServiceError>;
}
