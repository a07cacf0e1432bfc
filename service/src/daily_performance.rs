use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::permission::Authentication;
use crate::report::{SortField, SortOrder};
use crate::user_set::{Region, ReportUser};
use crate::ServiceError;

/// Per-user daily reduction of classified worklogs.
///
/// Invariant: `total_hours` is the sum of the three rounded bucket totals.
#[derive(Clone, Debug, PartialEq)]
pub struct UserDailyMetrics {
    pub user: Arc<ReportUser>,
    pub billable_hours: f32,
    pub non_billable_hours: f32,
    pub uncategorized_hours: f32,
    pub total_hours: f32,
    pub entries_count: usize,
    /// Whether the report window overlaps the user's employment window, so a
    /// day without entries is noteworthy.
    pub has_data: bool,
}

/// Aggregate statistics over the full result set, computed before any
/// pagination or sorting.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PerformanceSummary {
    pub users_count: usize,
    pub users_with_entries: usize,
    pub billable_hours: f32,
    pub non_billable_hours: f32,
    pub uncategorized_hours: f32,
    pub total_hours: f32,
    pub average_total_hours: f32,
    pub users_at_or_above_full_day: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PerformanceQuery {
    /// Report subject day; defaults to yesterday in the reference timezone.
    pub date: Option<time::Date>,
    pub work_status: Option<Arc<str>>,
    pub region_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub search: Option<Arc<str>>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceReport {
    pub date: time::Date,
    pub is_yesterday: bool,
    pub rows: Arc<[UserDailyMetrics]>,
    pub summary: PerformanceSummary,
    pub work_status_options: Arc<[Arc<str>]>,
    pub region_options: Arc<[Region]>,
    pub region_filter_applied: bool,
}

#[automock(type Context=();)]
#[async_trait]
pub trait DailyPerformanceService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    async fn get_report(
        &self,
        query: &PerformanceQuery,
        context: Authentication<Self::Context>,
    ) -> Result<PerformanceReport, ServiceError>;
}
