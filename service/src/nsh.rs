use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::permission::Authentication;
use crate::report::{PageRequest, Pagination};
use crate::user_set::ReportUser;
use crate::ServiceError;

/// The single longest tracked interval of a user inside the report window.
/// Users without intervals in-window have no record at all.
#[derive(Clone, Debug, PartialEq)]
pub struct NshRecord {
    pub user: Arc<ReportUser>,
    pub worklog_id: i64,
    pub hours: f32,
    pub task_name: Arc<str>,
    pub project_name: Arc<str>,
    pub started_at: time::PrimitiveDateTime,
    pub ended_at: time::PrimitiveDateTime,
    pub comment: Option<Arc<str>>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NshSummary {
    pub records_count: usize,
    pub max_hours: f32,
    pub average_hours: f32,
    /// Records at or above the configured review threshold.
    pub needing_review: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NshQuery {
    pub date: Option<time::Date>,
    pub work_status: Option<Arc<str>>,
    pub region_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub search: Option<Arc<str>>,
    pub page: PageRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NshReport {
    pub date: time::Date,
    pub is_yesterday: bool,
    pub rows: Arc<[NshRecord]>,
    pub summary: NshSummary,
    pub pagination: Pagination,
    pub region_filter_applied: bool,
}

#[automock(type Context=();)]
#[async_trait]
pub trait NshReportService {
    type Context: Clone + PartialEq + Eq + Debug + Send + Sync + 'static;

    async fn get_report(
        &self,
        query: &NshQuery,
        context: Authentication<Self::Context>,
    ) -> Result<NshReport, ServiceError>;
}
