use std::sync::Arc;

use serde::{Deserialize, Serialize};
use service::daily_performance::{PerformanceReport, PerformanceSummary, UserDailyMetrics};
use service::nsh::{NshRecord, NshReport, NshSummary};
use service::report::Pagination;
use service::user_set::Region;
use time::PrimitiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionTO {
    pub id: Uuid,
    pub name: Arc<str>,
}
impl From<&Region> for RegionTO {
    fn from(region: &Region) -> Self {
        Self {
            id: region.id,
            name: region.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDailyMetricsTO {
    pub user_id: Uuid,
    pub name: Arc<str>,
    pub email: Arc<str>,
    pub job_title: Option<Arc<str>>,
    pub work_status: Arc<str>,
    pub region_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub billable_hours: f32,
    pub non_billable_hours: f32,
    pub uncategorized_hours: f32,
    pub total_hours: f32,
    pub entries_count: usize,
    pub has_data: bool,
}
impl From<&UserDailyMetrics> for UserDailyMetricsTO {
    fn from(metrics: &UserDailyMetrics) -> Self {
        Self {
            user_id: metrics.user.id,
            name: metrics.user.name.clone(),
            email: metrics.user.email.clone(),
            job_title: metrics.user.job_title.clone(),
            work_status: metrics.user.work_status.clone(),
            region_id: metrics.user.region_id,
            cohort_id: metrics.user.cohort_id,
            billable_hours: metrics.billable_hours,
            non_billable_hours: metrics.non_billable_hours,
            uncategorized_hours: metrics.uncategorized_hours,
            total_hours: metrics.total_hours,
            entries_count: metrics.entries_count,
            has_data: metrics.has_data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummaryTO {
    pub users_count: usize,
    pub users_with_entries: usize,
    pub billable_hours: f32,
    pub non_billable_hours: f32,
    pub uncategorized_hours: f32,
    pub total_hours: f32,
    pub average_total_hours: f32,
    pub users_at_or_above_full_day: usize,
}
impl From<&PerformanceSummary> for PerformanceSummaryTO {
    fn from(summary: &PerformanceSummary) -> Self {
        Self {
            users_count: summary.users_count,
            users_with_entries: summary.users_with_entries,
            billable_hours: summary.billable_hours,
            non_billable_hours: summary.non_billable_hours,
            uncategorized_hours: summary.uncategorized_hours,
            total_hours: summary.total_hours,
            average_total_hours: summary.average_total_hours,
            users_at_or_above_full_day: summary.users_at_or_above_full_day,
        }
    }
}

/// Marker telling clients whether a region restriction was applied to the
/// population behind this report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionFilterTO {
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReportTO {
    pub success: bool,
    pub date: time::Date,
    pub is_yesterday: bool,
    pub rows: Vec<UserDailyMetricsTO>,
    pub summary: PerformanceSummaryTO,
    pub work_status_options: Vec<Arc<str>>,
    pub region_options: Vec<RegionTO>,
    pub region_filter: RegionFilterTO,
}
impl From<&PerformanceReport> for PerformanceReportTO {
    fn from(report: &PerformanceReport) -> Self {
        Self {
            success: true,
            date: report.date,
            is_yesterday: report.is_yesterday,
            rows: report.rows.iter().map(UserDailyMetricsTO::from).collect(),
            summary: PerformanceSummaryTO::from(&report.summary),
            work_status_options: report.work_status_options.to_vec(),
            region_options: report.region_options.iter().map(RegionTO::from).collect(),
            region_filter: RegionFilterTO {
                applied: report.region_filter_applied,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationTO {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub last_page: usize,
    pub from: Option<usize>,
    pub to: Option<usize>,
}
impl From<&Pagination> for PaginationTO {
    fn from(pagination: &Pagination) -> Self {
        Self {
            current_page: pagination.current_page,
            per_page: pagination.per_page,
            total: pagination.total,
            last_page: pagination.last_page,
            from: pagination.from,
            to: pagination.to,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NshRecordTO {
    pub user_id: Uuid,
    pub name: Arc<str>,
    pub email: Arc<str>,
    pub work_status: Arc<str>,
    pub region_id: Option<Uuid>,
    pub worklog_id: i64,
    pub hours: f32,
    pub task_name: Arc<str>,
    pub project_name: Arc<str>,
    pub started_at: PrimitiveDateTime,
    pub ended_at: PrimitiveDateTime,
    pub comment: Option<Arc<str>>,
}
impl From<&NshRecord> for NshRecordTO {
    fn from(record: &NshRecord) -> Self {
        Self {
            user_id: record.user.id,
            name: record.user.name.clone(),
            email: record.user.email.clone(),
            work_status: record.user.work_status.clone(),
            region_id: record.user.region_id,
            worklog_id: record.worklog_id,
            hours: record.hours,
            task_name: record.task_name.clone(),
            project_name: record.project_name.clone(),
            started_at: record.started_at,
            ended_at: record.ended_at,
            comment: record.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NshSummaryTO {
    pub records_count: usize,
    pub max_hours: f32,
    pub average_hours: f32,
    pub needing_review: usize,
}
impl From<&NshSummary> for NshSummaryTO {
    fn from(summary: &NshSummary) -> Self {
        Self {
            records_count: summary.records_count,
            max_hours: summary.max_hours,
            average_hours: summary.average_hours,
            needing_review: summary.needing_review,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NshReportTO {
    pub success: bool,
    pub date: time::Date,
    pub is_yesterday: bool,
    pub rows: Vec<NshRecordTO>,
    pub summary: NshSummaryTO,
    pub pagination: PaginationTO,
    pub region_filter: RegionFilterTO,
}
impl From<&NshReport> for NshReportTO {
    fn from(report: &NshReport) -> Self {
        Self {
            success: true,
            date: report.date,
            is_yesterday: report.is_yesterday,
            rows: report.rows.iter().map(NshRecordTO::from).collect(),
            summary: NshSummaryTO::from(&report.summary),
            pagination: PaginationTO::from(&report.pagination),
            region_filter: RegionFilterTO {
                applied: report.region_filter_applied,
            },
        }
    }
}

/// One rejected query parameter of a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationFailureTO {
    pub field: Arc<str>,
    pub message: Arc<str>,
}
impl From<&service::ValidationFailureItem> for ValidationFailureTO {
    fn from(item: &service::ValidationFailureItem) -> Self {
        Self {
            field: Arc::from(item.field()),
            message: Arc::from(item.message()),
        }
    }
}
