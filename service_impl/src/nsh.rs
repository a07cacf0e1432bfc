use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dao::project::ProjectDao;
use dao::task::TaskDao;
use service::access_scope::AccessScopeService;
use service::category_map::CategoryMapService;
use service::clock::ClockService;
use service::config::ConfigService;
use service::nsh::{NshQuery, NshRecord, NshReport, NshReportService, NshSummary};
use service::permission::Authentication;
use service::report::{PageRequest, Pagination};
use service::user_set::{UserPopulationFilter, UserSetService};
use service::worklog::{ClassifiedWorklog, WorklogBatchService};
use service::ServiceError;
use tally_utils::{day_bounds, round2, yesterday};
use tracing::warn;
use uuid::Uuid;

use crate::gen_service_impl;

/// Display label for tasks and projects the catalog cannot resolve.
pub const UNKNOWN_LABEL: &str = "Unknown";

gen_service_impl! {
    struct NshReportServiceImpl: NshReportService = NshReportServiceDeps {
        AccessScopeService: AccessScopeService<Context = Self::Context> = access_scope_service,
        UserSetService: UserSetService<Context = Self::Context> = user_set_service,
        CategoryMapService: CategoryMapService<Context = Self::Context> = category_map_service,
        WorklogBatchService: WorklogBatchService<Context = Self::Context> = worklog_batch_service,
        ClockService: ClockService = clock_service,
        ConfigService: ConfigService = config_service,
        TaskDao: dao::task::TaskDao = task_dao,
        ProjectDao: dao::project::ProjectDao = project_dao
    }
}

/// The user's single longest interval. Ties on duration resolve to the
/// lowest worklog id so repeated runs select the same interval.
pub fn pick_nsh(worklogs: &[ClassifiedWorklog]) -> Option<&ClassifiedWorklog> {
    worklogs.iter().max_by(|left, right| {
        left.duration_seconds
            .cmp(&right.duration_seconds)
            .then_with(|| right.id.cmp(&left.id))
    })
}

/// Slice one page out of the full row set. Pages beyond the available range
/// yield an empty page, not an error.
pub fn paginate<T: Clone>(
    rows: &[T],
    request: PageRequest,
    max_page_size: usize,
) -> (Arc<[T]>, Pagination) {
    let per_page = request.per_page.clamp(1, max_page_size);
    let page = request.page.max(1);
    let total = rows.len();
    let last_page = total.div_ceil(per_page).max(1);

    let start = (page - 1).saturating_mul(per_page);
    let page_rows: Arc<[T]> = rows.iter().skip(start).take(per_page).cloned().collect();

    let pagination = Pagination {
        current_page: page,
        per_page,
        total,
        last_page,
        from: (!page_rows.is_empty()).then_some(start + 1),
        to: (!page_rows.is_empty()).then(|| start + page_rows.len()),
    };
    (page_rows, pagination)
}

/// Summary over the full record set, before pagination.
pub fn nsh_summary(rows: &[NshRecord], review_hours: f32) -> NshSummary {
    let records_count = rows.len();
    let total: f32 = rows.iter().map(|row| row.hours).sum();
    NshSummary {
        records_count,
        max_hours: rows.iter().map(|row| row.hours).fold(0.0, f32::max),
        average_hours: if records_count == 0 {
            0.0
        } else {
            round2(total / records_count as f32)
        },
        needing_review: rows.iter().filter(|row| row.hours >= review_hours).count(),
    }
}

#[async_trait]
impl<Deps: NshReportServiceDeps> NshReportService for NshReportServiceImpl<Deps> {
    type Context = Deps::Context;

    async fn get_report(
        &self,
        query: &NshQuery,
        context: Authentication<Self::Context>,
    ) -> Result<NshReport, ServiceError> {
        let scope = self.access_scope_service.resolve_scope(context).await?;
        let config = self.config_service.get_config().await?;

        let yesterday = yesterday(self.clock_service.now_utc(), config.reference_offset);
        let date = query.date.unwrap_or(yesterday);
        let (from, to) = day_bounds(date);

        let filter = UserPopulationFilter {
            work_status: query.work_status.clone(),
            region_id: query.region_id,
            cohort_id: query.cohort_id,
            search: query.search.clone(),
        };
        let users = self
            .user_set_service
            .resolve(&filter, &scope, Authentication::Full)
            .await?;
        let category_map = self
            .category_map_service
            .build_map(Authentication::Full)
            .await?;
        let user_ids: Vec<Uuid> = users.iter().map(|user| user.id).collect();
        let worklogs = self
            .worklog_batch_service
            .load_classified(&user_ids, from, to, &category_map, Authentication::Full)
            .await?;

        // Users without any interval in-window have no NSH record at all.
        let picked: Vec<(Arc<service::user_set::ReportUser>, ClassifiedWorklog)> = users
            .iter()
            .filter_map(|user| {
                worklogs
                    .get(&user.id)
                    .and_then(|user_worklogs| pick_nsh(user_worklogs))
                    .map(|worklog| (Arc::new(user.clone()), worklog.clone()))
            })
            .collect();

        let task_names = self
            .resolve_task_names(picked.iter().map(|(_, worklog)| worklog.task_id).collect())
            .await;
        let project_names = self
            .resolve_project_names(
                picked.iter().map(|(_, worklog)| worklog.project_id).collect(),
            )
            .await;

        let mut rows: Vec<NshRecord> = picked
            .into_iter()
            .map(|(user, worklog)| NshRecord {
                user,
                worklog_id: worklog.id,
                hours: round2(worklog.hours()),
                task_name: task_names
                    .get(&worklog.task_id)
                    .cloned()
                    .unwrap_or_else(|| Arc::from(UNKNOWN_LABEL)),
                project_name: project_names
                    .get(&worklog.project_id)
                    .cloned()
                    .unwrap_or_else(|| Arc::from(UNKNOWN_LABEL)),
                started_at: worklog.started_at,
                ended_at: worklog.ended_at,
                comment: worklog.comment,
            })
            .collect();
        // Longest interval first; id as tie-break keeps the order total.
        rows.sort_by(|left, right| {
            right
                .hours
                .total_cmp(&left.hours)
                .then_with(|| left.worklog_id.cmp(&right.worklog_id))
        });

        let summary = nsh_summary(&rows, config.nsh_review_hours);
        let (page_rows, pagination) = paginate(&rows, query.page, config.max_page_size);

        Ok(NshReport {
            date,
            is_yesterday: date == yesterday,
            rows: page_rows,
            summary,
            pagination,
            region_filter_applied: scope.applied(),
        })
    }
}

impl<Deps: NshReportServiceDeps> NshReportServiceImpl<Deps> {
    /// Display-name lookups are secondary data: a failed fetch degrades to
    /// the unknown label instead of failing the report.
    async fn resolve_task_names(&self, mut ids: Vec<i64>) -> HashMap<i64, Arc<str>> {
        ids.sort_unstable();
        ids.dedup();
        match self.task_dao.find_by_ids(&ids).await {
            Ok(tasks) => tasks
                .iter()
                .map(|task| (task.id, task.name.clone()))
                .collect(),
            Err(err) => {
                warn!("Could not resolve task names: {}", err);
                HashMap::new()
            }
        }
    }

    async fn resolve_project_names(&self, mut ids: Vec<i64>) -> HashMap<i64, Arc<str>> {
        ids.sort_unstable();
        ids.dedup();
        match self.project_dao.find_by_ids(&ids).await {
            Ok(projects) => projects
                .iter()
                .map(|project| (project.id, project.name.clone()))
                .collect(),
            Err(err) => {
                warn!("Could not resolve project names: {}", err);
                HashMap::new()
            }
        }
    }
}
