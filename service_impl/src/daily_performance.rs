use std::sync::Arc;

use async_trait::async_trait;
use dao::region::RegionDao;
use dao::setting::SettingDao;
use service::access_scope::AccessScopeService;
use service::category_map::{Category, CategoryMapService};
use service::clock::ClockService;
use service::config::ConfigService;
use service::daily_performance::{
    DailyPerformanceService, PerformanceQuery, PerformanceReport, PerformanceSummary,
    UserDailyMetrics,
};
use service::eligibility::EligibilityService;
use service::permission::Authentication;
use service::report::{SortField, SortOrder};
use service::user_set::{Region, ReportUser, UserPopulationFilter, UserSetService};
use service::worklog::{ClassifiedWorklog, WorklogBatchService};
use service::ServiceError;
use tally_utils::{day_bounds, round2, yesterday};
use tracing::warn;
use uuid::Uuid;

use crate::gen_service_impl;

/// Named list setting holding the work-status filter options.
pub const WORK_STATUS_SETTING: &str = "work-status-options";

gen_service_impl! {
    struct DailyPerformanceServiceImpl: DailyPerformanceService = DailyPerformanceServiceDeps {
        AccessScopeService: AccessScopeService<Context = Self::Context> = access_scope_service,
        UserSetService: UserSetService<Context = Self::Context> = user_set_service,
        CategoryMapService: CategoryMapService<Context = Self::Context> = category_map_service,
        WorklogBatchService: WorklogBatchService<Context = Self::Context> = worklog_batch_service,
        EligibilityService: EligibilityService = eligibility_service,
        ClockService: ClockService = clock_service,
        ConfigService: ConfigService = config_service,
        SettingDao: dao::setting::SettingDao = setting_dao,
        RegionDao: dao::region::RegionDao = region_dao
    }
}

/// Pure per-user reduction: bucket hours by category, round each bucket to
/// two decimals, then total over the rounded buckets.
pub fn reduce_user_day(
    user: Arc<ReportUser>,
    worklogs: &[ClassifiedWorklog],
    has_data: bool,
) -> UserDailyMetrics {
    let (billable, non_billable, uncategorized) = worklogs.iter().fold(
        (0.0f32, 0.0f32, 0.0f32),
        |(billable, non_billable, uncategorized), worklog| match worklog.category {
            Category::Billable => (billable + worklog.hours(), non_billable, uncategorized),
            Category::NonBillable => (billable, non_billable + worklog.hours(), uncategorized),
            Category::Uncategorized => (billable, non_billable, uncategorized + worklog.hours()),
        },
    );
    let billable_hours = round2(billable);
    let non_billable_hours = round2(non_billable);
    let uncategorized_hours = round2(uncategorized);
    UserDailyMetrics {
        user,
        billable_hours,
        non_billable_hours,
        uncategorized_hours,
        total_hours: round2(billable_hours + non_billable_hours + uncategorized_hours),
        entries_count: worklogs.len(),
        has_data,
    }
}

pub fn sort_metrics(rows: &mut [UserDailyMetrics], field: SortField, order: SortOrder) {
    rows.sort_by(|left, right| {
        let ordering = match field {
            SortField::Name => left.user.name.cmp(&right.user.name),
            SortField::Billable => left.billable_hours.total_cmp(&right.billable_hours),
            SortField::NonBillable => left.non_billable_hours.total_cmp(&right.non_billable_hours),
            SortField::Uncategorized => {
                left.uncategorized_hours.total_cmp(&right.uncategorized_hours)
            }
            SortField::Total => left.total_hours.total_cmp(&right.total_hours),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Summary over the full result set, before any pagination.
pub fn performance_summary(rows: &[UserDailyMetrics], full_day_hours: f32) -> PerformanceSummary {
    let users_count = rows.len();
    let total_hours = round2(rows.iter().map(|row| row.total_hours).sum());
    PerformanceSummary {
        users_count,
        users_with_entries: rows.iter().filter(|row| row.entries_count > 0).count(),
        billable_hours: round2(rows.iter().map(|row| row.billable_hours).sum()),
        non_billable_hours: round2(rows.iter().map(|row| row.non_billable_hours).sum()),
        uncategorized_hours: round2(rows.iter().map(|row| row.uncategorized_hours).sum()),
        total_hours,
        average_total_hours: if users_count == 0 {
            0.0
        } else {
            round2(total_hours / users_count as f32)
        },
        users_at_or_above_full_day: rows
            .iter()
            .filter(|row| row.total_hours >= full_day_hours)
            .count(),
    }
}

#[async_trait]
impl<Deps: DailyPerformanceServiceDeps> DailyPerformanceService
    for DailyPerformanceServiceImpl<Deps>
{
    type Context = Deps::Context;

    async fn get_report(
        &self,
        query: &PerformanceQuery,
        context: Authentication<Self::Context>,
    ) -> Result<PerformanceReport, ServiceError> {
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

        let mut rows: Vec<UserDailyMetrics> = users
            .iter()
            .map(|user| {
                let user_worklogs = worklogs
                    .get(&user.id)
                    .map(Arc::as_ref)
                    .unwrap_or(&[]);
                let has_data = self.eligibility_service.has_data_window(user, date, date);
                reduce_user_day(Arc::new(user.clone()), user_worklogs, has_data)
            })
            .collect();

        let summary = performance_summary(&rows, config.full_day_hours);
        sort_metrics(&mut rows, query.sort_by, query.sort_order);

        // Filter option lists are independently optional: a failed fetch
        // degrades that list to empty instead of failing the report.
        let work_status_options: Arc<[Arc<str>]> =
            match self.setting_dao.find_values(WORK_STATUS_SETTING).await {
                Ok(options) => options,
                Err(err) => {
                    warn!("Could not load work status options: {}", err);
                    Arc::new([])
                }
            };
        let region_options: Arc<[Region]> = match self.region_dao.find_active().await {
            Ok(regions) => regions.iter().map(Region::from).collect(),
            Err(err) => {
                warn!("Could not load region options: {}", err);
                Arc::new([])
            }
        };

        Ok(PerformanceReport {
            date,
            is_yesterday: date == yesterday,
            rows: rows.into(),
            summary,
            work_status_options,
            region_options,
            region_filter_applied: scope.applied(),
        })
    }
}
