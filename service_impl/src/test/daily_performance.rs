use std::sync::Arc;

use dao::region::{MockRegionDao, RegionEntity};
use dao::setting::MockSettingDao;
use dao::DaoError;
use service::access_scope::MockAccessScopeService;
use service::category_map::{Category, MockCategoryMapService};
use service::clock::MockClockService;
use service::config::MockConfigService;
use service::daily_performance::{DailyPerformanceService, PerformanceQuery};
use service::eligibility::MockEligibilityService;
use service::report::{SortField, SortOrder};
use service::user_set::{MockUserSetService, RegionScope};
use service::worklog::{MockWorklogBatchService, WorklogsByUser};
use time::macros::{date, datetime};

use crate::daily_performance::{DailyPerformanceServiceDeps, DailyPerformanceServiceImpl};
use crate::test::fixtures::{
    generate_category_map, generate_config, generate_user, generate_worklog, region_apac,
    user_id_1, user_id_2, user_id_3, NoneTypeExt,
};

struct MockDeps {
    access_scope_service: MockAccessScopeService,
    user_set_service: MockUserSetService,
    category_map_service: MockCategoryMapService,
    worklog_batch_service: MockWorklogBatchService,
    eligibility_service: MockEligibilityService,
    clock_service: MockClockService,
    config_service: MockConfigService,
    setting_dao: MockSettingDao,
    region_dao: MockRegionDao,
}
impl DailyPerformanceServiceDeps for MockDeps {
    type Context = ();
    type AccessScopeService = MockAccessScopeService;
    type UserSetService = MockUserSetService;
    type CategoryMapService = MockCategoryMapService;
    type WorklogBatchService = MockWorklogBatchService;
    type EligibilityService = MockEligibilityService;
    type ClockService = MockClockService;
    type ConfigService = MockConfigService;
    type SettingDao = MockSettingDao;
    type RegionDao = MockRegionDao;
}
impl MockDeps {
    fn build_service(self) -> DailyPerformanceServiceImpl<MockDeps> {
        DailyPerformanceServiceImpl {
            access_scope_service: self.access_scope_service.into(),
            user_set_service: self.user_set_service.into(),
            category_map_service: self.category_map_service.into(),
            worklog_batch_service: self.worklog_batch_service.into(),
            eligibility_service: self.eligibility_service.into(),
            clock_service: self.clock_service.into(),
            config_service: self.config_service.into(),
            setting_dao: self.setting_dao.into(),
            region_dao: self.region_dao.into(),
        }
    }
}

/// Deps with the surrounding machinery stubbed: clock pinned so yesterday is
/// 2024-01-10, default config, billable task 10 / non-billable task 20,
/// everyone eligible, both filter option lists populated. Tests add their own
/// scope, population and worklog expectations.
fn base_deps() -> MockDeps {
    let mut deps = MockDeps {
        access_scope_service: MockAccessScopeService::new(),
        user_set_service: MockUserSetService::new(),
        category_map_service: MockCategoryMapService::new(),
        worklog_batch_service: MockWorklogBatchService::new(),
        eligibility_service: MockEligibilityService::new(),
        clock_service: MockClockService::new(),
        config_service: MockConfigService::new(),
        setting_dao: MockSettingDao::new(),
        region_dao: MockRegionDao::new(),
    };
    deps.clock_service
        .expect_now_utc()
        .returning(|| datetime!(2024-01-11 10:00:00 UTC));
    deps.config_service
        .expect_get_config()
        .returning(|| Ok(generate_config()));
    deps.category_map_service
        .expect_build_map()
        .returning(|_| Ok(generate_category_map()));
    deps.eligibility_service
        .expect_has_data_window()
        .returning(|_, _, _| true);
    deps
}

fn with_option_lists(deps: &mut MockDeps) {
    deps.setting_dao
        .expect_find_values()
        .returning(|_| Ok(Arc::new([Arc::from("full-time"), Arc::from("part-time")])));
    deps.region_dao.expect_find_active().returning(|| {
        Ok(Arc::new([RegionEntity {
            id: region_apac(),
            name: Arc::from("APAC"),
        }]))
    });
}

#[tokio::test]
async fn test_report_reduces_each_user_day() {
    let mut deps = base_deps();
    with_option_lists(&mut deps);
    deps.access_scope_service
        .expect_resolve_scope()
        .returning(|_| Ok(RegionScope::Unrestricted));
    deps.user_set_service.expect_resolve().returning(|_, _, _| {
        Ok(Arc::new([
            generate_user(user_id_1(), "Ada"),
            generate_user(user_id_2(), "Ben"),
        ]))
    });
    deps.worklog_batch_service
        .expect_load_classified()
        .withf(|_, from, to, _, _| {
            *from == datetime!(2024-01-10 00:00:00) && *to == datetime!(2024-01-10 23:59:59)
        })
        .returning(|_, _, _, _, _| {
            let mut worklogs = WorklogsByUser::new();
            worklogs.insert(
                user_id_1(),
                Arc::new([
                    generate_worklog(100, 10, 3600, Category::Billable),
                    generate_worklog(101, 20, 1800, Category::NonBillable),
                ]),
            );
            Ok(worklogs)
        });
    let service = deps.build_service();

    let report = service
        .get_report(&PerformanceQuery::default(), ().auth())
        .await
        .unwrap();

    assert_eq!(report.date, date!(2024 - 01 - 10));
    assert!(report.is_yesterday);
    assert!(!report.region_filter_applied);
    assert_eq!(report.rows.len(), 2);

    let ada = &report.rows[0];
    assert_eq!(ada.user.name.as_ref(), "Ada");
    assert_eq!(ada.billable_hours, 1.0);
    assert_eq!(ada.non_billable_hours, 0.5);
    assert_eq!(ada.uncategorized_hours, 0.0);
    assert_eq!(ada.total_hours, 1.5);
    assert_eq!(ada.entries_count, 2);
    assert!(ada.has_data);

    // Ben logged nothing but stays in the report with zeroed buckets.
    let ben = &report.rows[1];
    assert_eq!(ben.user.name.as_ref(), "Ben");
    assert_eq!(ben.total_hours, 0.0);
    assert_eq!(ben.entries_count, 0);

    assert_eq!(report.summary.users_count, 2);
    assert_eq!(report.summary.users_with_entries, 1);
    assert_eq!(report.summary.billable_hours, 1.0);
    assert_eq!(report.summary.non_billable_hours, 0.5);
    assert_eq!(report.summary.total_hours, 1.5);
    assert_eq!(report.summary.average_total_hours, 0.75);
    assert_eq!(report.summary.users_at_or_above_full_day, 0);

    assert_eq!(report.work_status_options.len(), 2);
    assert_eq!(report.region_options.len(), 1);
    assert_eq!(report.region_options[0].name.as_ref(), "APAC");
}

#[tokio::test]
async fn test_sort_by_total_descending() {
    let mut deps = base_deps();
    with_option_lists(&mut deps);
    deps.access_scope_service
        .expect_resolve_scope()
        .returning(|_| Ok(RegionScope::Unrestricted));
    deps.user_set_service.expect_resolve().returning(|_, _, _| {
        Ok(Arc::new([
            generate_user(user_id_1(), "Ada"),
            generate_user(user_id_2(), "Ben"),
            generate_user(user_id_3(), "Cleo"),
        ]))
    });
    deps.worklog_batch_service
        .expect_load_classified()
        .returning(|_, _, _, _, _| {
            let mut worklogs = WorklogsByUser::new();
            worklogs.insert(
                user_id_1(),
                Arc::new([generate_worklog(100, 10, 5400, Category::Billable)]),
            );
            worklogs.insert(
                user_id_3(),
                Arc::new([generate_worklog(101, 10, 29700, Category::Billable)]),
            );
            Ok(worklogs)
        });
    let service = deps.build_service();

    let query = PerformanceQuery {
        sort_by: SortField::Total,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };
    let report = service.get_report(&query, ().auth()).await.unwrap();

    let totals: Vec<f32> = report.rows.iter().map(|row| row.total_hours).collect();
    assert_eq!(totals, vec![8.25, 1.5, 0.0]);
    assert_eq!(report.summary.users_at_or_above_full_day, 1);
}

#[tokio::test]
async fn test_explicit_date_is_reported_verbatim() {
    let mut deps = base_deps();
    with_option_lists(&mut deps);
    deps.access_scope_service
        .expect_resolve_scope()
        .returning(|_| Ok(RegionScope::Unrestricted));
    deps.user_set_service
        .expect_resolve()
        .returning(|_, _, _| Ok(Arc::new([])));
    deps.worklog_batch_service
        .expect_load_classified()
        .withf(|_, from, _, _, _| *from == datetime!(2024-01-05 00:00:00))
        .returning(|_, _, _, _, _| Ok(WorklogsByUser::new()));
    let service = deps.build_service();

    let query = PerformanceQuery {
        date: Some(date!(2024 - 01 - 05)),
        ..Default::default()
    };
    let report = service.get_report(&query, ().auth()).await.unwrap();

    assert_eq!(report.date, date!(2024 - 01 - 05));
    assert!(!report.is_yesterday);
    assert_eq!(report.summary.average_total_hours, 0.0);
}

#[tokio::test]
async fn test_region_scope_is_forwarded_and_flagged() {
    let mut deps = base_deps();
    with_option_lists(&mut deps);
    deps.access_scope_service
        .expect_resolve_scope()
        .returning(|_| Ok(RegionScope::Region(region_apac())));
    deps.user_set_service
        .expect_resolve()
        .withf(|_, scope, _| *scope == RegionScope::Region(region_apac()))
        .returning(|_, _, _| Ok(Arc::new([generate_user(user_id_1(), "Ada")])));
    deps.worklog_batch_service
        .expect_load_classified()
        .returning(|_, _, _, _, _| Ok(WorklogsByUser::new()));
    let service = deps.build_service();

    let report = service
        .get_report(&PerformanceQuery::default(), ().auth())
        .await
        .unwrap();

    assert!(report.region_filter_applied);
    assert_eq!(report.rows.len(), 1);
}

#[tokio::test]
async fn test_option_list_failures_degrade_to_empty() {
    let mut deps = base_deps();
    deps.access_scope_service
        .expect_resolve_scope()
        .returning(|_| Ok(RegionScope::Unrestricted));
    deps.user_set_service
        .expect_resolve()
        .returning(|_, _, _| Ok(Arc::new([])));
    deps.worklog_batch_service
        .expect_load_classified()
        .returning(|_, _, _, _, _| Ok(WorklogsByUser::new()));
    deps.setting_dao
        .expect_find_values()
        .returning(|_| Err(DaoError::DatabaseQueryError("connection reset".into())));
    deps.region_dao
        .expect_find_active()
        .returning(|| Err(DaoError::DatabaseQueryError("connection reset".into())));
    let service = deps.build_service();

    let report = service
        .get_report(&PerformanceQuery::default(), ().auth())
        .await
        .unwrap();

    assert!(report.work_status_options.is_empty());
    assert!(report.region_options.is_empty());
}
