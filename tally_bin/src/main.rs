use std::sync::Arc;

use dao_impl_sqlite::{
    project::ProjectDaoImpl, region::RegionDaoImpl, report_category::ReportCategoryDaoImpl,
    setting::SettingDaoImpl, task::TaskDaoImpl, user::UserDaoImpl, worklog::WorklogDaoImpl,
    PermissionDaoImpl,
};
use service::permission::MockContext;
use service_impl::access_scope::{AccessScopeServiceDeps, AccessScopeServiceImpl};
use service_impl::category_map::{CategoryMapServiceDeps, CategoryMapServiceImpl};
use service_impl::daily_performance::{DailyPerformanceServiceDeps, DailyPerformanceServiceImpl};
use service_impl::nsh::{NshReportServiceDeps, NshReportServiceImpl};
use service_impl::user_set::{UserSetServiceDeps, UserSetServiceImpl};
use service_impl::worklog::{WorklogBatchServiceDeps, WorklogBatchServiceImpl};
use sqlx::SqlitePool;
#[cfg(feature = "json_logging")]
use tracing_subscriber::fmt::format::FmtSpan;

type Context = MockContext;
type UserService = service_impl::UserServiceDev;
type PermissionDao = PermissionDaoImpl;
type PermissionService =
    service_impl::permission::PermissionServiceImpl<PermissionDao, UserService>;
type ClockService = service_impl::clock::ClockServiceImpl;
type ConfigService = service_impl::config::ConfigServiceImpl;
type EligibilityService = service_impl::eligibility::EligibilityServiceImpl;

pub struct CategoryMapServiceDependencies;
impl CategoryMapServiceDeps for CategoryMapServiceDependencies {
    type Context = Context;
    type ReportCategoryDao = ReportCategoryDaoImpl;
}
type CategoryMapService = CategoryMapServiceImpl<CategoryMapServiceDependencies>;

pub struct WorklogBatchServiceDependencies;
impl WorklogBatchServiceDeps for WorklogBatchServiceDependencies {
    type Context = Context;
    type WorklogDao = WorklogDaoImpl;
}
type WorklogBatchService = WorklogBatchServiceImpl<WorklogBatchServiceDependencies>;

pub struct UserSetServiceDependencies;
impl UserSetServiceDeps for UserSetServiceDependencies {
    type Context = Context;
    type UserDao = UserDaoImpl;
}
type UserSetService = UserSetServiceImpl<UserSetServiceDependencies>;

pub struct AccessScopeServiceDependencies;
impl AccessScopeServiceDeps for AccessScopeServiceDependencies {
    type Context = Context;
    type PermissionService = PermissionService;
    type PermissionDao = PermissionDao;
}
type AccessScopeService = AccessScopeServiceImpl<AccessScopeServiceDependencies>;

pub struct DailyPerformanceServiceDependencies;
impl DailyPerformanceServiceDeps for DailyPerformanceServiceDependencies {
    type Context = Context;
    type AccessScopeService = AccessScopeService;
    type UserSetService = UserSetService;
    type CategoryMapService = CategoryMapService;
    type WorklogBatchService = WorklogBatchService;
    type EligibilityService = EligibilityService;
    type ClockService = ClockService;
    type ConfigService = ConfigService;
    type SettingDao = SettingDaoImpl;
    type RegionDao = RegionDaoImpl;
}
type DailyPerformanceService = DailyPerformanceServiceImpl<DailyPerformanceServiceDependencies>;

pub struct NshReportServiceDependencies;
impl NshReportServiceDeps for NshReportServiceDependencies {
    type Context = Context;
    type AccessScopeService = AccessScopeService;
    type UserSetService = UserSetService;
    type CategoryMapService = CategoryMapService;
    type WorklogBatchService = WorklogBatchService;
    type ClockService = ClockService;
    type ConfigService = ConfigService;
    type TaskDao = TaskDaoImpl;
    type ProjectDao = ProjectDaoImpl;
}
type NshReportService = NshReportServiceImpl<NshReportServiceDependencies>;

#[derive(Clone)]
pub struct RestStateImpl {
    daily_performance_service: Arc<DailyPerformanceService>,
    nsh_report_service: Arc<NshReportService>,
}
impl rest::RestStateDef for RestStateImpl {
    type DailyPerformanceService = DailyPerformanceService;
    type NshReportService = NshReportService;

    fn daily_performance_service(&self) -> Arc<Self::DailyPerformanceService> {
        self.daily_performance_service.clone()
    }
    fn nsh_report_service(&self) -> Arc<Self::NshReportService> {
        self.nsh_report_service.clone()
    }
}

impl RestStateImpl {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let permission_dao = Arc::new(PermissionDao::new(pool.clone()));
        let user_service = Arc::new(service_impl::UserServiceDev);
        let permission_service = Arc::new(PermissionService::new(
            permission_dao.clone(),
            user_service,
        ));
        let clock_service = Arc::new(service_impl::clock::ClockServiceImpl);
        let config_service = Arc::new(service_impl::config::ConfigServiceImpl);
        let eligibility_service = Arc::new(service_impl::eligibility::EligibilityServiceImpl);

        let access_scope_service = Arc::new(AccessScopeService {
            permission_service: permission_service.clone(),
            permission_dao: permission_dao.clone(),
        });
        let user_set_service = Arc::new(UserSetService {
            user_dao: Arc::new(UserDaoImpl::new(pool.clone())),
        });
        let category_map_service = Arc::new(CategoryMapService {
            report_category_dao: Arc::new(ReportCategoryDaoImpl::new(pool.clone())),
        });
        let worklog_batch_service = Arc::new(WorklogBatchService {
            worklog_dao: Arc::new(WorklogDaoImpl::new(pool.clone())),
        });

        let daily_performance_service = Arc::new(DailyPerformanceService {
            access_scope_service: access_scope_service.clone(),
            user_set_service: user_set_service.clone(),
            category_map_service: category_map_service.clone(),
            worklog_batch_service: worklog_batch_service.clone(),
            eligibility_service,
            clock_service: clock_service.clone(),
            config_service: config_service.clone(),
            setting_dao: Arc::new(SettingDaoImpl::new(pool.clone())),
            region_dao: Arc::new(RegionDaoImpl::new(pool.clone())),
        });
        let nsh_report_service = Arc::new(NshReportService {
            access_scope_service,
            user_set_service,
            category_map_service,
            worklog_batch_service,
            clock_service,
            config_service,
            task_dao: Arc::new(TaskDaoImpl::new(pool.clone())),
            project_dao: Arc::new(ProjectDaoImpl::new(pool.clone())),
        });

        Self {
            daily_performance_service,
            nsh_report_service,
        }
    }
}

/// Local development bootstrap: create the mock-auth user and grant it full
/// report access on first start.
async fn create_dev_user(pool: Arc<SqlitePool>, username: &str) {
    sqlx::query(
        r"INSERT OR IGNORE INTO user (name, update_process) VALUES (?, 'dev-first-start')",
    )
    .bind(username)
    .execute(pool.as_ref())
    .await
    .expect("Expected being able to create the dev user");
    sqlx::query(
        r"INSERT OR IGNORE INTO user_role (user_name, role_name, update_process)
        VALUES (?, 'reports-admin', 'dev-first-start')",
    )
    .bind(username)
    .execute(pool.as_ref())
    .await
    .expect("Expected being able to grant report access");
}

#[tokio::main]
async fn main() {
    let version = env!("CARGO_PKG_VERSION");

    #[cfg(feature = "local_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .pretty()
        .with_file(true)
        .finish();

    #[cfg(feature = "json_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_span_list(true)
        .with_file(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::info!("Tally backend version: {}", version);
    dotenvy::dotenv().ok();
    let pool = Arc::new(
        SqlitePool::connect("sqlite:./localdb.sqlite3")
            .await
            .expect("Could not connect to database"),
    );

    sqlx::migrate!("../migrations/sqlite")
        .run(pool.as_ref())
        .await
        .expect("Failed to run migrations");

    let rest_state = RestStateImpl::new(pool.clone());
    create_dev_user(pool.clone(), "DEVUSER").await;

    rest::start_server(rest_state).await
}
