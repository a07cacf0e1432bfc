use axum::{
    body::Body,
    extract::{Query, State},
    response::Response,
    routing::get,
    Extension, Router,
};
use rest_types::PerformanceReportTO;
use serde::Deserialize;
use service::daily_performance::{DailyPerformanceService, PerformanceQuery};
use service::report::{SortField, SortOrder};
use service::ServiceError;
use tracing::instrument;

use crate::params::{parse_date_param, parse_uuid_param};
use crate::{error_handler, Context, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new().route("/performance", get(get_performance_report::<RestState>))
}

#[derive(Clone, Debug, Deserialize)]
pub struct PerformanceReportRequest {
    date: Option<String>,
    work_status: Option<String>,
    region: Option<String>,
    cohort: Option<String>,
    search: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

impl PerformanceReportRequest {
    fn to_query(&self) -> Result<PerformanceQuery, ServiceError> {
        let mut failures = Vec::new();
        let date = parse_date_param("date", self.date.as_deref(), &mut failures);
        let region_id = parse_uuid_param("region", self.region.as_deref(), &mut failures);
        let cohort_id = parse_uuid_param("cohort", self.cohort.as_deref(), &mut failures);
        if !failures.is_empty() {
            return Err(ServiceError::ValidationError(failures.into()));
        }
        Ok(PerformanceQuery {
            date,
            work_status: self.work_status.as_deref().map(Into::into),
            region_id,
            cohort_id,
            search: self.search.as_deref().map(Into::into),
            sort_by: self
                .sort_by
                .as_deref()
                .map(SortField::from_param)
                .unwrap_or_default(),
            sort_order: self
                .sort_order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
        })
    }
}

#[instrument(skip(rest_state))]
pub async fn get_performance_report<RestState: RestStateDef>(
    rest_state: State<RestState>,
    query: Query<PerformanceReportRequest>,
    Extension(context): Extension<Context>,
) -> Response {
    error_handler(
        (async {
            let report_query = query.to_query()?;
            let report: PerformanceReportTO = (&rest_state
                .daily_performance_service()
                .get_report(&report_query, context.into())
                .await?)
                .into();
            Ok(Response::builder()
                .status(200)
                .header("content-type", "application/json")
                .body(Body::new(serde_json::to_string(&report).unwrap()))
                .unwrap())
        })
        .await,
    )
}
