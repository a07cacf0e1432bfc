use axum::{
    body::Body,
    extract::{Query, State},
    response::Response,
    routing::get,
    Extension, Router,
};
use rest_types::NshReportTO;
use serde::Deserialize;
use service::nsh::{NshQuery, NshReportService};
use service::report::{PageRequest, DEFAULT_PAGE_SIZE};
use service::ServiceError;
use tracing::instrument;

use crate::params::{parse_date_param, parse_uuid_param};
use crate::{error_handler, Context, RestStateDef};

pub fn generate_route<RestState: RestStateDef>() -> Router<RestState> {
    Router::new().route("/nsh", get(get_nsh_report::<RestState>))
}

#[derive(Clone, Debug, Deserialize)]
pub struct NshReportRequest {
    date: Option<String>,
    work_status: Option<String>,
    region: Option<String>,
    cohort: Option<String>,
    search: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

impl NshReportRequest {
    fn to_query(&self) -> Result<NshQuery, ServiceError> {
        let mut failures = Vec::new();
        let date = parse_date_param("date", self.date.as_deref(), &mut failures);
        let region_id = parse_uuid_param("region", self.region.as_deref(), &mut failures);
        let cohort_id = parse_uuid_param("cohort", self.cohort.as_deref(), &mut failures);
        if !failures.is_empty() {
            return Err(ServiceError::ValidationError(failures.into()));
        }
        Ok(NshQuery {
            date,
            work_status: self.work_status.as_deref().map(Into::into),
            region_id,
            cohort_id,
            search: self.search.as_deref().map(Into::into),
            page: PageRequest {
                page: self.page.unwrap_or(1),
                per_page: self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
            },
        })
    }
}

#[instrument(skip(rest_state))]
pub async fn get_nsh_report<RestState: RestStateDef>(
    rest_state: State<RestState>,
    query: Query<NshReportRequest>,
    Extension(context): Extension<Context>,
) -> Response {
    error_handler(
        (async {
            let report_query = query.to_query()?;
            let report: NshReportTO = (&rest_state
                .nsh_report_service()
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
