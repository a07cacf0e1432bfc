use std::sync::Arc;

mod nsh;
mod params;
mod performance;
mod session;

use axum::{body::Body, middleware, response::Response, Router};
use rest_types::ValidationFailureTO;
use thiserror::Error;

pub use session::Context;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Service error")]
    ServiceError(#[from] service::ServiceError),
}

fn error_handler(result: Result<Response, RestError>) -> Response {
    match result {
        Ok(response) => response,
        Err(RestError::ServiceError(service::ServiceError::Forbidden)) => {
            Response::builder().status(403).body(Body::empty()).unwrap()
        }
        Err(RestError::ServiceError(err @ service::ServiceError::NoRegionAssigned)) => {
            Response::builder()
                .status(403)
                .body(Body::new(err.to_string()))
                .unwrap()
        }
        Err(RestError::ServiceError(service::ServiceError::ValidationError(items))) => {
            let errors: Arc<[ValidationFailureTO]> =
                items.iter().map(ValidationFailureTO::from).collect();
            Response::builder()
                .status(422)
                .header("content-type", "application/json")
                .body(Body::new(
                    serde_json::to_string(&serde_json::json!({ "errors": errors })).unwrap(),
                ))
                .unwrap()
        }
        Err(RestError::ServiceError(service::ServiceError::DatabaseQueryError(err))) => {
            tracing::error!("Storage error while serving a report: {}", err);
            Response::builder()
                .status(500)
                .body(Body::new("Internal server error".to_string()))
                .unwrap()
        }
    }
}

pub trait RestStateDef: Clone + Send + Sync + 'static {
    type DailyPerformanceService: service::daily_performance::DailyPerformanceService<Context = Context>
        + Send
        + Sync
        + 'static;
    type NshReportService: service::nsh::NshReportService<Context = Context>
        + Send
        + Sync
        + 'static;

    fn daily_performance_service(&self) -> Arc<Self::DailyPerformanceService>;
    fn nsh_report_service(&self) -> Arc<Self::NshReportService>;
}

pub async fn start_server<RestState: RestStateDef>(rest_state: RestState) {
    let app = Router::new()
        .nest(
            "/report",
            Router::new()
                .merge(performance::generate_route())
                .merge(nsh::generate_route()),
        )
        .layer(middleware::from_fn(session::context_extractor))
        .with_state(rest_state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("Could not bind server");
    axum::serve(listener, app)
        .await
        .expect("Could not start server");
}
