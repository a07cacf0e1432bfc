use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use service::permission::MockContext;

pub type Context = MockContext;

pub async fn context_extractor(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(MockContext);
    next.run(request).await
}
