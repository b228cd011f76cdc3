use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use scorelane::middleware::request_trace::RequestTrace;
use scorelane::middleware::structured_logger::StructuredLogger;
use scorelane::middleware::trace_span::TraceSpan;
use scorelane::routes;
use scorelane::state::app_state::AppState;

/// Build a test service with production routes and the tracing middleware.
///
/// CORS is left out; `main.rs` adds it in front of the same stack.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    create_test_app_with_data(web::Data::new(state)).await
}

/// Same as [`create_test_app`] but shares the caller's `web::Data`, so the
/// test can reach the database behind the app.
pub async fn create_test_app_with_data(
    data: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(routes::configure),
    )
    .await
}
