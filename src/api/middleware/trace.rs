use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// HTTP header name for trace ID
pub const TRACE_ID_HEADER: &str = "X-Trace-Id";

tokio::task_local! {
    static CURRENT_TRACE_ID: TraceId;
}

/// Trace ID of the current request
///
/// Stored in the request extensions and scoped over the rest of the stack,
/// so error rendering can reach it without the request.
#[derive(Clone, Debug)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trace ID of the request being served, if any
    pub fn current() -> Option<TraceId> {
        CURRENT_TRACE_ID.try_with(|trace_id| trace_id.clone()).ok()
    }
}

/// Reuse a caller-supplied trace ID when it is a UUID, otherwise mint one
fn resolve_trace_id(headers: &HeaderMap) -> String {
    headers
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4)
        .to_string()
}

/// Tags every request with a trace ID
///
/// The ID is put in the request extensions, recorded on an `http_request`
/// span wrapping the rest of the stack, and echoed in the response headers.
pub async fn trace_id_middleware(mut request: Request, next: Next) -> Response {
    let trace_id = resolve_trace_id(request.headers());

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let scoped = TraceId(trace_id.clone());
    request.extensions_mut().insert(scoped.clone());

    let mut response = CURRENT_TRACE_ID
        .scope(scoped, async move {
            tracing::info!("Request started");
            let response = next.run(request).await;
            tracing::info!(status = %response.status(), "Request completed");
            response
        })
        .instrument(span)
        .await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }

    response
}
