//! Request ID generation.
//!
//! Every inbound request gets a UUID v4 `x-request-id`, attached as early as
//! possible and propagated to the response so log lines and client reports
//! can be correlated.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Generates a fresh UUID v4 per request.
#[derive(Clone, Copy, Default)]
pub struct MakeConsoleRequestId;

impl MakeRequestId for MakeConsoleRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
