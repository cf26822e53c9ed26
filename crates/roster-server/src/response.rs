//! JSON and plain-text response builders

use crate::error::Result;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Response type produced by every handler
pub type HttpResponse = Response<Full<Bytes>>;

/// Encode `payload` as JSON and build a response with `status`.
///
/// The payload is serialized into a buffer before the response exists, so an
/// encoding failure leaves nothing committed and the caller is free to answer
/// with a different status.
pub fn send_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Result<HttpResponse> {
    let body = serde_json::to_vec(payload)?;

    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))?;

    Ok(response)
}

/// Plain-text response carrying `message`
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from(format!("{}\n", message))));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

    response
}
