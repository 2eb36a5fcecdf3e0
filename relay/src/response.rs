use lambda_http::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
        response::Builder,
        Error, StatusCode,
    },
    Body, Response,
};
use serde_json::Value;

fn cors() -> Builder {
    Response::builder()
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS")
        .header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
}

/// Empty 200 answer to a CORS preflight.
pub fn preflight() -> Result<Response<Body>, Error> {
    cors().status(StatusCode::OK).body(Body::Empty)
}

pub fn json(
    status: StatusCode,
    body: &Value,
) -> Result<Response<Body>, Error> {
    cors()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body.to_string()))
}
