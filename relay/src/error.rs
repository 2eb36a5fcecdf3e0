use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("airtable error: {status} - {body}")]
    Upstream { status: u16, body: String },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("endpoint {0} cannot carry a base and table path")]
    Endpoint(String),
    #[error("invalid endpoint: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
