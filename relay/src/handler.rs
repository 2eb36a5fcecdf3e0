use crate::{
    config::{Config, Missing},
    error::Result,
    response,
    upstream::{AirtableClient, Records},
};
use lambda_http::{
    http::{Method, StatusCode},
    Body, Request, RequestExt, Response,
};
use log::{error, info, warn};
use serde_json::{json, Value};

/// Serves one function's requests against a single upstream table.
pub struct Handler<R> {
    records: std::result::Result<R, Missing>,
}

impl Handler<AirtableClient> {
    /// Builds the upstream client when the profile is complete. An incomplete
    /// profile still yields a handler, one that answers with a configuration error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let records = match config.credentials() {
            Ok(credentials) => Ok(AirtableClient::new(credentials)?),
            Err(missing) => {
                warn!("incomplete configuration {:?}", missing);
                Err(missing)
            }
        };
        Ok(Handler { records })
    }
}

impl<R> Handler<R>
where
    R: Records,
{
    pub fn new(records: R) -> Self {
        Handler {
            records: Ok(records),
        }
    }

    pub fn unconfigured(missing: Missing) -> Self {
        Handler {
            records: Err(missing),
        }
    }

    pub async fn handle(
        &self,
        request: Request,
    ) -> std::result::Result<Response<Body>, lambda_http::Error> {
        info!("{} {}", request.method(), request.uri().path());
        if request.method() == Method::OPTIONS {
            return Ok(response::preflight()?);
        }

        let records = match &self.records {
            Ok(records) => records,
            Err(missing) => {
                error!("rejecting request, configuration incomplete");
                return Ok(response::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({
                        "error": "server configuration incomplete",
                        "debug": missing,
                    }),
                )?);
            }
        };

        let (status, body) = match dispatch(records, &request).await {
            Ok(reply) => reply,
            Err(err) => {
                error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal server error",
                        "details": err.to_string(),
                    }),
                )
            }
        };
        Ok(response::json(status, &body)?)
    }
}

async fn dispatch<R>(
    records: &R,
    request: &Request,
) -> Result<(StatusCode, Value)>
where
    R: Records,
{
    match request.method() {
        &Method::GET => {
            let params = request.query_string_parameters();
            let page = records.list(params.first("offset")).await?;
            Ok((StatusCode::OK, page))
        }
        &Method::POST => {
            let payload: Value = if request.body().is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(request.body())?
            };
            match payload.get("fields").filter(|fields| is_present(fields)) {
                Some(fields) => {
                    let record = records.create(fields.clone()).await?;
                    Ok((StatusCode::CREATED, record))
                }
                None => {
                    error!("post body carries no fields");
                    Ok((
                        StatusCode::BAD_REQUEST,
                        json!({ "error": "invalid data: \"fields\" is required" }),
                    ))
                }
            }
        }
        other => {
            error!("method {} not allowed", other);
            Ok((
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "method not allowed" }),
            ))
        }
    }
}

/// `fields` counts as given unless it is null, false, zero or an empty string.
fn is_present(fields: &Value) -> bool {
    match fields {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
