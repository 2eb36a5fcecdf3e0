use crate::{
    config::Credentials,
    error::{Error, Result},
};
use async_trait::async_trait;
use log::{debug, error, info};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde_json::{json, Value};
use url::Url;

pub const AIRTABLE_ENDPOINT: &str = "https://api.airtable.com/v0/";

/// Everything except the characters a URI component may carry verbatim.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The record operations a handler forwards upstream.
#[async_trait]
pub trait Records: Send + Sync {
    /// Lists one page of records, continuing from an opaque cursor if given.
    async fn list(&self, offset: Option<&str>) -> Result<Value>;

    /// Creates a single record from a field map.
    async fn create(&self, fields: Value) -> Result<Value>;
}

pub struct AirtableClient {
    http: Client,
    token: String,
    url: Url,
}

impl AirtableClient {
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_endpoint(AIRTABLE_ENDPOINT, credentials)
    }

    pub fn with_endpoint(
        endpoint: &str,
        credentials: Credentials,
    ) -> Result<Self> {
        let mut url = Url::parse(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| Error::Endpoint(endpoint.into()))?
            .pop_if_empty()
            .push(&credentials.base_id)
            .push(&credentials.table_id);
        Ok(AirtableClient {
            http: Client::builder().build()?,
            token: credentials.token,
            url,
        })
    }

    pub fn records_url(
        &self,
        offset: Option<&str>,
    ) -> Url {
        let mut url = self.url.clone();
        if let Some(offset) = offset.filter(|offset| !offset.is_empty()) {
            let query = format!("offset={}", utf8_percent_encode(offset, COMPONENT));
            url.set_query(Some(&query));
        }
        url
    }

    async fn parse(response: Response) -> Result<Value> {
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }
}

#[async_trait]
impl Records for AirtableClient {
    async fn list(&self, offset: Option<&str>) -> Result<Value> {
        let url = self.records_url(offset);
        debug!("listing records from {}", url);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!("airtable rejected list with {}: {}", status, body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        let page = Self::parse(response).await?;
        info!(
            "fetched {} records",
            page["records"].as_array().map_or(0, Vec::len)
        );
        Ok(page)
    }

    async fn create(&self, fields: Value) -> Result<Value> {
        if let Some(names) = fields.as_object() {
            debug!("creating record with fields {:?}", names.keys().collect::<Vec<_>>());
        }
        let response = self
            .http
            .post(self.records_url(None))
            .bearer_auth(&self.token)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = Self::parse(response).await?;
            error!("airtable rejected create with {}: {}", status, body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }
        let record = Self::parse(response).await?;
        info!("created record {}", record["id"]);
        Ok(record)
    }
}
