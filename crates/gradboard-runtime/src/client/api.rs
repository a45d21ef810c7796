use crate::config::{ChartSource, ServerConfig};
use crate::{Error, Result};
use gradboard_types::{Announcement, Endpoint, Record, parse_collection};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Thin JSON-over-HTTP client for the dashboard endpoints.
///
/// Plain GETs: no body, no auth headers, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let base_url = Url::parse(&server.base_url)
            .map_err(|e| Error::Config(format!("invalid base_url `{}`: {}", server.base_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = server.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self, endpoint: &Endpoint) -> Result<Url> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| Error::Config(format!("invalid endpoint `{}`: {}", endpoint.path(), e)))
    }

    /// Body of a successful GET; non-2xx answers become `Error::Status`
    async fn get_body(&self, endpoint: &Endpoint) -> Result<String> {
        let url = self.url(endpoint)?;
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                endpoint: endpoint.path().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(endpoint = endpoint.path(), bytes = body.len(), "response received");
        Ok(body)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let body = self.get_body(endpoint).await?;
        serde_json::from_str(&body).map_err(|e| decode_error(endpoint, e))
    }

    pub async fn schools(&self) -> Result<Vec<Record>> {
        let endpoint = Endpoint::SchoolsList;
        let body = self.get_body(&endpoint).await?;
        parse_collection(&body).map_err(|e| decode_error(&endpoint, e))
    }

    /// `null` is treated like an empty list
    pub async fn announcements(&self) -> Result<Vec<Announcement>> {
        let items: Option<Vec<Announcement>> = self.get_json(&Endpoint::Announcements).await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn chart_payload(&self, source: &ChartSource) -> Result<Value> {
        self.get_json(&Endpoint::from(source.endpoint.as_str())).await
    }
}

fn decode_error(endpoint: &Endpoint, err: impl std::fmt::Display) -> Error {
    Error::Decode {
        endpoint: endpoint.path().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls_join_onto_base() -> Result<()> {
        let client = ApiClient::new(&ServerConfig {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: Some(5),
        })?;
        assert_eq!(
            client.url(&Endpoint::SchoolsList)?.as_str(),
            "http://127.0.0.1:5000/api/schools/list"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = ApiClient::new(&ServerConfig {
            base_url: "not a url".to_string(),
            timeout_secs: None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
