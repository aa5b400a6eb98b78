use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use sweep_core::VenueId;

use crate::error::GatewayError;

/// Minimal JSON-over-HTTP client shared by the venue adapters
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    venue: VenueId,
}

impl HttpClient {
    pub fn new(
        venue: VenueId,
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|source| GatewayError::Http {
                venue: venue.clone(),
                source,
            })?;

        Ok(HttpClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            venue,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        let url = self.url(path);
        debug!("[HTTP] GET {} {:?}", url, query);

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.http_error(e))?;

        if !status.is_success() {
            return Err(GatewayError::Api {
                venue: self.venue.clone(),
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .map(|reason| format!("{reason}: {text}"))
                    .unwrap_or(text),
            });
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Parse {
            venue: self.venue.clone(),
            message: e.to_string(),
        })
    }

    fn http_error(&self, source: reqwest::Error) -> GatewayError {
        GatewayError::Http {
            venue: self.venue.clone(),
            source,
        }
    }
}
