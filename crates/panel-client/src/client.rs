//! HTTP client for the admin panel API

use std::time::Duration;

use panel_core::entities::SanctionKind;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};
use crate::models::{CurrentAdmin, ErrorBody, Listing, SanctionRecord, SettingValue};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client bound to one panel deployment
#[derive(Debug, Clone)]
pub struct PanelClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PanelClient {
    /// Create a client for `base_url` (`http://host:port`, no trailing path)
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Attach an identity token to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a path relative to the base URL, e.g. `/api/bans?page=1&rows=10`
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.http.get(format!("{}{}", self.base_url, path));
        self.send(request).await
    }

    /// One page of bans or mutes
    pub async fn sanctions(
        &self,
        kind: SanctionKind,
        page: u32,
        rows: u32,
    ) -> ClientResult<Listing<SanctionRecord>> {
        self.get_json(&crate::feed::query_key(kind, page, rows)).await
    }

    /// A single ban or mute
    pub async fn sanction(&self, kind: SanctionKind, id: i64) -> ClientResult<SanctionRecord> {
        self.get_json(&format!("/api/{}/{id}", kind.path())).await
    }

    /// The administrator the token belongs to
    pub async fn current_admin(&self) -> ClientResult<CurrentAdmin> {
        self.get_json("/api/admins/@me").await
    }

    /// Switch the dashboard server list between grid and table
    #[instrument(skip(self))]
    pub async fn set_servers_grid(&self, enabled: bool) -> ClientResult<SettingValue> {
        let request = self
            .http
            .put(format!("{}/api/settings/servers-grid", self.base_url))
            .json(&json!({ "enabled": enabled }));
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    match response.json::<ErrorBody>().await {
        Ok(body) => ClientError::Api {
            status,
            code: body.code,
            message: body.error,
        },
        Err(_) => ClientError::Api {
            status,
            code: "UNKNOWN".to_string(),
            message: "Unexpected error response".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = PanelClient::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = PanelClient::new("127.0.0.1:8080").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
