//! HTTP API Client
//!
//! [`Backend`] over the browser's `fetch`, via gloo-net. Each operation is
//! described by an [`Endpoint`] (method, path and JSON body) before it is
//! sent.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    ApiError, ApiResult, AuthUrl, Backend, CodeExchange, Credentials, DashboardMetrics,
    DocumentStatus, HealthStatus, RecentActivity,
};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One backend operation
#[derive(Clone, Copy, Debug)]
pub enum Endpoint<'a> {
    GetSettings,
    UpdateSettings(&'a Credentials),
    XeroAuthUrl,
    ExchangeXeroCode(&'a str),
    RefreshXeroToken,
    DashboardMetrics,
    DocumentStatus,
    RecentActivity,
    Health,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::UpdateSettings(_)
            | Endpoint::ExchangeXeroCode(_)
            | Endpoint::RefreshXeroToken => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetSettings | Endpoint::UpdateSettings(_) => "/api/settings",
            Endpoint::XeroAuthUrl => "/api/xero/auth-url",
            Endpoint::ExchangeXeroCode(_) => "/api/xero/callback",
            Endpoint::RefreshXeroToken => "/api/xero/refresh-token",
            Endpoint::DashboardMetrics => "/api/dashboard/metrics",
            Endpoint::DocumentStatus => "/api/dashboard/status",
            Endpoint::RecentActivity => "/api/dashboard/recent-activity",
            Endpoint::Health => "/health",
        }
    }

    /// JSON body, if the request carries one. Settings are always sent
    /// normalized.
    pub fn body(&self) -> ApiResult<Option<Value>> {
        let body = match self {
            Endpoint::UpdateSettings(settings) => serde_json::to_value(settings.normalized()),
            Endpoint::ExchangeXeroCode(code) => serde_json::to_value(CodeExchange { code: *code }),
            _ => return Ok(None),
        };

        body.map(Some).map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// Backend reached over HTTP
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    /// Client for the configured backend
    pub fn from_env() -> Self {
        Self::new(config::api_base())
    }

    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, endpoint: Endpoint<'_>) -> ApiResult<Response> {
        let url = self.url(endpoint.path());
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        let request = match endpoint.body()? {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(&response)?;
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> ApiResult<T> {
        self.send(endpoint)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn ensure_ok(response: &Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
        })
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn get_settings(&self) -> ApiResult<Credentials> {
        self.fetch_json(Endpoint::GetSettings).await
    }

    async fn update_settings(&self, settings: &Credentials) -> ApiResult<()> {
        self.send(Endpoint::UpdateSettings(settings)).await.map(|_| ())
    }

    async fn xero_auth_url(&self) -> ApiResult<AuthUrl> {
        self.fetch_json(Endpoint::XeroAuthUrl).await
    }

    async fn exchange_xero_code(&self, code: &str) -> ApiResult<()> {
        self.send(Endpoint::ExchangeXeroCode(code)).await.map(|_| ())
    }

    async fn refresh_xero_token(&self) -> ApiResult<()> {
        self.send(Endpoint::RefreshXeroToken).await.map(|_| ())
    }

    async fn dashboard_metrics(&self) -> ApiResult<DashboardMetrics> {
        self.fetch_json(Endpoint::DashboardMetrics).await
    }

    async fn document_status(&self) -> ApiResult<DocumentStatus> {
        self.fetch_json(Endpoint::DocumentStatus).await
    }

    async fn recent_activity(&self) -> ApiResult<Vec<RecentActivity>> {
        self.fetch_json(Endpoint::RecentActivity).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.fetch_json(Endpoint::Health).await
    }
}
