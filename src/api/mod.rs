//! Backend API
//!
//! Typed access to the Dext to Xero backend. Views depend on the [`Backend`]
//! trait; [`HttpBackend`] is the browser implementation.

mod client;
mod error;
#[cfg(test)]
pub mod fake;
mod types;

pub use client::HttpBackend;
pub use error::{ApiError, ApiResult};
pub use types::{
    ActivityStatus, AuthUrl, CodeExchange, Credentials, DashboardMetrics, DocumentStatus,
    HealthStatus, RecentActivity,
};

use async_trait::async_trait;

/// One method per backend endpoint. Each call performs exactly one request.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /api/settings`
    async fn get_settings(&self) -> ApiResult<Credentials>;

    /// `POST /api/settings` with the full record
    async fn update_settings(&self, settings: &Credentials) -> ApiResult<()>;

    /// `GET /api/xero/auth-url`
    async fn xero_auth_url(&self) -> ApiResult<AuthUrl>;

    /// `POST /api/xero/callback` with `{ "code": code }`
    async fn exchange_xero_code(&self, code: &str) -> ApiResult<()>;

    /// `POST /api/xero/refresh-token`
    async fn refresh_xero_token(&self) -> ApiResult<()>;

    /// `GET /api/dashboard/metrics`
    async fn dashboard_metrics(&self) -> ApiResult<DashboardMetrics>;

    /// `GET /api/dashboard/status`
    async fn document_status(&self) -> ApiResult<DocumentStatus>;

    /// `GET /api/dashboard/recent-activity`
    async fn recent_activity(&self) -> ApiResult<Vec<RecentActivity>>;

    /// `GET /health`
    async fn health(&self) -> ApiResult<HealthStatus>;
}
