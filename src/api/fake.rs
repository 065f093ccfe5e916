//! In-memory [`Backend`] that records every call, for view tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{
    ApiError, ApiResult, AuthUrl, Backend, Credentials, DashboardMetrics, DocumentStatus,
    HealthStatus, RecentActivity,
};

/// A call observed by [`FakeBackend`]
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    GetSettings,
    UpdateSettings(Credentials),
    XeroAuthUrl,
    ExchangeXeroCode(String),
    RefreshXeroToken,
    DashboardMetrics,
    DocumentStatus,
    RecentActivity,
    Health,
}

/// Canned responses plus a call log. Every operation succeeds with the
/// stored value unless its `fail_*` status is set.
#[derive(Default)]
pub struct FakeBackend {
    pub settings: Credentials,
    pub auth_url: String,
    pub metrics: DashboardMetrics,
    pub status: DocumentStatus,
    pub activity: Vec<RecentActivity>,
    pub fail_settings_read: Option<u16>,
    pub fail_settings_write: Option<u16>,
    pub fail_auth_url: Option<u16>,
    pub fail_exchange: Option<u16>,
    pub fail_refresh: Option<u16>,
    pub fail_metrics: Option<u16>,
    pub fail_status: Option<u16>,
    pub fail_activity: Option<u16>,
    pub fail_health: Option<u16>,
    pub log: RefCell<Vec<Call>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.log.borrow().iter().filter(|c| *c == call).count()
    }

    fn record<T>(&self, call: Call, failure: Option<u16>, value: T) -> ApiResult<T> {
        self.log.borrow_mut().push(call);
        match failure {
            Some(status) => Err(ApiError::Status { status }),
            None => Ok(value),
        }
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn get_settings(&self) -> ApiResult<Credentials> {
        self.record(Call::GetSettings, self.fail_settings_read, self.settings.clone())
    }

    async fn update_settings(&self, settings: &Credentials) -> ApiResult<()> {
        self.record(
            Call::UpdateSettings(settings.clone()),
            self.fail_settings_write,
            (),
        )
    }

    async fn xero_auth_url(&self) -> ApiResult<AuthUrl> {
        let url = AuthUrl {
            auth_url: self.auth_url.clone(),
        };
        self.record(Call::XeroAuthUrl, self.fail_auth_url, url)
    }

    async fn exchange_xero_code(&self, code: &str) -> ApiResult<()> {
        self.record(Call::ExchangeXeroCode(code.to_string()), self.fail_exchange, ())
    }

    async fn refresh_xero_token(&self) -> ApiResult<()> {
        self.record(Call::RefreshXeroToken, self.fail_refresh, ())
    }

    async fn dashboard_metrics(&self) -> ApiResult<DashboardMetrics> {
        self.record(Call::DashboardMetrics, self.fail_metrics, self.metrics.clone())
    }

    async fn document_status(&self) -> ApiResult<DocumentStatus> {
        self.record(Call::DocumentStatus, self.fail_status, self.status.clone())
    }

    async fn recent_activity(&self) -> ApiResult<Vec<RecentActivity>> {
        self.record(Call::RecentActivity, self.fail_activity, self.activity.clone())
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let health = HealthStatus {
            status: "healthy".to_string(),
            version: Some("1.0.0".to_string()),
        };
        self.record(Call::Health, self.fail_health, health)
    }
}
