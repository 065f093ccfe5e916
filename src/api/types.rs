//! Wire Types
//!
//! JSON shapes exchanged with the backend. Field names are camelCase on the
//! wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Third-party credentials managed by the settings page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub dext_api_key: Option<String>,
    #[serde(default)]
    pub xero_client_id: Option<String>,
    #[serde(default)]
    pub xero_client_secret: Option<String>,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Service-account key file contents. Structured JSON on the wire; the
    /// form may hold the raw text the user typed as a JSON string.
    #[serde(default)]
    pub google_cloud_vision_credentials: Option<Value>,
}

impl Credentials {
    /// Copy of the record as it should be transmitted.
    ///
    /// Vision credentials held as text are parsed into structured JSON. Blank
    /// text becomes `null`; text that is not JSON is left for the backend to
    /// reject.
    pub fn normalized(&self) -> Self {
        let google_cloud_vision_credentials = match &self.google_cloud_vision_credentials {
            Some(Value::String(text)) if text.trim().is_empty() => None,
            Some(Value::String(text)) => Some(
                serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.clone())),
            ),
            other => other.clone(),
        };

        Self {
            google_cloud_vision_credentials,
            ..self.clone()
        }
    }
}

/// Xero authorization redirect
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrl {
    pub auth_url: String,
}

/// Body of the authorization code exchange
#[derive(Debug, Serialize)]
pub struct CodeExchange<'a> {
    pub code: &'a str,
}

/// Headline numbers for the dashboard
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    pub total_documents: u64,
    /// Percentage, 0-100
    pub success_rate: f64,
    /// Seconds
    pub average_processing_time: f64,
    pub documents_today: u64,
    pub total_amount: f64,
}

/// Document tally by processing state
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentStatus {
    pub pending: u64,
    pub processed: u64,
    pub failed: u64,
    pub in_review: u64,
}

/// Outcome of a processed document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Failed,
    Pending,
    #[serde(other)]
    Review,
}

/// One entry of the recent activity feed
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    pub document_name: String,
    pub status: ActivityStatus,
    pub timestamp: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend liveness probe
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}
