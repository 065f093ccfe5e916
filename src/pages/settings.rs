//! Settings Page
//!
//! Credential form for the Dext, Xero, OpenAI and Google Cloud Vision
//! integrations, plus the Xero connect / token refresh actions.

use leptos::logging::error;
use leptos::*;
use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::api::{ApiResult, Backend, Credentials, HttpBackend};
use crate::components::{Alert, AlertVariant, Loading};

pub const LOAD_FAILED: &str = "Failed to load settings";
pub const SAVE_FAILED: &str = "Failed to update settings";
pub const SAVED: &str = "Settings updated successfully";
pub const AUTH_URL_FAILED: &str = "Failed to start Xero authentication";
pub const REFRESH_FAILED: &str = "Failed to refresh Xero token";
pub const REFRESHED: &str = "Xero token refreshed";

/// Editable fields of the credential record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialField {
    DextApiKey,
    XeroClientId,
    XeroClientSecret,
    OpenaiApiKey,
    VisionCredentials,
}

impl CredentialField {
    fn name(self) -> &'static str {
        match self {
            CredentialField::DextApiKey => "dextApiKey",
            CredentialField::XeroClientId => "xeroClientId",
            CredentialField::XeroClientSecret => "xeroClientSecret",
            CredentialField::OpenaiApiKey => "openaiApiKey",
            CredentialField::VisionCredentials => "googleCloudVisionCredentials",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CredentialField::DextApiKey => "Dext API Key",
            CredentialField::XeroClientId => "Xero Client ID",
            CredentialField::XeroClientSecret => "Xero Client Secret",
            CredentialField::OpenaiApiKey => "OpenAI API Key",
            CredentialField::VisionCredentials => "Google Cloud Vision Credentials (JSON)",
        }
    }

    /// Secrets are masked; the client id is not secret.
    fn input_type(self) -> &'static str {
        match self {
            CredentialField::XeroClientId => "text",
            _ => "password",
        }
    }
}

/// Local state of the settings page
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsForm {
    pub record: Credentials,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            record: Credentials::default(),
            loading: true,
            saving: false,
            error: None,
            success: None,
        }
    }
}

impl SettingsForm {
    /// Apply the initial fetch. On failure the empty record stays in place.
    pub fn loaded(&mut self, result: ApiResult<Credentials>) {
        match result {
            Ok(record) => self.record = record,
            Err(e) => {
                error!("Failed to load settings: {}", e);
                self.error = Some(LOAD_FAILED);
            }
        }
        self.loading = false;
    }

    /// Text shown in the input for `field`
    pub fn value(&self, field: CredentialField) -> String {
        let record = &self.record;
        match field {
            CredentialField::DextApiKey => record.dext_api_key.clone().unwrap_or_default(),
            CredentialField::XeroClientId => record.xero_client_id.clone().unwrap_or_default(),
            CredentialField::XeroClientSecret => {
                record.xero_client_secret.clone().unwrap_or_default()
            }
            CredentialField::OpenaiApiKey => record.openai_api_key.clone().unwrap_or_default(),
            CredentialField::VisionCredentials => match &record.google_cloud_vision_credentials {
                None => String::new(),
                Some(Value::String(text)) => text.clone(),
                Some(json) => serde_json::to_string_pretty(json).unwrap_or_default(),
            },
        }
    }

    /// Replace a single field with what the user typed
    pub fn edit(&mut self, field: CredentialField, value: String) {
        let record = &mut self.record;
        match field {
            CredentialField::DextApiKey => record.dext_api_key = Some(value),
            CredentialField::XeroClientId => record.xero_client_id = Some(value),
            CredentialField::XeroClientSecret => record.xero_client_secret = Some(value),
            CredentialField::OpenaiApiKey => record.openai_api_key = Some(value),
            CredentialField::VisionCredentials => {
                record.google_cloud_vision_credentials = Some(Value::String(value))
            }
        }
    }

    /// Clear feedback from the previous action
    pub fn clear_feedback(&mut self) {
        self.error = None;
        self.success = None;
    }

    /// Start a save; returns the full record to send
    pub fn begin_submit(&mut self) -> Credentials {
        self.clear_feedback();
        self.saving = true;
        self.record.clone()
    }

    /// Record the save outcome. The record itself is left as entered.
    pub fn finish_submit(&mut self, result: ApiResult<()>) {
        self.saving = false;
        match result {
            Ok(()) => self.success = Some(SAVED),
            Err(e) => {
                error!("Failed to update settings: {}", e);
                self.error = Some(SAVE_FAILED);
            }
        }
    }

    pub fn finish_refresh(&mut self, result: ApiResult<()>) {
        match result {
            Ok(()) => self.success = Some(REFRESHED),
            Err(e) => {
                error!("Failed to refresh Xero token: {}", e);
                self.error = Some(REFRESH_FAILED);
            }
        }
    }
}

/// Ask the backend where to send the browser for Xero consent.
pub async fn authorization_url<B: Backend + ?Sized>(backend: &B) -> Result<String, &'static str> {
    backend
        .xero_auth_url()
        .await
        .map(|url| url.auth_url)
        .map_err(|e| {
            error!("Failed to get Xero auth URL: {}", e);
            AUTH_URL_FAILED
        })
}

/// Full-page navigation away from the app
fn redirect_to(url: &str) -> Result<(), JsValue> {
    window().location().set_href(url)
}

/// Start a save on a live form. A disposed form yields nothing to send.
fn take_submission(form: RwSignal<SettingsForm>) -> Option<Credentials> {
    form.try_update(|f| f.begin_submit())
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let backend = store_value(HttpBackend::from_env());
    let form = create_rw_signal(SettingsForm::default());

    // Fetch the record once on mount
    create_effect(move |_| {
        let backend = backend.get_value();
        spawn_local(async move {
            let result = backend.get_settings().await;
            form.update(|f| f.loaded(result));
        });
    });

    let loading = create_memo(move |_| form.with(|f| f.loading));
    let saving = create_memo(move |_| form.with(|f| f.saving));
    let error_message = create_memo(move |_| form.with(|f| f.error));
    let success_message = create_memo(move |_| form.with(|f| f.success));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(record) = take_submission(form) else {
            return;
        };
        let backend = backend.get_value();
        spawn_local(async move {
            let result = backend.update_settings(&record).await;
            form.update(|f| f.finish_submit(result));
        });
    };

    let connect_xero = move |_| {
        form.update(|f| f.clear_feedback());

        let backend = backend.get_value();
        spawn_local(async move {
            let outcome = match authorization_url(&backend).await {
                Ok(url) => redirect_to(&url).map_err(|e| {
                    error!("Failed to navigate to Xero: {:?}", e);
                    AUTH_URL_FAILED
                }),
                Err(message) => Err(message),
            };

            if let Err(message) = outcome {
                form.update(|f| f.error = Some(message));
            }
        });
    };

    let refresh_token = move |_| {
        form.update(|f| f.clear_feedback());

        let backend = backend.get_value();
        spawn_local(async move {
            let result = backend.refresh_xero_token().await;
            form.update(|f| f.finish_refresh(result));
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">"Settings"</h1>
                <p class="text-gray-500 mt-1">"Credentials for the Dext, Xero, OpenAI and Vision integrations"</p>
            </div>

            <Alert message=error_message variant=AlertVariant::Error />
            <Alert message=success_message variant=AlertVariant::Success />

            {move || {
                if loading.get() {
                    view! { <Loading message="Loading settings..." /> }.into_view()
                } else {
                    view! {
                        <form on:submit=on_submit class="space-y-4 bg-white shadow rounded-lg p-6">
                            <CredentialInput field=CredentialField::DextApiKey form=form />
                            <CredentialInput field=CredentialField::XeroClientId form=form />
                            <CredentialInput field=CredentialField::XeroClientSecret form=form />
                            <CredentialInput field=CredentialField::OpenaiApiKey form=form />
                            <VisionCredentialsInput form=form />

                            <div class="flex flex-wrap gap-3 pt-2">
                                <button
                                    type="submit"
                                    disabled=move || saving.get()
                                    class="bg-blue-600 text-white px-4 py-2 rounded-md font-medium
                                           hover:bg-blue-700 disabled:bg-gray-400 transition-colors"
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                                </button>
                                <button
                                    type="button"
                                    on:click=connect_xero
                                    class="bg-white text-blue-700 border border-blue-600 px-4 py-2 rounded-md
                                           font-medium hover:bg-blue-50 transition-colors"
                                >
                                    "Connect to Xero"
                                </button>
                                <button
                                    type="button"
                                    on:click=refresh_token
                                    class="bg-white text-gray-700 border border-gray-300 px-4 py-2 rounded-md
                                           font-medium hover:bg-gray-50 transition-colors"
                                >
                                    "Refresh Xero Token"
                                </button>
                            </div>
                        </form>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Single-line credential input bound to one field
#[component]
fn CredentialInput(
    field: CredentialField,
    form: RwSignal<SettingsForm>,
) -> impl IntoView {
    let value = create_memo(move |_| form.with(|f| f.value(field)));

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-700">
                {field.label()}
            </label>
            <input
                id=field.name()
                name=field.name()
                type=field.input_type()
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm
                       focus:border-blue-500 focus:outline-none"
            />
        </div>
    }
}

/// Multi-line input for the service-account key file
#[component]
fn VisionCredentialsInput(form: RwSignal<SettingsForm>) -> impl IntoView {
    let field = CredentialField::VisionCredentials;
    let value = create_memo(move |_| form.with(|f| f.value(field)));

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-700">
                {field.label()}
            </label>
            <textarea
                id=field.name()
                name=field.name()
                rows=10
                prop:value=move || value.get()
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                placeholder="Paste your Google Cloud Vision credentials JSON here"
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm
                       focus:border-blue-500 focus:outline-none font-mono text-sm"
            />
            <p class="mt-1 text-sm text-gray-500">
                "This should be the contents of your Google Cloud Vision service account key file"
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeBackend};
    use crate::api::ApiError;
    use futures::executor::block_on;
    use serde_json::json;

    fn stored_record() -> Credentials {
        Credentials {
            dext_api_key: Some("dext-123".to_string()),
            xero_client_id: Some("client-id".to_string()),
            xero_client_secret: None,
            openai_api_key: Some("sk-test".to_string()),
            google_cloud_vision_credentials: Some(json!({ "type": "service_account" })),
        }
    }

    fn loaded_form(backend: &FakeBackend) -> SettingsForm {
        let mut form = SettingsForm::default();
        form.loaded(block_on(backend.get_settings()));
        form
    }

    #[test]
    fn test_form_starts_loading() {
        let form = SettingsForm::default();
        assert!(form.loading);
        assert_eq!(form.error, None);
        assert_eq!(form.success, None);
    }

    #[test]
    fn test_load_reads_once_and_reflects_record() {
        let backend = FakeBackend {
            settings: stored_record(),
            ..FakeBackend::default()
        };

        let form = loaded_form(&backend);

        assert_eq!(backend.calls(), vec![Call::GetSettings]);
        assert!(!form.loading);
        assert_eq!(form.record, stored_record());
        assert_eq!(form.value(CredentialField::DextApiKey), "dext-123");
        assert_eq!(form.value(CredentialField::XeroClientId), "client-id");
        assert_eq!(form.value(CredentialField::XeroClientSecret), "");
        assert_eq!(form.value(CredentialField::OpenaiApiKey), "sk-test");
        assert_eq!(
            form.value(CredentialField::VisionCredentials),
            "{\n  \"type\": \"service_account\"\n}"
        );
    }

    #[test]
    fn test_load_failure_keeps_empty_record() {
        let backend = FakeBackend {
            settings: stored_record(),
            fail_settings_read: Some(500),
            ..FakeBackend::default()
        };

        let form = loaded_form(&backend);

        assert!(!form.loading);
        assert_eq!(form.error, Some(LOAD_FAILED));
        assert_eq!(form.record, Credentials::default());
    }

    #[test]
    fn test_edit_touches_only_one_field() {
        let mut form = SettingsForm {
            record: stored_record(),
            ..SettingsForm::default()
        };

        form.edit(CredentialField::XeroClientSecret, "new-secret".to_string());

        let expected = Credentials {
            xero_client_secret: Some("new-secret".to_string()),
            ..stored_record()
        };
        assert_eq!(form.record, expected);
    }

    #[test]
    fn test_vision_edit_keeps_text_as_typed() {
        let mut form = SettingsForm::default();
        form.edit(CredentialField::VisionCredentials, "{\"type\":".to_string());
        assert_eq!(form.value(CredentialField::VisionCredentials), "{\"type\":");
    }

    #[test]
    fn test_submit_sends_full_record() {
        let backend = FakeBackend {
            settings: stored_record(),
            ..FakeBackend::default()
        };
        let mut form = loaded_form(&backend);
        form.edit(CredentialField::OpenaiApiKey, "sk-new".to_string());

        let record = form.begin_submit();
        assert!(form.saving);
        form.finish_submit(block_on(backend.update_settings(&record)));

        let expected = Credentials {
            openai_api_key: Some("sk-new".to_string()),
            ..stored_record()
        };
        assert_eq!(
            backend.calls(),
            vec![Call::GetSettings, Call::UpdateSettings(expected)]
        );
        assert!(!form.saving);
        assert_eq!(form.success, Some(SAVED));
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_failed_submit_keeps_entered_values() {
        let backend = FakeBackend {
            fail_settings_write: Some(400),
            ..FakeBackend::default()
        };
        let mut form = loaded_form(&backend);
        form.edit(CredentialField::DextApiKey, "typed-key".to_string());
        let entered = form.record.clone();

        let record = form.begin_submit();
        form.finish_submit(block_on(backend.update_settings(&record)));

        assert_eq!(form.success, None);
        assert_eq!(form.error, Some(SAVE_FAILED));
        assert_eq!(form.record, entered);
    }

    #[test]
    fn test_disposed_form_submits_nothing() {
        let runtime = create_runtime();
        let form = create_rw_signal(SettingsForm {
            record: stored_record(),
            ..SettingsForm::default()
        });

        assert_eq!(take_submission(form), Some(stored_record()));
        assert!(form.with_untracked(|f| f.saving));

        form.dispose();
        assert_eq!(take_submission(form), None);

        runtime.dispose();
    }

    #[test]
    fn test_new_submit_clears_previous_feedback() {
        let mut form = SettingsForm::default();
        form.finish_submit(Err(ApiError::Status { status: 500 }));
        assert_eq!(form.error, Some(SAVE_FAILED));

        form.begin_submit();
        assert_eq!(form.error, None);
        assert_eq!(form.success, None);
    }

    #[test]
    fn test_authorization_url() {
        let backend = FakeBackend {
            auth_url: "https://login.xero.com/identity/connect/authorize?client_id=x".to_string(),
            ..FakeBackend::default()
        };

        let url = block_on(authorization_url(&backend));
        assert_eq!(
            url,
            Ok("https://login.xero.com/identity/connect/authorize?client_id=x".to_string())
        );
        assert_eq!(backend.count(&Call::XeroAuthUrl), 1);
    }

    #[test]
    fn test_authorization_url_failure() {
        let backend = FakeBackend {
            fail_auth_url: Some(400),
            ..FakeBackend::default()
        };
        assert_eq!(block_on(authorization_url(&backend)), Err(AUTH_URL_FAILED));
    }

    #[test]
    fn test_refresh_feedback() {
        let backend = FakeBackend {
            fail_refresh: Some(400),
            ..FakeBackend::default()
        };
        let mut form = SettingsForm::default();

        form.finish_refresh(block_on(backend.refresh_xero_token()));
        assert_eq!(form.error, Some(REFRESH_FAILED));

        form.clear_feedback();
        form.finish_refresh(Ok(()));
        assert_eq!(form.error, None);
        assert_eq!(form.success, Some(REFRESHED));
    }
}
