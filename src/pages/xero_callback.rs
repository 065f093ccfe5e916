//! Xero Callback Page
//!
//! Return leg of the Xero OAuth flow. The authorization code from the query
//! string is handed to the backend once; it is single-use, so a failed
//! exchange needs a fresh redirect from Xero.

use leptos::logging::{error, warn};
use leptos::*;
use leptos_router::*;

use crate::api::{Backend, HttpBackend};
use crate::components::{Alert, AlertVariant, Loading};

pub const NO_CODE: &str = "No authorization code received";
pub const EXCHANGE_FAILED: &str = "Failed to complete Xero authentication";
pub const SETTINGS_PATH: &str = "/settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackState {
    AwaitingCode,
    Exchanging,
    Failed(&'static str),
}

#[derive(Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Exchange accepted; continue to this route
    Redirect(&'static str),
    Failed(&'static str),
}

/// Exchange `code` for tokens. A missing or empty code never reaches the
/// backend.
pub async fn complete_authorization<B: Backend + ?Sized>(
    backend: &B,
    code: Option<String>,
) -> CallbackOutcome {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        warn!("Xero callback reached without an authorization code");
        return CallbackOutcome::Failed(NO_CODE);
    };

    match backend.exchange_xero_code(&code).await {
        Ok(()) => CallbackOutcome::Redirect(SETTINGS_PATH),
        Err(e) => {
            error!("Xero callback error: {}", e);
            CallbackOutcome::Failed(EXCHANGE_FAILED)
        }
    }
}

/// Xero callback page component
#[component]
pub fn XeroCallback() -> impl IntoView {
    let backend = store_value(HttpBackend::from_env());
    let query = use_query_map();
    let navigate = use_navigate();
    let state = create_rw_signal(CallbackState::AwaitingCode);

    // Single shot: the code is read once, untracked
    create_effect(move |_| {
        let code = query.with_untracked(|q| q.get("code").cloned());
        if code.as_deref().is_some_and(|c| !c.is_empty()) {
            state.set(CallbackState::Exchanging);
        }

        let backend = backend.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            match complete_authorization(&backend, code).await {
                CallbackOutcome::Redirect(path) => navigate(path, Default::default()),
                CallbackOutcome::Failed(message) => state.set(CallbackState::Failed(message)),
            }
        });
    });

    move || match state.get() {
        CallbackState::Failed(message) => view! {
            <div class="max-w-xl mx-auto p-6 space-y-4">
                <Alert message=Signal::derive(move || Some(message)) variant=AlertVariant::Error />
                <A
                    href=SETTINGS_PATH
                    class="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md font-medium transition-colors"
                >
                    "Back to settings"
                </A>
            </div>
        }
        .into_view(),
        CallbackState::AwaitingCode | CallbackState::Exchanging => view! {
            <Loading message="Completing Xero authentication..." />
        }
        .into_view(),
    }
}
