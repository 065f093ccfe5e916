//! App Root Component
//!
//! Navigation chrome, route table and the backend status footer.

use leptos::logging::warn;
use leptos::*;
use leptos_router::*;

use crate::api::{Backend, HttpBackend};
use crate::components::Nav;
use crate::pages::{Dashboard, Settings, XeroCallback};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/settings" view=Settings />
                        <Route path="/xero/callback" view=XeroCallback />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Reachability of the backend API
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online { version: Option<String> },
    Unreachable,
}

impl BackendStatus {
    pub fn label(&self) -> String {
        match self {
            BackendStatus::Checking => "Checking backend...".to_string(),
            BackendStatus::Online { version: Some(v) } => format!("Backend online (v{})", v),
            BackendStatus::Online { version: None } => "Backend online".to_string(),
            BackendStatus::Unreachable => "Backend unreachable".to_string(),
        }
    }
}

/// Probe `/health` once
pub async fn probe_backend<B: Backend + ?Sized>(backend: &B) -> BackendStatus {
    match backend.health().await {
        Ok(health) => BackendStatus::Online {
            version: health.version,
        },
        Err(e) => {
            warn!("Backend health check failed: {}", e);
            BackendStatus::Unreachable
        }
    }
}

/// Footer showing whether the backend answered its health check
#[component]
fn Footer() -> impl IntoView {
    let status = create_rw_signal(BackendStatus::Checking);

    create_effect(move |_| {
        spawn_local(async move {
            let probed = probe_backend(&HttpBackend::from_env()).await;
            status.set(probed);
        });
    });

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                {move || {
                    let current = status.get();
                    let dot = match current {
                        BackendStatus::Checking => "bg-gray-400",
                        BackendStatus::Online { .. } => "bg-green-500",
                        BackendStatus::Unreachable => "bg-red-500",
                    };
                    view! {
                        <span class="flex items-center space-x-2 text-gray-600">
                            <span class=format!("w-2 h-2 rounded-full {}", dot) />
                            <span>{current.label()}</span>
                        </span>
                    }
                }}
                <span class="text-gray-400">{crate::config::api_base()}</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeBackend};
    use futures::executor::block_on;

    #[test]
    fn test_probe_reports_version() {
        let backend = FakeBackend::default();

        let status = block_on(probe_backend(&backend));

        assert_eq!(
            status,
            BackendStatus::Online {
                version: Some("1.0.0".to_string())
            }
        );
        assert_eq!(status.label(), "Backend online (v1.0.0)");
        assert_eq!(backend.calls(), vec![Call::Health]);
    }

    #[test]
    fn test_probe_failure_is_unreachable() {
        let backend = FakeBackend {
            fail_health: Some(503),
            ..FakeBackend::default()
        };

        assert_eq!(block_on(probe_backend(&backend)), BackendStatus::Unreachable);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BackendStatus::Checking.label(), "Checking backend...");
        assert_eq!(BackendStatus::Unreachable.label(), "Backend unreachable");
        assert_eq!(
            BackendStatus::Online { version: None }.label(),
            "Backend online"
        );
    }
}
