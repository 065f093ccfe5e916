//! Stat Card Component
//!
//! A single headline number on the dashboard.

use leptos::*;

/// Labelled value card
#[component]
pub fn StatCard(
    /// Caption above the value
    label: &'static str,
    /// Emoji shown beside the value
    icon: &'static str,
    /// Pre-formatted value
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg p-5">
            <div class="flex items-center">
                <span class="text-2xl text-gray-400">{icon}</span>
                <dl class="ml-5 flex-1 min-w-0">
                    <dt class="text-sm font-medium text-gray-500 truncate">{label}</dt>
                    <dd class="text-lg font-semibold text-gray-900">{move || value.get()}</dd>
                </dl>
            </div>
        </div>
    }
}
