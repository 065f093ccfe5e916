//! Inline Alert Component
//!
//! Static success / error banners shown inside a page.

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            AlertVariant::Success => ("✓", "bg-green-50 border-green-400 text-green-700"),
            AlertVariant::Error => ("✕", "bg-red-50 border-red-400 text-red-700"),
        }
    }
}

/// Inline banner; renders nothing when `message` is `None`
#[component]
pub fn Alert(
    #[prop(into)]
    message: Signal<Option<&'static str>>,
    variant: AlertVariant,
) -> impl IntoView {
    let (icon, tone) = variant.classes();

    move || {
        message.get().map(|msg| view! {
            <div
                role="alert"
                class=format!("flex items-center space-x-3 border-l-4 px-4 py-3 rounded mb-4 {}", tone)
            >
                <span class="text-lg">{icon}</span>
                <span class="text-sm font-medium">{msg}</span>
            </div>
        })
    }
}
