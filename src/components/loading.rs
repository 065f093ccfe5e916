//! Loading Component

use leptos::*;

/// Centered spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[400px]">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600" />
            {message.map(|msg| view! {
                <p class="mt-4 text-lg text-gray-700">{msg}</p>
            })}
        </div>
    }
}
