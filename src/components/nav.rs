//! Navigation Component
//!
//! Top bar linking the processing dashboard and the credentials page.

use leptos::*;
use leptos_router::*;

/// Dext to Xero brand plus the two route links
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-blue-700 shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🧾"</span>
                        <span class="text-xl font-semibold text-white">"Dext to Xero"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Dashboard" />
                        <NavLink href="/settings" label="Settings" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-md text-blue-100 hover:text-white hover:bg-blue-600 transition-colors"
            active_class="bg-blue-800 text-white"
        >
            {label}
        </A>
    }
}
