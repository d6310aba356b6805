//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold text-gray-800">"MindSpace"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/dashboard" label="Dashboard" />
                        <NavLink href="/mood" label="Mood Tracker" />
                        <NavLink href="/products/new" label="Add Product" />
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
            class="px-4 py-2 rounded-lg text-gray-500 hover:text-gray-900 hover:bg-purple-50 transition-colors"
            active_class="bg-purple-100 text-purple-800"
        >
            {label}
        </A>
    }
}
