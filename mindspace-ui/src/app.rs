//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Loading, Nav, Toast};
use crate::pages::{AddProduct, Dashboard, Home, MoodTracker};
use crate::state::session::{provide_session_state, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide tracker session state to all components
    provide_session_state();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-gray-800 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/mood" view=MoodTracker />
                        <Route path="/products/new" view=AddProduct />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with analysis status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing analysis activity
#[component]
fn Footer() -> impl IntoView {
    let state = use_session();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    "MindSpace — your data never leaves this tab"
                </div>

                // Analysis indicator
                {move || {
                    if state.analyzing() {
                        view! {
                            <div class="flex items-center space-x-2 text-purple-500">
                                <Loading />
                                <span>"Analyzing mood..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <span class="text-gray-400">"Idle"</span>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🧭"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-purple-500 hover:bg-purple-600 text-white rounded-lg font-medium transition-colors"
            >
                "Back Home"
            </A>
        </div>
    }
}
