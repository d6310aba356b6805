//! Loading Component
//!
//! Spinners and the analysis overlay.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Dark overlay with a spinner, shown over the webcam while analyzing
#[component]
pub fn AnalysisOverlay(
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            if visible.get() {
                view! {
                    <div class="absolute inset-0 flex items-center justify-center bg-black/60 rounded-2xl">
                        <div class="loading-spinner w-12 h-12" />
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
