//! Capture Gallery Component
//!
//! Shows the frames captured this session, newest first.

use leptos::*;

use crate::state::session::use_session;

/// Gallery of captured frames
#[component]
pub fn CaptureGallery() -> impl IntoView {
    let state = use_session();

    view! {
        <section class="bg-white rounded-2xl shadow-md p-6">
            <h2 class="text-lg font-semibold mb-4 flex items-center gap-2">
                <span>"🖼️"</span>
                "Captured Moments"
            </h2>

            <div class="flex flex-wrap gap-4 justify-center">
                {move || {
                    let captures = state.captures();
                    if captures.is_empty() {
                        view! {
                            <div class="text-center py-4 text-gray-400">
                                "No images captured yet."
                            </div>
                        }.into_view()
                    } else {
                        captures.into_iter().enumerate().map(|(index, frame)| view! {
                            <div class="w-24 h-24 rounded-lg overflow-hidden shadow-md border-2 border-slate-100">
                                <img
                                    src=frame.data_url
                                    alt=format!("Captured emotion {}", index + 1)
                                    class="w-full h-full object-cover"
                                />
                            </div>
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
