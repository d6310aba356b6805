//! Mood Tracker Page
//!
//! Webcam capture, simulated mood analysis, manual mood selection, and the
//! rolling weekly charts. The analysis is a fixed-delay timer that draws a
//! random catalog entry; the captured frame is display-only.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use mindspace::{CapturedFrame, Mood, ThreadRngSource};

use crate::components::{CaptureGallery, EmojiGrid, MoodChart, MoodSeries, WebcamCapture};
use crate::state::session::use_session;

/// Mood tracker page component
#[component]
pub fn MoodTracker() -> impl IntoView {
    let state = use_session();

    // Webcam shutter: store the frame, wait out the "analysis", apply the
    // detected mood. The ticket keeps a late completion from touching a
    // session that was reset in the meantime.
    let state_for_capture = state.clone();
    let on_capture = Callback::new(move |frame: CapturedFrame| {
        let state = state_for_capture.clone();
        let Some(ticket) = state.begin_capture(frame) else {
            // Shutter is disabled while analyzing; a race here is a no-op
            return;
        };

        let delay = state.config.analysis_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let detected = Mood::sample(&mut ThreadRngSource::new());
            state.complete_capture(ticket, detected);
        });
    });

    let state_for_reset = state.clone();
    let on_reset = move |_| {
        state_for_reset.reset();
        state_for_reset.show_success("Mood history reset");
    };

    let state_for_analyzing = state.clone();
    let analyzing = Signal::derive(move || state_for_analyzing.analyzing());

    let state_for_results = state.clone();
    let results_shown = move || state_for_results.results_shown();

    let (capture_width, capture_height) = (state.config.capture_width, state.config.capture_height);

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Mood Tracker"</h1>
                    <p class="text-gray-500 mt-1">"Capture a moment and see your week"</p>
                </div>

                <button
                    on:click=on_reset
                    class="px-4 py-2 rounded-full bg-white shadow text-gray-700
                           hover:bg-purple-50 transition-colors flex items-center gap-2"
                >
                    <span>"↺"</span>
                    "Reset"
                </button>
            </div>

            <div class="flex flex-col lg:flex-row gap-6">
                // Left column: camera, emoji picker, gallery
                <div class="flex-1 flex flex-col gap-6">
                    <section class="bg-white rounded-2xl shadow-md p-6">
                        <h2 class="text-lg font-semibold mb-4 flex items-center gap-2">
                            <span>"📷"</span>
                            "Camera Mood Tracker"
                        </h2>
                        <WebcamCapture
                            on_capture=on_capture
                            analyzing=analyzing
                            width=capture_width
                            height=capture_height
                        />
                    </section>

                    {
                        let results = results_shown.clone();
                        move || {
                            if results() {
                                view! {
                                    <section class="bg-white rounded-2xl shadow-md p-6">
                                        <h2 class="text-lg font-semibold mb-4 flex items-center gap-2">
                                            <span>"🙂"</span>
                                            "Your Mood"
                                        </h2>
                                        <EmojiGrid />
                                    </section>

                                    <CaptureGallery />
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }
                    }
                </div>

                // Right column: charts, visible once results exist
                {move || {
                    if results_shown() {
                        view! {
                            <div class="flex-1 flex flex-col gap-6">
                                <MoodChart series=MoodSeries::Anxiety />
                                <MoodChart series=MoodSeries::Depression />
                                <MoodChart series=MoodSeries::MoodScore />
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="flex-1 flex items-center justify-center text-gray-400">
                                "Capture your mood to see this week's trends"
                            </div>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}
