//! Webcam Capture Component
//!
//! Wraps the camera capture source: opens a getUserMedia stream into a
//! `<video>` element and snapshots the current frame to a JPEG data URL on
//! demand. The frame is display-only; the simulated analysis never looks
//! at it.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use mindspace::CapturedFrame;

use crate::components::loading::AnalysisOverlay;

/// Webcam panel with a shutter button
///
/// The shutter is disabled (and the overlay shown) while `analyzing` is
/// true, which is what keeps at most one analysis in flight.
#[component]
pub fn WebcamCapture(
    /// Invoked with the captured frame when the shutter is pressed
    on_capture: Callback<CapturedFrame>,
    /// Whether an analysis is outstanding
    #[prop(into)]
    analyzing: Signal<bool>,
    /// Snapshot width in pixels
    width: u32,
    /// Snapshot height in pixels
    height: u32,
) -> impl IntoView {
    let video_ref = create_node_ref::<html::Video>();
    let stream: StoredValue<Option<MediaStream>> = store_value(None);

    // Attach the camera stream once the <video> is mounted
    create_effect(move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        spawn_local(async move {
            match open_stream().await {
                Ok(media) => {
                    video.set_src_object(Some(&media));
                    stream.set_value(Some(media));
                    let _ = video.play();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Camera unavailable: {:?}", err).into(),
                    );
                }
            }
        });
    });

    // Release the camera when the view goes away
    on_cleanup(move || {
        if let Some(media) = stream.get_value() {
            for track in media.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    });

    let capture = move |_| {
        if analyzing.get() {
            return;
        }
        let Some(video) = video_ref.get() else {
            return;
        };
        match snapshot(&video, width, height) {
            Ok(frame) => on_capture.call(frame),
            Err(err) => {
                web_sys::console::error_1(&format!("Capture failed: {:?}", err).into());
            }
        }
    };

    view! {
        <div class="relative flex flex-col items-center justify-center rounded-2xl overflow-hidden w-full h-[320px] mx-auto shadow-md bg-gray-900">
            <video
                node_ref=video_ref
                autoplay=true
                muted=true
                playsinline=true
                class="w-full h-full object-cover"
            />

            <AnalysisOverlay visible=analyzing />

            <button
                on:click=capture
                disabled=move || analyzing.get()
                class="absolute bottom-4 z-10 w-16 h-16 rounded-full border-4 border-white
                       bg-white/30 hover:bg-white/50 disabled:opacity-50 disabled:cursor-not-allowed
                       flex items-center justify-center transition-colors"
                aria-label="Capture Mood"
            >
                <span class="text-white text-3xl">"●"</span>
            </button>
        </div>
    }
}

/// Open the user-facing camera
async fn open_stream() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    JsFuture::from(promise)
        .await?
        .dyn_into::<MediaStream>()
        .map_err(JsValue::from)
}

/// Draw the current video frame to an offscreen canvas and encode it
fn snapshot(video: &HtmlVideoElement, width: u32, height: u32) -> Result<CapturedFrame, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)?;

    let data_url = canvas.to_data_url_with_type("image/jpeg")?;
    Ok(CapturedFrame::new(data_url))
}
