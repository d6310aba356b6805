//! UI Components
//!
//! Reusable Leptos components for the wellness suite.

pub mod capture_gallery;
pub mod emoji_grid;
pub mod loading;
pub mod mood_chart;
pub mod nav;
pub mod progress_chart;
pub mod toast;
pub mod webcam;

pub use capture_gallery::CaptureGallery;
pub use emoji_grid::EmojiGrid;
pub use loading::{AnalysisOverlay, Loading};
pub use mood_chart::{MoodChart, MoodSeries};
pub use nav::Nav;
pub use progress_chart::{ProgressChart, ProgressPoint};
pub use toast::Toast;
pub use webcam::WebcamCapture;
