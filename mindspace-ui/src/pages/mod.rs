//! Pages
//!
//! Top-level page components for each route.

pub mod add_product;
pub mod dashboard;
pub mod home;
pub mod mood_tracker;

pub use add_product::AddProduct;
pub use dashboard::Dashboard;
pub use home::Home;
pub use mood_tracker::MoodTracker;
