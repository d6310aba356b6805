//! State Management
//!
//! Session-scoped tracker state and localStorage helpers.

pub mod session;
pub mod storage;

pub use session::{provide_session_state, SessionState};
pub use storage::{load_active_section, store_active_section};
