//! Tracker Session State
//!
//! Reactive wrapper around the core [`TrackerSession`]. Every mutation goes
//! through the single `tracker.update` path, so a resolving analysis and a
//! manual emoji selection can never interleave their read-modify-write.

use chrono::{Datelike, Weekday};
use leptos::*;

use mindspace::{
    AnalysisTicket, CapturedFrame, Mood, MoodEntry, ThreadRngSource, TrackerConfig, TrackerSession,
};

/// Session state provided to the mood tracker component tree
#[derive(Clone)]
pub struct SessionState {
    /// The core tracker session; single source of truth for the view
    pub tracker: RwSignal<TrackerSession>,
    /// Tracker tunables (analysis delay, capture frame size)
    pub config: TrackerConfig,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
}

/// Current local weekday label
pub fn today() -> Weekday {
    chrono::Local::now().weekday()
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let mut rng = ThreadRngSource::new();
    let state = SessionState {
        tracker: create_rw_signal(TrackerSession::new(&mut rng)),
        config: TrackerConfig::default(),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    /// Whether an analysis is outstanding
    pub fn analyzing(&self) -> bool {
        self.tracker.with(|s| s.analyzing())
    }

    /// Whether the results panel should be open
    pub fn results_shown(&self) -> bool {
        self.tracker.with(|s| s.results_shown())
    }

    /// Currently selected mood, if any
    pub fn selected(&self) -> Option<Mood> {
        self.tracker.with(|s| s.selected())
    }

    /// Latest entry of the history, used for the chart headline values
    pub fn latest_entry(&self) -> Option<MoodEntry> {
        self.tracker.with(|s| s.history().latest().cloned())
    }

    /// Snapshot of the history entries, oldest first
    pub fn history_entries(&self) -> Vec<MoodEntry> {
        self.tracker.with(|s| s.history().entries().to_vec())
    }

    /// Snapshot of the captured frames, newest first
    pub fn captures(&self) -> Vec<CapturedFrame> {
        self.tracker.with(|s| s.captures().to_vec())
    }

    /// Start a capture; `None` when an analysis is already in flight
    ///
    /// The capture control is disabled while analyzing, so this races only
    /// against double-clicks the browser lets through.
    pub fn begin_capture(&self, frame: CapturedFrame) -> Option<AnalysisTicket> {
        let mut ticket = None;
        self.tracker.update(|s| {
            ticket = s.begin_capture(frame).ok();
        });
        ticket
    }

    /// Apply a finished analysis; stale tickets are dropped by the core
    ///
    /// Uses `try_update` so a completion that lands after the view tree was
    /// torn down is a no-op instead of a panic.
    pub fn complete_capture(&self, ticket: AnalysisTicket, mood: Mood) {
        let _ = self
            .tracker
            .try_update(|s| s.complete_capture(ticket, mood, today()));
    }

    /// Record a manual mood selection
    pub fn select_mood(&self, mood: Mood) {
        self.tracker.update(|s| s.select_mood(mood, today()));
    }

    /// Discard captures and regenerate the week
    pub fn reset(&self) {
        let mut rng = ThreadRngSource::new();
        self.tracker.update(|s| s.reset(&mut rng));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            let _ = success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            let _ = error_signal.try_set(None);
        })
        .forget();
    }
}

/// Convenience accessor for components below the provider
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}
