//! Emoji Grid Component
//!
//! Manual mood selection from the emotion catalog.

use leptos::*;

use mindspace::Mood;

use crate::state::session::use_session;

/// Grid of catalog moods; clicking one records a manual observation
#[component]
pub fn EmojiGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 sm:grid-cols-6 gap-4">
            {Mood::ALL.into_iter().map(|mood| view! {
                <MoodButton mood=mood />
            }).collect_view()}
        </div>
    }
}

#[component]
fn MoodButton(mood: Mood) -> impl IntoView {
    let state = use_session();

    let state_for_active = state.clone();
    let is_active = create_memo(move |_| state_for_active.selected() == Some(mood));

    let on_click = move |_| state.select_mood(mood);

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "flex flex-col items-center gap-2 p-3 rounded-lg transition-transform";
                if is_active.get() {
                    format!("{} bg-pink-300 text-white shadow-lg scale-105", base)
                } else {
                    format!("{} bg-slate-100 text-gray-500 hover:scale-105", base)
                }
            }
            aria-pressed=move || is_active.get().to_string()
            title=mood.label()
        >
            <div class="text-3xl">{mood.emoji()}</div>
            <div class="text-xs">{mood.label()}</div>
        </button>
    }
}
