//! Dashboard Page
//!
//! Wellness dashboard with a section sidebar. The last-active section is
//! persisted under a single localStorage key; everything else is mock data
//! rendered in place.

use leptos::*;

use crate::components::{ProgressChart, ProgressPoint};
use crate::state::storage::{load_active_section, store_active_section};

/// Dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Sessions,
    Progress,
    Reports,
    FitMe,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Profile,
        Section::Sessions,
        Section::Progress,
        Section::Reports,
        Section::FitMe,
    ];

    /// Stable id used for persistence
    pub fn id(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Sessions => "sessions",
            Section::Progress => "progress",
            Section::Reports => "reports",
            Section::FitMe => "fitme",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "My Profile",
            Section::Sessions => "Therapy Sessions",
            Section::Progress => "Wellness Progress",
            Section::Reports => "Reports",
            Section::FitMe => "FitMe",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Profile => "👤",
            Section::Sessions => "📅",
            Section::Progress => "📈",
            Section::Reports => "📄",
            Section::FitMe => "🏋️",
        }
    }

    /// Parse a stored id; unknown or absent values fall back to the default
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

// --- Mock data -------------------------------------------------------------

struct UserData {
    name: &'static str,
    age: u32,
    email: &'static str,
    mental_state: &'static str,
}

const USER: UserData = UserData {
    name: "John Doe",
    age: 32,
    email: "john@example.com",
    mental_state: "Stable",
};

const HEALTH_METRICS: [(&str, &str, &str); 4] = [
    ("❤️", "Blood Pressure", "120/80 mmHg"),
    ("💉", "Sugar Level", "95 mg/dL"),
    ("⚖️", "Weight", "75 kg"),
    ("📏", "Height", "175 cm"),
];

const PROGRESS_DATA: [ProgressPoint; 6] = [
    ProgressPoint { month: "Jan", progress: 15.0 },
    ProgressPoint { month: "Feb", progress: 20.0 },
    ProgressPoint { month: "Mar", progress: 30.0 },
    ProgressPoint { month: "Apr", progress: 25.0 },
    ProgressPoint { month: "May", progress: 40.0 },
    ProgressPoint { month: "Jun", progress: 35.0 },
];

const THERAPY_SESSIONS: [(&str, &str, &str, &str); 5] = [
    ("2023-10-01", "10:00 AM", "Dr. Smith", "Discussed stress management techniques."),
    ("2023-09-15", "02:30 PM", "Dr. Jones", "Explored childhood memories and their impact."),
    ("2023-09-01", "09:00 AM", "Dr. Smith", "Reviewed progress and set new goals."),
    ("2023-08-15", "11:00 AM", "Dr. Lee", "Focused on mindfulness and meditation practices."),
    ("2023-08-01", "01:00 PM", "Dr. Smith", "Initial consultation and mental health assessment."),
];

struct Exercise {
    title: &'static str,
    description: &'static str,
}

const PHYSICAL_EXERCISES: [Exercise; 4] = [
    Exercise {
        title: "Morning Stretch Routine",
        description: "5-10 mins of full-body stretching improves blood flow, reduces stiffness, and boosts energy.",
    },
    Exercise {
        title: "Brisk Walking",
        description: "A 20-30 min walk outdoors helps improve cardiovascular health and reduces anxiety.",
    },
    Exercise {
        title: "Yoga (Sun Salutation)",
        description: "Combines stretching, controlled breathing, and mindfulness for both body and mind.",
    },
    Exercise {
        title: "Strength Training (Bodyweight)",
        description: "Simple push-ups, squats, and planks help build strength and release endorphins.",
    },
];

const MENTAL_EXERCISES: [Exercise; 4] = [
    Exercise {
        title: "Deep Breathing (Box Breathing)",
        description: "Inhale 4 sec, hold 4 sec, exhale 4 sec, hold 4 sec. Reduces stress instantly.",
    },
    Exercise {
        title: "Mindful Journaling",
        description: "Spend 10 mins writing down thoughts and feelings. Improves clarity and reduces overthinking.",
    },
    Exercise {
        title: "Guided Meditation",
        description: "Short 10-15 min meditation sessions enhance focus and calm the nervous system.",
    },
    Exercise {
        title: "Gratitude Practice",
        description: "Write down 3 things you're grateful for daily. Helps shift focus from stress to positivity.",
    },
];

// --- Components ------------------------------------------------------------

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    // Read the persisted section once at startup; default to Profile
    let initial = load_active_section()
        .and_then(|id| Section::from_id(&id))
        .unwrap_or(Section::Profile);
    let (active, set_active) = create_signal(initial);

    let select_section = move |section: Section| {
        set_active.set(section);
        store_active_section(section.id());
    };

    view! {
        <div class="flex gap-6">
            // Section sidebar
            <aside class="w-56 shrink-0 bg-white rounded-xl shadow p-3 space-y-1 self-start">
                <div class="px-3 py-2 font-bold text-lg text-gray-800">"My Wellness"</div>
                {Section::ALL.into_iter().map(|section| {
                    view! {
                        <button
                            on:click=move |_| select_section(section)
                            class=move || {
                                let base = "w-full flex items-center gap-3 px-3 py-2 rounded-xl text-left transition-colors";
                                if active.get() == section {
                                    format!("{} bg-purple-200 text-purple-800", base)
                                } else {
                                    format!("{} text-gray-600 hover:bg-purple-50", base)
                                }
                            }
                            aria-pressed=move || (active.get() == section).to_string()
                        >
                            <span>{section.icon()}</span>
                            <span>{section.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </aside>

            // Section content
            <div class="flex-1">
                <header class="pb-6">
                    <h1 class="text-3xl font-extrabold text-gray-900">"Dashboard"</h1>
                </header>

                {move || match active.get() {
                    Section::Profile => view! { <ProfileSection /> }.into_view(),
                    Section::Sessions => view! { <SessionsSection /> }.into_view(),
                    Section::Progress => view! { <ProgressSection /> }.into_view(),
                    Section::Reports => view! { <ReportsSection /> }.into_view(),
                    Section::FitMe => view! { <FitMeSection /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Profile overview: welcome card, health metrics, monthly progress
#[component]
fn ProfileSection() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
            // Welcome card
            <section class="md:col-span-2 lg:col-span-3 bg-white rounded-xl shadow p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold text-gray-800">
                            {format!("Welcome, {}!", USER.name)}
                        </h2>
                        <p class="text-sm text-gray-500 mt-1">"Your personal wellness overview"</p>
                    </div>
                    <div class="h-20 w-20 rounded-full bg-purple-100 flex items-center justify-center text-3xl shadow-md">
                        {USER.name.chars().next().unwrap_or('?')}
                    </div>
                </div>
                <div class="mt-4 text-gray-700 space-y-2">
                    <div>
                        <span class="font-semibold text-gray-600">"Age: "</span>
                        {USER.age}
                    </div>
                    <div>
                        <span class="font-semibold text-gray-600">"Email: "</span>
                        {USER.email}
                    </div>
                    <div>
                        <span class="font-semibold text-gray-600">"Current Mental State: "</span>
                        <span class="text-green-600 font-bold">{USER.mental_state}</span>
                    </div>
                </div>
            </section>

            // Health metrics card
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-bold text-gray-800 mb-4">"Health Metrics"</h2>
                <div class="space-y-4 text-gray-700">
                    {HEALTH_METRICS.into_iter().map(|(icon, label, value)| view! {
                        <div class="flex items-center space-x-3">
                            <span>{icon}</span>
                            <span class="font-semibold">{label}":"</span>
                            <span>{value}</span>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            // Monthly progress chart card
            <section class="md:col-span-2 bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-bold text-gray-800 mb-4">"Monthly Progress"</h2>
                <ProgressChart points=PROGRESS_DATA.to_vec() />
            </section>
        </div>
    }
}

/// Therapy session history table
#[component]
fn SessionsSection() -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-lg font-bold text-gray-800">"Therapy Session History"</h2>
            <p class="text-sm text-gray-500 mb-4">
                "A record of your past and upcoming therapy sessions."
            </p>

            <div class="w-full overflow-auto">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="border-b text-left text-gray-500">
                            <th class="h-12 px-4 font-medium">"Date"</th>
                            <th class="h-12 px-4 font-medium">"Time"</th>
                            <th class="h-12 px-4 font-medium">"Therapist"</th>
                            <th class="h-12 px-4 font-medium">"Notes"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {THERAPY_SESSIONS.into_iter().map(|(date, time, therapist, notes)| view! {
                            <tr class="border-b last:border-0 hover:bg-purple-50/50 transition-colors">
                                <td class="p-4">{date}</td>
                                <td class="p-4">{time}</td>
                                <td class="p-4">{therapist}</td>
                                <td class="p-4">{notes}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// Wellness progress chart, full width
#[component]
fn ProgressSection() -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-lg font-bold text-gray-800">"Your Wellness Progress"</h2>
            <p class="text-sm text-gray-500 mb-4">
                "This chart reflects your progress based on your completed exercises and feedback."
            </p>
            <ProgressChart points=PROGRESS_DATA.to_vec() height=300 />
        </section>
    }
}

/// Reports placeholder
#[component]
fn ReportsSection() -> impl IntoView {
    view! {
        <p class="text-center text-lg text-gray-500 mt-8">
            "📄 All your reports will be available here."
        </p>
    }
}

/// FitMe: physical/mental exercise suggestions
#[component]
fn FitMeSection() -> impl IntoView {
    let (physical, set_physical) = create_signal(true);

    view! {
        <div class="flex flex-col items-center space-y-8">
            // Physical / Mental toggle
            <div class="bg-white rounded-full p-1 shadow flex">
                <ToggleButton
                    label="💪 Physical Health"
                    active=Signal::derive(move || physical.get())
                    on_click=move |_| set_physical.set(true)
                />
                <ToggleButton
                    label="🧠 Mental Health"
                    active=Signal::derive(move || !physical.get())
                    on_click=move |_| set_physical.set(false)
                />
            </div>

            // Exercise cards
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 w-full">
                {move || {
                    let exercises: &[Exercise] = if physical.get() {
                        &PHYSICAL_EXERCISES
                    } else {
                        &MENTAL_EXERCISES
                    };
                    exercises.iter().map(|ex| view! {
                        <div class="bg-white rounded-2xl shadow-lg p-6 flex flex-col justify-between
                                    transition-transform hover:scale-105">
                            <div>
                                <h3 class="text-xl font-bold text-gray-800">{ex.title}</h3>
                                <p class="text-sm text-gray-500 mt-2">{ex.description}</p>
                            </div>
                            <button class="mt-4 self-start px-4 py-2 rounded-lg border border-purple-400
                                           text-purple-600 hover:bg-purple-500 hover:text-white transition-colors">
                                "Learn More"
                            </button>
                        </div>
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ToggleButton(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "rounded-full px-6 py-2 transition-colors duration-200";
                if active.get() {
                    format!("{} bg-purple-500 text-white shadow-md", base)
                } else {
                    format!("{} text-gray-600 hover:bg-gray-100", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_unknown_section_id_is_none() {
        assert_eq!(Section::from_id("settings"), None);
        assert_eq!(Section::from_id(""), None);
    }
}
