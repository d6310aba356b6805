//! Home Page
//!
//! Marketing landing page. Everything here is static copy; the only live
//! wiring is the hero CTA that routes into the mood tracker.

use leptos::*;
use leptos_router::use_navigate;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📈",
        title: "Daily Mood Tracking",
        text: "Capture your mood and understand patterns over time.",
    },
    Feature {
        icon: "📖",
        title: "Guided Practices",
        text: "Short practices to help you breathe, relax and refocus.",
    },
    Feature {
        icon: "👥",
        title: "Expert Support",
        text: "Access resources and community to support your journey.",
    },
];

const STEPS: [&str; 3] = [
    "Answer a short questionnaire so we understand your needs",
    "Get personalized suggestions & short guided sessions",
    "Track progress and adapt with data-driven insights",
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "MindSpace helped me be aware of my mood triggers — small practices made a big difference.",
        author: "Asha R.",
        role: "Designer",
    },
    Testimonial {
        quote: "The daily check-ins are gentle and effective. Highly recommended.",
        author: "Rahul M.",
        role: "Engineer",
    },
    Testimonial {
        quote: "Simple, practical, and real — the best stress helper I've tried.",
        author: "Neha P.",
        role: "Teacher",
    },
];

const MINDSPACE_BENEFITS: [&str; 4] = [
    "Affordable",
    "Flexible",
    "Daily small practices",
    "On-demand resources",
];

const TRADITIONAL_CONS: [&str; 3] = [
    "Expensive",
    "Weekly only",
    "Limited access between sessions",
];

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <Hero />
            <Features />
            <HowItWorks />
            <Testimonials />
            <Comparison />
            <CallToAction />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let navigate = use_navigate();
    let get_started = move |_| navigate("/mood", Default::default());

    view! {
        <section class="py-16 px-8 rounded-3xl bg-gradient-to-br from-purple-700 to-purple-500 text-white">
            <div class="grid md:grid-cols-2 gap-8 items-center">
                <div>
                    <h1 class="text-5xl md:text-6xl font-extrabold leading-tight">
                        "Start your "
                        <span class="text-purple-200">"journey"</span>
                        " to better mental wellbeing"
                    </h1>
                    <p class="mt-6 max-w-xl text-lg text-purple-100">
                        "MindSpace brings short guided practices, daily tracking and \
                         actionable insights together in one safe place — built to help \
                         you feel calmer, clearer and more consistent."
                    </p>
                    <div class="mt-8 flex gap-4">
                        <button
                            on:click=get_started
                            class="px-6 py-3 rounded-xl bg-white text-purple-700 font-semibold
                                   shadow-lg hover:bg-purple-50 transition-colors"
                        >
                            "Get Started"
                        </button>
                        <a
                            href="#features"
                            class="px-6 py-3 rounded-xl border-2 border-purple-300 text-white
                                   hover:bg-purple-600 transition-colors"
                        >
                            "Learn More"
                        </a>
                    </div>
                </div>

                // Quick snapshot card
                <div class="rounded-3xl p-6 shadow-xl bg-white/10 border border-purple-300">
                    <div class="font-semibold mb-4">"Quick Snapshot"</div>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="rounded-xl bg-white text-gray-800 p-4">
                            <div class="text-sm text-gray-500">"Daily Mood"</div>
                            <div class="text-xl font-bold">"Good"</div>
                        </div>
                        <div class="rounded-xl bg-white text-gray-800 p-4">
                            <div class="text-sm text-gray-500">"Streak"</div>
                            <div class="text-xl font-bold">"6 days"</div>
                        </div>
                    </div>
                    <div class="rounded-xl bg-white text-gray-800 p-4 mt-4">
                        <div class="text-sm text-gray-500">"Tip of the day"</div>
                        <div class="text-base">
                            "Take 3 mindful breaths before starting your day."
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-16">
            <div class="mb-8 text-center">
                <h2 class="text-3xl font-bold text-gray-900">
                    "Powerful tools, designed for habit"
                </h2>
                <p class="max-w-2xl mx-auto mt-2 text-gray-500">
                    "Small daily actions lead to big changes — we make them simple, \
                     measurable and kind."
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                {FEATURES.iter().map(|f| view! {
                    <div class="p-6 rounded-2xl bg-white border border-purple-200 shadow
                                hover:shadow-2xl transition-transform hover:-translate-y-2">
                        <div class="text-4xl mb-4">{f.icon}</div>
                        <h3 class="text-xl font-semibold mb-2 text-gray-800">{f.title}</h3>
                        <p class="text-gray-600">{f.text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="py-16 px-8 rounded-3xl bg-purple-50">
            <div class="mb-8 text-center">
                <h2 class="text-3xl font-bold text-gray-900">"How it works"</h2>
                <p class="max-w-2xl mx-auto mt-2 text-gray-600">
                    "Simple, guided, science-aligned steps to help you build better \
                     mental habits."
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                {STEPS.iter().enumerate().map(|(i, step)| view! {
                    <div class="p-6 rounded-xl bg-purple-100 border border-purple-200">
                        <div class="text-sm font-semibold mb-2 text-purple-600">
                            {format!("Step {}", i + 1)}
                        </div>
                        <div class="text-lg font-medium text-gray-800">{*step}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="mb-8 text-center">
                <h2 class="text-3xl font-bold text-gray-900">"Trusted by users"</h2>
                <p class="max-w-2xl mx-auto mt-2 text-gray-500">
                    "Real stories from people who used small daily practices to get \
                     big results."
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                {TESTIMONIALS.iter().map(|t| view! {
                    <div class="p-6 rounded-2xl bg-white border border-purple-200 shadow">
                        <div class="mb-4 text-purple-500">"★"</div>
                        <p class="italic mb-4 text-gray-700">{t.quote}</p>
                        <div class="font-semibold text-gray-800">{t.author}</div>
                        <div class="text-xs text-gray-400">{t.role}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Comparison() -> impl IntoView {
    view! {
        <section class="py-16 px-8 rounded-3xl bg-purple-50">
            <div class="mb-6 text-center">
                <h2 class="text-3xl font-bold text-gray-900">"MindSpace vs Traditional"</h2>
            </div>

            <div class="grid md:grid-cols-2 gap-6 items-start">
                <div class="p-6 rounded-xl bg-purple-100 border border-purple-200">
                    <h3 class="font-semibold mb-4 text-gray-800">"MindSpace"</h3>
                    <ul class="space-y-3">
                        {MINDSPACE_BENEFITS.iter().map(|benefit| view! {
                            <li class="flex gap-3 items-center text-gray-700">
                                <span class="text-purple-600">"✔"</span>
                                {*benefit}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="p-6 rounded-xl bg-white border border-purple-200">
                    <h3 class="font-semibold mb-4 text-gray-800">"Traditional"</h3>
                    <ul class="space-y-3">
                        {TRADITIONAL_CONS.iter().map(|con| view! {
                            <li class="flex gap-3 items-center text-gray-700">
                                <span class="text-red-500">"✘"</span>
                                {*con}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    let navigate = use_navigate();
    let start_trial = move |_| navigate("/mood", Default::default());

    view! {
        <section class="py-16">
            <div class="rounded-2xl p-10 text-center bg-purple-600">
                <h2 class="text-3xl md:text-4xl font-bold text-white">
                    "Ready to try MindSpace?"
                </h2>
                <p class="text-white/90 mt-4 max-w-2xl mx-auto">
                    "Start with a free 7-day trial and see how daily micro-practices \
                     can help your mood and focus."
                </p>
                <div class="mt-6 flex justify-center gap-4">
                    <button
                        on:click=start_trial
                        class="px-6 py-3 rounded-xl bg-white text-purple-700 font-semibold
                               shadow hover:bg-purple-50 transition-colors"
                    >
                        "Start Free Trial"
                    </button>
                    <a
                        href="mailto:hello@mindspace.example"
                        class="px-6 py-3 rounded-xl border border-white/40 text-white
                               hover:bg-purple-500 transition-colors"
                    >
                        "Contact Sales"
                    </a>
                </div>
            </div>
        </section>
    }
}
