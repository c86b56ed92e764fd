use leptos::prelude::*;

use crate::components::comparison::Comparison;
use crate::components::demo::InteractiveDemo;
use crate::components::final_cta::FinalCta;
use crate::components::waitlist_form::WaitlistForm;

const PILLARS: &[(&str, &str)] = &[
    (
        "Real Matches",
        "Our algorithm focuses on deep compatibility, not just swipes. We find people who truly connect.",
    ),
    (
        "Reserved Tables",
        "We book your first date at a carefully selected restaurant. Show up, enjoy, connect.",
    ),
    (
        "Zero Pressure",
        "No endless messaging or ghosting. Just genuine face-to-face moments where chemistry happens.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Love, reserved for two"</h1>
                <p class="hero-lede">
                    "TwoTable is a dating app that skips endless chat and plans the whole first date: the match, the table and the time."
                </p>
                <div class="hero-actions">
                    <a href="#waitlist" class="btn btn-primary">"Join the waitlist"</a>
                    <a href="#demo" class="btn">"See how it works"</a>
                </div>
            </section>

            <section id="how-it-works" class="section promise">
                <div class="card-grid">
                    {PILLARS.iter().map(|(title, description)| view! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <InteractiveDemo />
            <WaitlistForm />

            <Comparison />
            <FinalCta />
        </div>
    }
}
