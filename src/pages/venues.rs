use leptos::prelude::*;

use crate::components::venue_form::VenueApplicationForm;

const STEPS: &[(&str, &str)] = &[
    (
        "Tell us about your venue",
        "Share your concept, location, and which services you want to test with TwoTable guests.",
    ),
    (
        "We review in 48 hours",
        "Our team evaluates fit, checks availability in your area, and reaches out with next steps.",
    ),
    (
        "Launch a 30-day pilot",
        "Activate selected nights with clear payouts, booking controls, and zero upfront cost.",
    ),
    (
        "Scale with confidence",
        "Keep what works, pause what doesn't, and grow incremental revenue on your terms.",
    ),
];

const BENEFITS: &[(&str, &str)] = &[
    (
        "Guaranteed payouts",
        "Fixed earnings per booking, released after check-in, with no invoice chasing or no-show losses.",
    ),
    (
        "Quiet slot revenue",
        "Activate Tuesday nights, shoulder times, or new services without discounting your peak business.",
    ),
    (
        "No fixed fees",
        "No monthly subscription or setup costs. You only pay when TwoTable sends real guests to your tables.",
    ),
    (
        "Control stays with you",
        "You set capacity, nights and blackout dates, and can pause availability at any time.",
    ),
];

#[component]
pub fn VenuesPage() -> impl IntoView {
    view! {
        <div class="page venues-page">
            <section class="hero hero-venues">
                <h1>"Fill your quiet tables with real dates"</h1>
                <p class="hero-lede">
                    "TwoTable sends matched couples to partner venues on the nights you choose."
                </p>
                <a href="#application-form" class="btn btn-primary">"Apply to partner"</a>
            </section>

            <section class="section benefits">
                <div class="card-grid">
                    {BENEFITS.iter().map(|(title, desc)| view! {
                        <div class="card">
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section how-it-works">
                <h2>"How partnering works"</h2>
                <div class="steps">
                    {STEPS.iter().enumerate().map(|(i, (title, desc))| view! {
                        <div class="step">
                            <span class="step-number">{i + 1}</span>
                            <div class="step-content">
                                <strong>{*title}</strong>
                                <p>{*desc}</p>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <VenueApplicationForm />
        </div>
    }
}
