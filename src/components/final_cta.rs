use leptos::prelude::*;

const PERKS: &[&str] = &[
    "No endless swiping",
    "Tables held for TwoTable dates",
    "Designed for first dates, not feeds",
];

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="section final-cta">
            <div class="cta-card">
                <div class="cta-icon">"\u{2665}"</div>
                <h2>"Ready for dates that already have a table"<span class="red-dot"></span></h2>
                <p>
                    "Join the waitlist and be among the first to try TwoTable in your city. Fewer, better dates, with a table waiting when you walk in."
                </p>
                <a href="#waitlist" class="btn btn-primary">"Join the waitlist \u{2192}"</a>
                <p class="cta-note">
                    "Early access only. No spam, just launch updates and the occasional date night idea."
                </p>
                <div class="cta-perks">
                    {PERKS.iter().map(|perk| view! { <span class="pill">{*perk}</span> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
