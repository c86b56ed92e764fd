use leptos::prelude::*;

struct Row {
    feature: &'static str,
    other_sub: &'static str,
    other_note: &'static str,
    ours: &'static str,
    ours_sub: &'static str,
}

const ROWS: &[Row] = &[
    Row {
        feature: "Endless swiping",
        other_sub: "Profiles blur into each other.",
        other_note: "Lots of swipes, very few real dates.",
        ours: "Quality matches",
        ours_sub: "Fewer people, better fit for real life.",
    },
    Row {
        feature: "Ghosting & dead chats",
        other_sub: "Chats fizzle out for no reason.",
        other_note: "You\u{2019}re always waiting on a reply.",
        ours: "Guaranteed dates",
        ours_sub: "If you both say yes, there\u{2019}s a table booked.",
    },
    Row {
        feature: "Plan dates yourself",
        other_sub: "You hunt for venues and times.",
        other_note: "More admin than actual dating.",
        ours: "We book it all",
        ours_sub: "Time, table and place handled for you.",
    },
    Row {
        feature: "Catfishing risk",
        other_sub: "Photos don\u{2019}t always match real life.",
        other_note: "You only find out once you\u{2019}re there.",
        ours: "Verified profiles",
        ours_sub: "Real people, checked before we match.",
    },
    Row {
        feature: "Decision fatigue",
        other_sub: "Too many options, no clear pick.",
        other_note: "It feels like work, not fun.",
        ours: "Curated options",
        ours_sub: "A few strong choices, not an endless list.",
    },
];

const DIFFERENTIATORS: &[(&str, &str)] = &[
    (
        "Date night, sorted",
        "We match you, book the restaurant and hold the table. You just show up.",
    ),
    (
        "Match and mood",
        "We think about vibe, venue and values, not just who happened to swipe right.",
    ),
    (
        "Real first dates",
        "Fewer endless chats, more face-to-face time where chemistry actually happens.",
    ),
];

/// Side-by-side with a typical dating app.
#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <section id="why-different" class="section comparison">
            <div class="section-header">
                <span class="eyebrow">"Why we're different"</span>
                <h2>"Not another dating app"<span class="red-dot"></span></h2>
                <p class="section-lede">
                    "TwoTable skips the endless chat and gets you to an actual table in the real world. Here's how it feels next to a typical dating app."
                </p>
            </div>

            <div class="comparison-table">
                <div class="comparison-head">
                    <span>"What it's like"</span>
                    <span>"Other apps"</span>
                    <span class="accent">"TwoTable"</span>
                </div>
                {ROWS.iter().map(|row| view! {
                    <div class="comparison-row">
                        <div class="comparison-feature">
                            <p>{row.feature}</p>
                            <small>{row.other_sub}</small>
                        </div>
                        <div class="comparison-other">
                            <span class="mark mark-no">"\u{2715}"</span>
                            <small>{row.other_note}</small>
                        </div>
                        <div class="comparison-ours">
                            <span class="mark mark-yes">"\u{2713}"</span>
                            <strong>{row.ours}</strong>
                            <small>{row.ours_sub}</small>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <div class="card-grid">
                {DIFFERENTIATORS.iter().map(|(title, description)| view! {
                    <div class="card">
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
