use leptos::prelude::*;

use twotable_core::demo::{Agreement, DemoController, LookingFor, Screen, SlotKey};

use super::act;

const YOU_IMAGE: &str =
    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=800";
const THEM_IMAGE: &str =
    "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=400";

pub fn screen_view(screen: Screen, controller: RwSignal<DemoController>) -> AnyView {
    match screen {
        Screen::PROFILE => profile_screen(controller).into_any(),
        Screen::PREFERENCES => preferences_screen(controller).into_any(),
        Screen::MATCHING => matching_screen(controller).into_any(),
        Screen::RESULTS => results_screen(controller).into_any(),
        Screen::RESTAURANTS => restaurants_screen(controller).into_any(),
        Screen::TIME_PICKER => time_screen(controller).into_any(),
        Screen::MAP => map_screen(controller).into_any(),
        Screen::SYNCED => synced_screen(controller).into_any(),
        _ => booked_screen(controller).into_any(),
    }
}

fn profile_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let all_tags = controller.with_untracked(|c| c.config().profile_tags.clone());

    view! {
        <div class="screen screen-profile">
            <div class="profile-card">
                <img src=YOU_IMAGE alt="Sarah profile" />
                <div class="profile-card-text">
                    <p class="profile-name">"Sarah, 28 \u{b7} Bristol"</p>
                    <p class="profile-bio">"Marketing \u{b7} Loves hiking, cosy wine bars and cooking for friends."</p>
                </div>
            </div>
            <p class="hint">"Pick the vibes that sound like you."</p>
            <div class="chip-row">
                {all_tags.into_iter().map(|tag| {
                    let for_class = tag.clone();
                    let for_click = tag.clone();
                    view! {
                        <button
                            type="button"
                            class="chip"
                            class:chip-active=move || controller.with(|c| c.profile().has_tag(&for_class))
                            on:click=move |_| {
                                let tag = for_click.clone();
                                act(controller, move |c| c.toggle_tag(&tag));
                            }
                        >
                            {tag}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn preferences_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    view! {
        <div class="screen screen-preferences">
            <p class="hint">"Looking for"</p>
            <div class="segmented">
                {LookingFor::ALL.into_iter().map(|option| view! {
                    <button
                        type="button"
                        class="segment"
                        class:segment-active=move || controller.with(|c| c.profile().looking_for() == option)
                        on:click=move |_| act(controller, move |c| c.set_looking_for(option))
                    >
                        {option.label()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>
            <p class="hint">"We use this to tune both the match and the table."</p>
        </div>
    }
}

fn matching_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let progress = move || controller.with(|c| c.progress());

    view! {
        <div class="screen screen-matching">
            <div class="pulse-ring"></div>
            <p class="matching-label">"Finding people nearby who fit your night"</p>
            <div class="progress-row">
                <span>"Matching"</span>
                <span>{move || format!("{}%", progress())}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style:width=move || format!("{}%", progress())></div>
            </div>
        </div>
    }
}

fn results_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let candidate = move || controller.with(|c| c.active_candidate().cloned());
    let overlay_open = move || controller.with(|c| c.overlay_open());

    view! {
        <div class="screen screen-results">
            {move || candidate().map(|m| view! {
                <div class="match-card">
                    <img src=m.image.clone() alt=m.name.clone() />
                    <div class="match-card-text">
                        <p class="match-name">{m.name.clone()}</p>
                        <p class="match-meta">{m.distance.clone()}" \u{b7} "{m.score}"% match"</p>
                        <p class="match-blurb">{m.blurb.clone()}</p>
                    </div>
                </div>
            })}

            <div class="match-actions">
                <button type="button" class="round-btn pass" on:click=move |_| act(controller, |c| c.dislike())>
                    "\u{2715}"
                </button>
                <button type="button" class="round-btn info" on:click=move |_| act(controller, |c| c.view_profile())>
                    "?"
                </button>
                <button type="button" class="round-btn love" on:click=move |_| act(controller, |c| c.like())>
                    "\u{2665}"
                </button>
            </div>

            <Show when=overlay_open>
                <div class="profile-overlay">
                    {move || candidate().map(|m| view! {
                        <div class="overlay-body">
                            <img src=m.image.clone() alt=m.name.clone() />
                            <h4>{m.name.clone()}</h4>
                            <p>{m.blurb.clone()}</p>
                            <div class="chip-row">
                                {m.tags.iter().map(|t| view! { <span class="chip">{t.clone()}</span> }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    })}
                    <div class="overlay-actions">
                        <button type="button" class="btn" on:click=move |_| act(controller, |c| c.close_profile())>
                            "Back"
                        </button>
                        <button type="button" class="btn btn-primary" on:click=move |_| act(controller, |c| c.like())>
                            "Love"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn restaurants_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let options = controller.with_untracked(|c| c.config().restaurants.clone());
    let has_proposal = move || controller.with(|c| c.proposed_restaurant().is_some());

    view! {
        <div class="screen screen-restaurants">
            <p class="hint">"TwoTable picked a spot for you both. Tap another to propose it instead."</p>
            <ul class="restaurant-list">
                {options.into_iter().map(|r| {
                    let id = r.id.clone();
                    let id_primary = r.id.clone();
                    let id_click = r.id.clone();
                    view! {
                        <li>
                            <button
                                type="button"
                                class="restaurant"
                                class:restaurant-proposed=move || controller.with(|c| c.proposed_restaurant().is_some_and(|p| p.id == id))
                                on:click=move |_| {
                                    let id = id_click.clone();
                                    act(controller, move |c| c.propose(&id));
                                }
                            >
                                <span class="restaurant-name">{r.name.clone()}</span>
                                <span class="restaurant-meta">
                                    {r.category.clone()}" \u{b7} \u{2605} "{r.rating}" \u{b7} "{r.price.clone()}" \u{b7} ~"{r.eta_minutes}" min"
                                </span>
                                <Show when=move || controller.with(|c| c.primary_restaurant().is_some_and(|p| p.id == id_primary))>
                                    <span class="badge">"TwoTable pick"</span>
                                </Show>
                            </button>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
            <div class="restaurant-actions">
                <button type="button" class="btn btn-primary" on:click=move |_| act(controller, |c| c.confirm_primary())>
                    "Sounds good"
                </button>
                <button
                    type="button"
                    class="btn"
                    disabled=move || !has_proposal()
                    on:click=move |_| act(controller, |c| c.confirm_proposed())
                >
                    "Propose this instead"
                </button>
            </div>
        </div>
    }
}

fn time_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let grid = controller.with_untracked(|c| c.config().time_grid.clone());
    let partner = move || {
        controller.with(|c| {
            c.liked_match()
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "Them".to_string())
        })
    };
    let enough = move || controller.with(|c| c.your_slots().len() >= 3);

    view! {
        <div class="screen screen-time">
            <p class="hint">"Choose at least three times on your side."</p>
            <div class="time-people">
                <span class="person"><img src=YOU_IMAGE alt="You" />"You"</span>
                <span class="person">
                    <img
                        src=move || controller.with(|c| c.liked_match().map(|m| m.image.clone()).unwrap_or_else(|| THEM_IMAGE.to_string()))
                        alt=partner
                    />
                    {partner}
                </span>
            </div>
            {grid.into_iter().map(|column| view! {
                <div class="time-day">
                    <p class="time-day-label">{column.day.clone()}</p>
                    <div class="time-row">
                        {column.slots.iter().map(|slot| {
                            let key = SlotKey::new(&column.day, slot);
                            let overlap_key = key.clone();
                            let selected_key = key.clone();
                            let theirs = controller.with_untracked(|c| c.their_slots().contains(&key));
                            view! {
                                <div
                                    class="time-cell"
                                    class:time-overlap=move || theirs && controller.with(|c| c.your_slots().contains(&overlap_key))
                                >
                                    <button
                                        type="button"
                                        class="time-you"
                                        class:time-selected=move || controller.with(|c| c.your_slots().contains(&selected_key))
                                        on:click=move |_| {
                                            let key = key.clone();
                                            act(controller, move |c| c.toggle_your_slot(key));
                                        }
                                    >
                                        {slot.clone()}" you"
                                    </button>
                                    <div class="time-them" class:time-selected=theirs>
                                        {slot.clone()}" them"
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            }).collect::<Vec<_>>()}
            <button
                type="button"
                class="btn btn-primary"
                disabled=move || !enough()
                on:click=move |_| act(controller, |c| {
                    c.lock_in();
                })
            >
                "Lock it in"
            </button>
        </div>
    }
}

fn map_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let summary = move || controller.with(|c| c.summary());
    let eta = move || controller.with(|c| c.effective_restaurant().map(|r| r.eta_minutes).unwrap_or(25));

    view! {
        <div class="screen screen-map">
            <p class="hint">
                "Visualising the commute to "{move || summary().restaurant}" \u{b7} ~25-45 min door to door"
            </p>
            <div class="map-card">
                <div class="map-pin you">"You \u{b7} ~"{eta}" min"</div>
                <div class="map-pin them">
                    {move || summary().partner}" \u{b7} ~"{move || eta().saturating_sub(5).max(20)}" min"
                </div>
                <div class="map-pin venue">{move || summary().restaurant}</div>
                {move || summary().approved_by.map(|name| view! {
                    <span class="approved-pill">"Approved by "{name}</span>
                })}
            </div>
        </div>
    }
}

fn synced_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let summary = move || controller.with(|c| c.summary());
    let no_overlap = move || controller.with(|c| c.no_overlap());

    view! {
        <div class="screen screen-synced">
            <div class="synced-faces">
                <img src=YOU_IMAGE alt="You" />
                <img
                    src=move || summary().partner_image.unwrap_or_else(|| THEM_IMAGE.to_string())
                    alt=move || summary().partner
                />
                {move || summary().approved_by.map(|name| view! {
                    <span class="approved-pill">"Approved by "{name}</span>
                })}
            </div>
            <p class="hint">
                {move || if no_overlap() {
                    "You chose different times, but they've approved one of yours."
                } else {
                    "You both chose overlapping times and a TwoTable-curated spot."
                }}
            </p>
            <div class="summary-card">
                <p class="summary-line">{move || summary().restaurant}</p>
                <p class="summary-line">{move || summary().time}</p>
                <Show when=move || controller.with(|c| c.agreement() == Agreement::ProposedConfirmed)>
                    <p class="summary-note">"Your proposal was accepted."</p>
                </Show>
            </div>
        </div>
    }
}

fn booked_screen(controller: RwSignal<DemoController>) -> impl IntoView {
    let summary = move || controller.with(|c| c.summary());

    view! {
        <div class="screen screen-booked">
            <div class="booking-card">
                <h4>{move || summary().restaurant}</h4>
                <p class="booking-line">"\u{1f552} "{move || summary().time}</p>
                <p class="booking-line">"12 Regent Street, Bristol \u{b7} Within 45 minutes of you both"</p>
                <p class="booking-line">"You and "{move || summary().partner}" see this same card."</p>
            </div>
            <p class="hint">
                "Just show up at the time above. If either of you proposes a different restaurant from the list and both confirm, this card updates automatically."
            </p>
        </div>
    }
}
