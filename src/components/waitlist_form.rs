use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use twotable_core::counter::{date_from_millis, format_count, WaitlistCounter, BUMP_INTERVAL_MS};

use crate::api;
use crate::storage::LocalCounterStore;

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let counter = RwSignal::new(WaitlistCounter::load_or_seed(
        LocalCounterStore,
        date_from_millis(js_sys::Date::now() as i64),
    ));
    let (email, set_email) = signal(String::new());
    let (is_submitted, set_is_submitted) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    // Simulated signups from other visitors
    Effect::new(move |_| {
        let callback = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let roll = js_sys::Math::random();
            counter.try_update(|c| c.maybe_bump(roll));
        }) as Box<dyn Fn()>);

        let Some(window) = web_sys::window() else {
            return;
        };
        let interval_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                BUMP_INTERVAL_MS as i32,
            )
            .ok();
        callback.forget();

        on_cleanup(move || {
            if let (Some(window), Some(id)) = (web_sys::window(), interval_id) {
                window.clear_interval_with_handle(id);
            }
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        set_is_loading.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            match api::join_waitlist(&address).await {
                Ok(_) => {
                    counter.update(|c| {
                        c.increment();
                    });
                    set_is_submitted.set(true);
                }
                Err(e) => {
                    tracing::error!("Failed to join waitlist: {}", e);
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <section id="waitlist" class="section waitlist">
            <span class="eyebrow">"Limited early access"</span>
            <h2>"Be first in line for a better first date"<span class="red-dot"></span></h2>
            <p class="section-lede">
                "We're opening TwoTable in Bristol & London this Spring. Join the waitlist for early access and a quiet founding-member discount."
            </p>

            <Show
                when=move || is_submitted.get()
                fallback=move || view! {
                    <form class="waitlist-form" on:submit=submit>
                        <input
                            type="email"
                            class="input"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Joining..." } else { "Join the waitlist" }}
                        </button>
                        {move || error_message.get().map(|err| view! {
                            <span class="status-text status-error">{err}</span>
                        })}
                    </form>
                }
            >
                <div class="waitlist-success">
                    <strong>"You're on the list."</strong>
                    <p>"We'll email you before the first tables open."</p>
                </div>
            </Show>

            <p class="waitlist-count">
                {move || format_count(counter.with(|c| c.count()))}
                " people are already waiting for a table"
            </p>
        </section>
    }
}
