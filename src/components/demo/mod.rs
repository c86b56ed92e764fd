mod screens;
mod step_indicator;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use twotable_core::demo::{DemoConfig, DemoController, Screen};

use crate::storage::now_ms;
use screens::screen_view;
use step_indicator::StepIndicator;

/// Browser frame interval used to drive the walkthrough clock.
const FRAME_MS: i32 = 16;

/// Bring the controller's clock up to date, then apply `action`.
pub(crate) fn act(controller: RwSignal<DemoController>, action: impl FnOnce(&mut DemoController)) {
    let now = now_ms();
    controller.update(|c| {
        c.tick(now);
        action(c);
    });
}

#[component]
pub fn InteractiveDemo() -> impl IntoView {
    let config = DemoConfig::bundled().unwrap_or_else(|e| {
        tracing::warn!("Ignoring bundled demo config: {}", e);
        DemoConfig::default()
    });
    let controller = RwSignal::new(DemoController::new(config, now_ms()));
    let screen = Memo::new(move |_| controller.with(|c| c.current_screen()));

    // Drive the matching animation and scheduled transitions from the page clock
    Effect::new(move |_| {
        let callback = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let now = now_ms();
            let due = controller
                .try_with_untracked(|c| c.needs_tick(now))
                .unwrap_or(false);
            if due {
                controller.try_update(|c| c.tick(now));
            }
        }) as Box<dyn Fn()>);

        let Some(window) = web_sys::window() else {
            return;
        };
        let interval_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                FRAME_MS,
            )
            .ok();
        callback.forget();

        on_cleanup(move || {
            if let (Some(window), Some(id)) = (web_sys::window(), interval_id) {
                window.clear_interval_with_handle(id);
            }
            controller.try_update_untracked(|c| c.teardown());
        });
    });

    let show_next = move || {
        let s = screen.get();
        s < Screen::LAST && s != Screen::RESULTS && s != Screen::RESTAURANTS
    };

    view! {
        <section id="demo" class="section demo">
            <div class="section-header">
                <span class="eyebrow">"Experience TwoTable"</span>
                <h2>"See how TwoTable works"<span class="red-dot"></span></h2>
                <p class="section-lede">
                    "Tap through the journey like a modern dating app, from your profile, to a match you love, to a table within 45 minutes that suits you both."
                </p>
            </div>

            <div class="demo-layout">
                <div class="phone">
                    <div class="phone-screen">
                        <div class="dynamic-island"></div>
                        <header class="phone-header">
                            <button
                                type="button"
                                class="icon-btn"
                                on:click=move |_| act(controller, |c| c.go_back())
                                disabled=move || screen.get() == Screen::FIRST
                            >
                                "\u{2039}"
                            </button>
                            <p class="phone-brand">"TwoTable"</p>
                            <div class="icon-btn-spacer"></div>
                        </header>

                        <div class="phone-title">
                            <h3>{move || screen.get().title()}</h3>
                            <p>{move || screen.get().subtitle()}</p>
                        </div>

                        <div class="phone-content">
                            {move || screen_view(screen.get(), controller)}
                        </div>

                        <Show when=show_next>
                            <button
                                type="button"
                                class="phone-next"
                                on:click=move |_| act(controller, |c| c.go_next())
                            >
                                "\u{203a}"
                            </button>
                        </Show>
                    </div>
                    <div class="phone-controls">
                        <button
                            type="button"
                            class="btn"
                            on:click=move |_| act(controller, |c| c.go_back())
                            disabled=move || screen.get() == Screen::FIRST
                        >
                            "Back"
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| act(controller, |c| c.go_next())
                            disabled=move || screen.get() == Screen::LAST
                        >
                            "Next"
                        </button>
                    </div>
                </div>

                <StepIndicator controller=controller />
            </div>
        </section>
    }
}
