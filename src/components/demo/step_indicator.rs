use leptos::prelude::*;

use twotable_core::demo::{DemoController, Screen};

use super::act;

/// Step list beside the phone. Only screens already reached can be jumped to.
#[component]
pub fn StepIndicator(controller: RwSignal<DemoController>) -> impl IntoView {
    view! {
        <ol class="step-list">
            {Screen::all().map(|step| {
                let is_active = move || controller.with(|c| c.current_screen() == step);
                let is_locked = move || controller.with(|c| !c.can_jump_to(step));
                view! {
                    <li>
                        <button
                            type="button"
                            class="step"
                            class:step-active=is_active
                            class:step-locked=is_locked
                            disabled=is_locked
                            on:click=move |_| {
                                if controller.with_untracked(|c| c.can_jump_to(step)) {
                                    act(controller, |c| c.go_to(step.number()));
                                }
                            }
                        >
                            <span class="step-number">{step.number()}</span>
                            <span class="step-text">
                                <strong>{step.title()}</strong>
                                <small>{step.subtitle()}</small>
                            </span>
                        </button>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ol>
    }
}
