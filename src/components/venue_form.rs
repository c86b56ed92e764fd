use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use twotable_core::forms::{VenueApplication, PAYOUT_RANGES, VENUE_TYPES};

use crate::api;
use crate::components::notice::{Notice, NoticeBanner};

/// Every field of the application form, one signal each.
#[derive(Clone, Copy)]
struct VenueFields {
    venue: RwSignal<String>,
    city: RwSignal<String>,
    venue_type: RwSignal<String>,
    web: RwSignal<String>,
    contact: RwSignal<String>,
    role: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    nights: RwSignal<String>,
    capacity: RwSignal<String>,
    payout: RwSignal<String>,
    notes: RwSignal<String>,
}

impl VenueFields {
    fn new() -> Self {
        Self {
            venue: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            venue_type: RwSignal::new(String::new()),
            web: RwSignal::new(String::new()),
            contact: RwSignal::new(String::new()),
            role: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            nights: RwSignal::new(String::new()),
            capacity: RwSignal::new(String::new()),
            payout: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> VenueApplication {
        VenueApplication {
            venue: self.venue.get_untracked(),
            city: self.city.get_untracked(),
            venue_type: self.venue_type.get_untracked(),
            web: Some(self.web.get_untracked()),
            contact: self.contact.get_untracked(),
            role: Some(self.role.get_untracked()),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            nights: self.nights.get_untracked(),
            capacity: self.capacity.get_untracked(),
            payout: self.payout.get_untracked(),
            notes: Some(self.notes.get_untracked()),
        }
    }

    fn reset(&self) {
        for field in [
            self.venue,
            self.city,
            self.venue_type,
            self.web,
            self.contact,
            self.role,
            self.email,
            self.phone,
            self.nights,
            self.capacity,
            self.payout,
            self.notes,
        ] {
            field.set(String::new());
        }
    }
}

#[component]
fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    disabled: ReadSignal<bool>,
    #[prop(optional, into)] input_type: Option<String>,
) -> impl IntoView {
    view! {
        <label class="form-group">
            <span class="form-label">{label}</span>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </label>
    }
}

#[component]
fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-group">
            <span class="form-label">{label}</span>
            <select
                class="input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.iter().map(|(v, text)| view! {
                    <option value=*v>{*text}</option>
                }).collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
pub fn VenueApplicationForm() -> impl IntoView {
    let fields = VenueFields::new();
    let (is_loading, set_is_loading) = signal(false);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let application = fields.snapshot();
        set_is_loading.set(true);
        set_notice.set(None);
        spawn_local(async move {
            match api::submit_venue_application(application).await {
                Ok(_) => {
                    fields.reset();
                    set_notice.set(Some(Notice::Success {
                        title: "Application submitted!".to_string(),
                        detail: "We'll review your application and get back to you within 2 business days.".to_string(),
                    }));
                }
                Err(e) => {
                    // Contents stay in place so the venue can fix and resubmit.
                    tracing::error!("Venue application failed: {}", e);
                    set_notice.set(Some(Notice::Error {
                        title: "Something went wrong".to_string(),
                        detail: e,
                    }));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <section id="application-form" class="section venue-application">
            <h2>"Partner Application"</h2>
            <form class="card venue-form" on:submit=submit>
                <h3>"Your Venue"</h3>
                <div class="form-grid">
                    <TextField label="Venue name" placeholder="e.g. The Bistro" value=fields.venue disabled=is_loading />
                    <TextField label="City" placeholder="e.g. Bristol, London" value=fields.city disabled=is_loading />
                    <SelectField label="Venue type" placeholder="Select type" options=VENUE_TYPES value=fields.venue_type disabled=is_loading />
                    <TextField label="Website or Instagram" placeholder="https://..." value=fields.web disabled=is_loading />
                </div>

                <h3>"Point of Contact"</h3>
                <div class="form-grid">
                    <TextField label="Name" placeholder="Full name" value=fields.contact disabled=is_loading />
                    <TextField label="Role" placeholder="Owner, GM, FOH Manager" value=fields.role disabled=is_loading />
                    <TextField label="Email" placeholder="you@venue.com" value=fields.email disabled=is_loading input_type="email" />
                    <TextField label="Phone" placeholder="+44..." value=fields.phone disabled=is_loading input_type="tel" />
                </div>

                <h3>"Availability"</h3>
                <div class="form-grid">
                    <TextField label="Which evenings?" placeholder="e.g. Tue-Thu after 6pm" value=fields.nights disabled=is_loading />
                    <TextField label="Tables per night" placeholder="e.g. 3-4 tables for two" value=fields.capacity disabled=is_loading />
                    <SelectField label="Ideal payout per booking" placeholder="Select range" options=PAYOUT_RANGES value=fields.payout disabled=is_loading />
                </div>

                <label class="form-group">
                    <span class="form-label">"Additional information"</span>
                    <textarea
                        class="input"
                        placeholder="Special constraints, preferred days, house rules, or ideas for how to make this work..."
                        prop:value=move || fields.notes.get()
                        on:input=move |ev| fields.notes.set(event_target_value(&ev))
                        disabled=move || is_loading.get()
                    ></textarea>
                </label>

                <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Submitting..." } else { "Submit application" }}
                </button>

                {move || notice.get().map(|n| view! { <NoticeBanner notice=n /> })}
            </form>
        </section>
    }
}
