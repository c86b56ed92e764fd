use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success { title: String, detail: String },
    Error { title: String, detail: String },
}

/// Inline toast shown after a form submission.
#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let (class, title, detail) = match notice {
        Notice::Success { title, detail } => ("notice notice-success", title, detail),
        Notice::Error { title, detail } => ("notice notice-error", title, detail),
    };

    view! {
        <div class=class role="status">
            <strong class="notice-title">{title}</strong>
            <span class="notice-detail">{detail}</span>
        </div>
    }
}
