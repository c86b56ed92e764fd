use leptos::prelude::*;

#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <a href="/" class="brand">
                <span class="brand-name">"TwoTable"</span>
                <span class="red-dot"></span>
            </a>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/#demo" class="nav-link">"How it works"</a>
                </li>
                <li class="nav-item">
                    <a href="/#faq" class="nav-link">"FAQ"</a>
                </li>
                <li class="nav-item">
                    <a href="/venues" class="nav-link">"For venues"</a>
                </li>
                <li class="nav-item">
                    <a href="/#waitlist" class="btn btn-primary">"Join the waitlist"</a>
                </li>
            </ul>
        </nav>
    }
}
