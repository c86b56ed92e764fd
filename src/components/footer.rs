use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <span class="brand-name">"TwoTable"</span>
                <p>"Real dates, real tables. Bristol & London."</p>
            </div>
            <ul class="footer-links">
                <li><a href="/#demo">"How it works"</a></li>
                <li><a href="/venues">"Partner with us"</a></li>
                <li><a href="mailto:hello@twotable.co">"Contact"</a></li>
            </ul>
        </footer>
    }
}
