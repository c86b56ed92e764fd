use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::nav::Navigation;
use crate::pages::home::HomePage;
use crate::pages::venues::VenuesPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="site-layout">
                <Navigation />
                <main class="content">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/venues") view=VenuesPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
