use crate::pages::condition::ConditionPage;
use crate::pages::experiments::ExperimentsPage;
use crate::pages::home::HomePage;
use crate::pages::search::SearchResultsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="route-fallback">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/search") view=SearchResultsPage />
                <Route path=path!("/condition/:condition") view=ConditionPage />
                <Route path=path!("/experiments") view=ExperimentsPage />
            </Routes>
        </Router>
    }
}
