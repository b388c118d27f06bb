pub mod results;

use crate::pages::home::api;
use crate::shared::nav_state::RouteState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use results::ProteinSearchResults;

/// Results view. Results usually ride in on navigation state from the
/// landing page; an entry carrying only a term fetches them here.
#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let location = use_location();
    let entry = RouteState::from_state(&location.state.get_untracked()).unwrap_or_default();

    let (results, set_results) = signal(entry.search_results.clone());
    let (error, set_error) = signal(None::<String>);
    let term = entry.search_term.clone();

    {
        let term = term.clone();
        Effect::new(move |_| {
            if term.is_empty() || results.get_untracked().is_some() {
                return;
            }
            let term = term.clone();
            spawn_local(async move {
                match api::search_proteins(&term).await {
                    Ok(payload) => set_results.set(Some(payload)),
                    Err(msg) => set_error.set(Some(msg)),
                }
            });
        });
    }

    view! {
        <main class="search-container">
            <h1>"Protein Search"</h1>
            <p class="search-term-echo">{format!("Results for \"{}\"", term)}</p>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || results.get().is_some()>
                <ProteinSearchResults results=Signal::derive(move || {
                    results.get().unwrap_or(serde_json::Value::Null)
                }) />
            </Show>
        </main>
    }
}
