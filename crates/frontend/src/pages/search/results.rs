use leptos::prelude::*;

/// Renders the opaque payload handed back by the search endpoint. Its shape
/// belongs to the server; beyond counting top-level list entries this view
/// shows it as-is.
#[component]
pub fn ProteinSearchResults(#[prop(into)] results: Signal<serde_json::Value>) -> impl IntoView {
    let count = move || match results.get() {
        serde_json::Value::Array(items) => Some(items.len()),
        _ => None,
    };
    let pretty = move || serde_json::to_string_pretty(&results.get()).unwrap_or_default();

    view! {
        <section class="search-results">
            <h2>"Search Results"</h2>
            {move || {
                count()
                    .map(|n| {
                        view! {
                            <p class="search-results__count">{format!("{} matches", n)}</p>
                        }
                    })
            }}
            <pre class="search-results__payload">{pretty}</pre>
        </section>
    }
}
