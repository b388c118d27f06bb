use leptos::prelude::*;

/// All-experiments view. Routing target only; the experiment browser is a
/// separate feature.
#[component]
pub fn ExperimentsPage() -> impl IntoView {
    view! {
        <main class="experiments-container">
            <h1>"Experiments"</h1>
            <p class="description">
                "Explore all experiments related to protein structural changes."
            </p>
        </main>
    }
}
