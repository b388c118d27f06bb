use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Condition-specific exploration view. The dynamics browser is its own
/// feature; this page anchors the `/condition/{name}` route.
#[component]
pub fn ConditionPage() -> impl IntoView {
    let params = use_params_map();
    let condition = move || {
        let raw = params.get().get("condition").unwrap_or_default();
        let decoded = urlencoding::decode(&raw).map(|d| d.into_owned()).ok();
        decoded.unwrap_or(raw)
    };

    view! {
        <main class="condition-container">
            <h1 class="condition-title">{condition}</h1>
            <p class="description">"Structural dynamics recorded under this condition."</p>
        </main>
    }
}
