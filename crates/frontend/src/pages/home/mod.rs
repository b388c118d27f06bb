pub mod api;
pub mod background;

use crate::pages::search::results::ProteinSearchResults;
use crate::shared::nav_state::RouteState;
use api::FetchError;
use background::use_background_sizer;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// Landing page: condition picker, protein search and the experiments link,
/// over a decorative background sized to the content above the boxes.
#[component]
pub fn HomePage() -> impl IntoView {
    let location = use_location();
    let entry = RouteState::from_state(&location.state.get_untracked()).unwrap_or_default();

    let (search_term, set_search_term) = signal(entry.search_term.clone());
    let (error, set_error) = signal(None::<String>);
    let (search_results, set_search_results) = signal(entry.search_results.clone());
    let (conditions, set_conditions) = signal(Vec::<String>::new());
    let (selected_condition, set_selected_condition) = signal(String::new());

    let home_ref = NodeRef::<html::Main>::new();
    let boxes_ref = NodeRef::<html::Div>::new();
    use_background_sizer(home_ref, boxes_ref);

    // One-shot conditions load, aborted if the page is torn down before the
    // server answers. An abort must leave every signal untouched.
    let abort = StoredValue::new_local(None::<web_sys::AbortController>);
    Effect::new(move |_| {
        if abort.with_value(|controller| controller.is_some()) {
            return;
        }
        let Ok(controller) = web_sys::AbortController::new() else {
            return;
        };
        let abort_signal = controller.signal();
        abort.set_value(Some(controller));
        spawn_local(async move {
            match api::fetch_conditions(&abort_signal).await {
                Ok(list) => set_conditions.set(list),
                Err(FetchError::Aborted) => {}
                Err(FetchError::Message(msg)) => {
                    log::error!("Error fetching conditions: {}", msg);
                    set_error.set(Some(msg));
                }
            }
        });
    });
    on_cleanup(move || {
        abort.update_value(|controller| {
            if let Some(controller) = controller.take() {
                controller.abort();
            }
        });
    });

    // Arriving with a search term in navigation state searches right away.
    // A slow automatic search can race a later manual one; last response
    // wins. TODO: cancel the automatic search on manual submission.
    let state_signal = location.state;
    Effect::new(move |_| {
        let Some(state) = RouteState::from_state(&state_signal.get()) else {
            return;
        };
        if state.search_term.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::search_proteins(&state.search_term).await {
                Ok(results) => set_search_results.set(Some(results)),
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    });

    let navigate = use_navigate();

    let on_condition_change =
        move |ev: web_sys::Event| set_selected_condition.set(event_target_value(&ev));

    let nav = navigate.clone();
    let on_condition_select = move |_| {
        let condition = selected_condition.get();
        if condition.is_empty() {
            return;
        }
        nav(
            &format!("/condition/{}", urlencoding::encode(&condition)),
            NavigateOptions::default(),
        );
    };

    let nav = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let state = RouteState::for_search(search_term.get());
        nav(
            "/search",
            NavigateOptions {
                state: state.to_state(),
                ..Default::default()
            },
        );
    };

    let nav = navigate.clone();
    let on_experiments = move |_| nav("/experiments", NavigateOptions::default());

    view! {
        <main class="home-container" node_ref=home_ref>
            <img
                class="home-background-image"
                src="/assets/protein_dynamics.gif"
                alt=""
                aria-hidden="true"
            />

            <div class="dspa-text-blue">
                <br />
                <span class="dspa-logo-text">"DynaProt"</span>
                <br />
                <span class="dspa-large">"Explore dynamic changes in protein structure."</span>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="three-boxes-container" node_ref=boxes_ref>
                // Left box, condition dropdown
                <div class="box">
                    <div class="box-content">
                        <label>"Select Condition"</label>
                        <p class="description">
                            "Choose a condition to explore its impact on protein structures."
                        </p>
                    </div>

                    <div class="box-actions">
                        <select
                            id="condition-select"
                            class="condition-dropdown-home"
                            on:change=on_condition_change
                        >
                            <option value="" selected=move || selected_condition.get().is_empty()>
                                "Select a Condition"
                            </option>
                            <For
                                each=move || {
                                    conditions.get().into_iter().enumerate().collect::<Vec<_>>()
                                }
                                key=|(index, _)| index.clone()
                                children=move |(_, condition): (usize, String)| {
                                    let for_selected = condition.clone();
                                    let is_selected = move || selected_condition.get() == for_selected;
                                    view! {
                                        <option value=condition.clone() selected=is_selected>
                                            {condition.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <span
                            class="disabled-tooltip"
                            title=move || {
                                if selected_condition.get().is_empty() {
                                    "Please select the condition first".to_string()
                                } else {
                                    String::new()
                                }
                            }
                        >
                            <button
                                type="button"
                                on:click=on_condition_select
                                disabled=move || selected_condition.get().is_empty()
                            >
                                "Proceed with selection"
                            </button>
                        </span>
                    </div>
                </div>

                // Middle box, protein search
                <div class="box">
                    <div class="box-content">
                        <label>"Protein Search"</label>
                        <p class="description">
                            "Search for proteins by name to view related structural dynamics data."
                        </p>
                    </div>
                    <form class="box-actions" on:submit=on_submit>
                        <input
                            id="protein-search"
                            type="text"
                            value=move || search_term.get()
                            on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        />
                        <button type="submit">"Search"</button>
                    </form>
                </div>

                // Right box, experiments link
                <div class="box">
                    <div class="box-content">
                        <label>"Go to Experiments"</label>
                        <p class="description">
                            "Explore all experiments related to protein structural changes."
                        </p>
                    </div>
                    <div class="box-actions">
                        <button type="button" on:click=on_experiments>"View Experiments"</button>
                    </div>
                </div>
            </div>

            <Show when=move || search_results.get().is_some()>
                <ProteinSearchResults results=Signal::derive(move || {
                    search_results.get().unwrap_or(serde_json::Value::Null)
                }) />
            </Show>

            <div class="dspa-publications">
                <h2>"Publications related to LiP-MS"</h2>
                <div class="publication-block dspa-padding dspa-background-rose">
                    <h3>
                        "Measuring protein structural changes on a proteome-wide scale using \
                         limited proteolysis-coupled mass spectrometry."
                    </h3>
                    <p>
                        "Schopper S, Kahraman A, Leuenberger P, Feng Y, Piazza I, Müller O, \
                         Boersema PJ, Picotti P. Nat Protoc. 2017 Nov;12(11):2391-2410. doi: \
                         10.1038/nprot.2017.100. Epub 2017 Oct 26. PMID: 29072706."
                    </p>
                    <a
                        href="https://www.nature.com/articles/nprot.2017.100"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="dspa-link"
                    >
                        "View Publication on Nature.com"
                    </a>
                    <h3>
                        "Dynamic 3D proteomes reveal protein functional alterations at high \
                         resolution in situ"
                    </h3>
                    <p>
                        "Cappelletti V, Hauser T, Piazza I, Pepelnjak M, Malinovska L, Fuhrer T, \
                         Li Y, Dörig C, Boersema P, Gillet L, Grossbach J, Dugourd A, \
                         Saez-Rodriguez J, Beyer A, Zamboni N, Caflisch A, de Souza N, Cell. \
                         2021 Jan 21;184(2):545-559.e22. doi: 10.1016/j.cell.2020.12.021. Epub \
                         2020 Dec 23. PMID: 33357446; PMCID: PMC7836100."
                    </p>
                    <a
                        href="https://www.sciencedirect.com/science/article/pii/S0092867420316913?via%3Dihub"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="dspa-link"
                    >
                        "View Publication on sciencedirect.com"
                    </a>
                    <h3>
                        "A Map of Protein-Metabolite Interactions Reveals Principles of Chemical \
                         Communication"
                    </h3>
                    <p>
                        "Piazza I, Kochanowski K, Cappelletti V, Fuhrer T, Noor E, Sauer U, \
                         Picotti P. Cell. 2018 Jan 11;172(1-2):358-372.e23. doi: \
                         10.1016/j.cell.2017.12.006. Epub 2018 Jan 4. PMID: 29307493."
                    </p>
                    <a
                        href="https://www.sciencedirect.com/science/article/pii/S0092867417314484?via%3Dihub"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="dspa-link"
                    >
                        "View Publication on sciencedirect.com"
                    </a>
                </div>
            </div>
        </main>

        <footer style="text-align: center; margin-top: 20px; padding: 10px;">
            <p>"© 2024 Eidgenössische Technische Hochschule Zürich"</p>
        </footer>
    }
}
