use chrono::Local;
use shared::{Credentials, IntegrationType};
use yew::prelude::*;

use crate::components::raw_payload::RawPayload;
use crate::components::records_table::RecordsTable;
use crate::config::AppConfig;
use crate::presentation::{payload_view, PayloadView};
use crate::services::api::ApiService;
use crate::state::{Loaded, LoadTracker};

#[derive(Properties, PartialEq)]
pub struct DataFormProps {
    pub integration: IntegrationType,
    pub credentials: Credentials,
}

/// Loads records from an integration on demand and renders the result.
#[function_component(DataForm)]
pub fn data_form(props: &DataFormProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let loaded = use_state(|| None::<Loaded>);
    let loading = use_state_eq(|| false);
    let tracker = use_mut_ref(LoadTracker::default);

    // A load still in flight belongs to the previous integration
    {
        let loading = loading.clone();
        let tracker = tracker.clone();
        use_effect_with(props.integration, move |_| {
            tracker.borrow_mut().invalidate();
            loading.set(false);
            || ()
        });
    }

    let on_load = {
        let loaded = loaded.clone();
        let loading = loading.clone();
        let tracker = tracker.clone();
        let integration = props.integration;
        let credentials = props.credentials.clone();

        Callback::from(move |_: MouseEvent| {
            let ticket = tracker.borrow_mut().begin();
            loading.set(true);

            let loaded = loaded.clone();
            let loading = loading.clone();
            let tracker = tracker.clone();
            let config = config.clone();
            let credentials = credentials.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome =
                    ApiService::load_integration(&config, integration, &credentials).await;

                let settled = tracker
                    .borrow()
                    .settle(ticket, (*loaded).clone(), integration, outcome);
                let Some(settlement) = settled else {
                    return;
                };
                loading.set(false);

                match settlement.notice {
                    Some(notice) => gloo::dialogs::alert(&notice),
                    None => loaded.set(settlement.loaded),
                }
            });
        })
    };

    let on_clear = {
        let loaded = loaded.clone();
        let loading = loading.clone();
        let tracker = tracker.clone();

        Callback::from(move |_: MouseEvent| {
            let cleared = tracker.borrow_mut().clear();
            loading.set(false);
            loaded.set(cleared);
        })
    };

    let view = payload_view((*loaded).as_ref(), &Local);

    html! {
        <div class="data-form">
            { match view {
                Some(PayloadView::Table { heading, rows }) => html! {
                    <RecordsTable {heading} {rows} />
                },
                Some(PayloadView::EmptyTable { heading }) => html! {
                    <div class="data-section">
                        <h3>{ heading }</h3>
                        <div class="empty-state">
                            <p>{ "No records returned." }</p>
                        </div>
                    </div>
                },
                Some(PayloadView::Raw { heading, pretty }) => html! {
                    <RawPayload {heading} {pretty} />
                },
                None => html! {},
            }}
            if *loading {
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            }
            <div class="actions">
                <button class="btn btn-primary" onclick={on_load}>{ "Load Data" }</button>
                <button class="btn btn-secondary" onclick={on_clear}>{ "Clear Data" }</button>
            </div>
        </div>
    }
}
