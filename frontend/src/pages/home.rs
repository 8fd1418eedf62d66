use shared::{Credentials, IntegrationType};
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::data_form::DataForm;

const DEFAULT_CREDENTIALS: &str = "{}";

/// Credentials typed into the page, `None` unless the text is a JSON
/// object. The caller keeps its last valid value on `None`.
fn parse_credentials(text: &str) -> Option<Credentials> {
    serde_json::from_str(text).ok()
}

/// Hosts the loader: picks an integration and supplies its credentials.
///
/// Invalid input is reported next to its field while the loader keeps the
/// last valid selection, so typing never discards loaded data.
#[function_component(Home)]
pub fn home() -> Html {
    let integration = use_state_eq(|| IntegrationType::Notion);
    let selector_error = use_state(|| None::<String>);
    let credentials = use_state_eq(Credentials::default);
    let credentials_text = use_state(|| DEFAULT_CREDENTIALS.to_string());
    let credentials_error = use_state(|| false);

    let on_select = {
        let integration = integration.clone();
        let selector_error = selector_error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<IntegrationType>() {
                Ok(selected) => {
                    integration.set(selected);
                    selector_error.set(None);
                }
                Err(err) => selector_error.set(Some(err.to_string())),
            }
        })
    };

    let on_credentials = {
        let credentials = credentials.clone();
        let credentials_text = credentials_text.clone();
        let credentials_error = credentials_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let text = input.value();
            match parse_credentials(&text) {
                Some(parsed) => {
                    credentials.set(parsed);
                    credentials_error.set(false);
                }
                None => credentials_error.set(true),
            }
            credentials_text.set(text);
        })
    };

    html! {
        <div class="container">
            <h2>{ "Load Integration Data" }</h2>
            <div class="form-row">
                <label for="integration">{ "Integration" }</label>
                <select id="integration" onchange={on_select}>
                    { for IntegrationType::ALL.iter().map(|option| {
                        let name = option.display_name();
                        html! {
                            <option value={name} selected={*option == *integration}>{ name }</option>
                        }
                    })}
                </select>
                if let Some(err) = &*selector_error {
                    <div class="error">{ err }</div>
                }
            </div>
            <div class="form-row">
                <label for="credentials">{ "Credentials (JSON)" }</label>
                <textarea
                    id="credentials"
                    rows="4"
                    value={(*credentials_text).clone()}
                    oninput={on_credentials}
                />
                if *credentials_error {
                    <div class="error">{ "Credentials must be a JSON object" }</div>
                }
            </div>
            <DataForm integration={*integration} credentials={(*credentials).clone()} />
        </div>
    }
}
