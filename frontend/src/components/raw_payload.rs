use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RawPayloadProps {
    pub heading: String,
    /// Pretty-printed JSON
    pub pretty: String,
}

#[function_component(RawPayload)]
pub fn raw_payload(props: &RawPayloadProps) -> Html {
    html! {
        <div class="data-section">
            <h3>{ &props.heading }</h3>
            <div class="card">
                <pre class="raw-payload">{ &props.pretty }</pre>
            </div>
        </div>
    }
}
