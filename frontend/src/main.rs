mod components;
mod config;
mod error;
mod pages;
mod presentation;
mod services;
mod state;

use tracing_wasm::WASMLayerConfigBuilder;
use yew::prelude::*;

use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Integration Loader" }</h1>
            </div>
        </header>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <div id="app">
                <Header />
                <pages::home::Home />
            </div>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let config = AppConfig::from_document();

    // Initialize tracing
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!("Using integrations API at {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
