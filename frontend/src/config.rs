use shared::api::load_path;
use shared::IntegrationType;
use tracing::Level;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const API_URL_META: &str = "integrations-api-url";

/// Runtime settings provided to the component tree via context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>, log_level: Level) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            log_level,
        }
    }

    /// Build-time settings, overridden by a `<meta name="integrations-api-url">`
    /// tag in the hosting page when present.
    pub fn from_document() -> Self {
        let base = page_meta(API_URL_META)
            .or_else(|| option_env!("INTEGRATIONS_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self::new(base, parse_level(option_env!("INTEGRATIONS_LOG_LEVEL")))
    }

    /// Full address of the load endpoint for an integration.
    pub fn load_url(&self, integration: IntegrationType) -> String {
        format!("{}{}", self.api_base_url, load_path(integration))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, Level::INFO)
    }
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

fn page_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;

    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
