use gloo_net::http::Request;
use serde_json::Value;
use shared::api::{LoadErrorResponse, CREDENTIALS_FIELD};
use shared::{Credentials, IntegrationType};
use web_sys::FormData;

use crate::config::AppConfig;
use crate::error::LoadError;

pub struct ApiService;

impl ApiService {
    /// Ask the backend to load records from `integration`.
    ///
    /// Issues a single multipart POST; the response body is returned
    /// verbatim.
    pub async fn load_integration(
        config: &AppConfig,
        integration: IntegrationType,
        credentials: &Credentials,
    ) -> Result<Value, LoadError> {
        let url = config.load_url(integration);
        let form = credentials_form(credentials)?;

        tracing::debug!("Loading {} items from {}", integration, url);

        let response = Request::post(&url).body(form)?.send().await?;

        if !response.ok() {
            let status = response.status();
            let detail = response
                .json::<LoadErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message());
            return Err(LoadError::Server { status, detail });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LoadError::MalformedResponse(e.to_string()))
    }
}

/// Multipart body with the JSON-serialized credentials as its only field.
pub fn credentials_form(credentials: &Credentials) -> Result<FormData, LoadError> {
    let encoded = credentials.to_transport()?;
    let form = FormData::new().map_err(|e| LoadError::Encode(format!("{:?}", e)))?;
    form.append_with_str(CREDENTIALS_FIELD, &encoded)
        .map_err(|e| LoadError::Encode(format!("{:?}", e)))?;
    Ok(form)
}
