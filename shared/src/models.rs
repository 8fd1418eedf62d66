use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Third-party service the backend can load records from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    Notion,
    Airtable,
    HubSpot,
}

impl IntegrationType {
    /// Every supported integration, in display order.
    pub const ALL: [IntegrationType; 3] = [
        IntegrationType::Notion,
        IntegrationType::Airtable,
        IntegrationType::HubSpot,
    ];

    /// Path segment addressing this integration on the backend.
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Notion => "notion",
            Self::Airtable => "airtable",
            Self::HubSpot => "hubspot",
        }
    }

    /// Human-readable name, also the selector value accepted by `FromStr`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Notion => "Notion",
            Self::Airtable => "Airtable",
            Self::HubSpot => "HubSpot",
        }
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Selector string that does not name a supported integration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration: {0:?}")]
pub struct UnknownIntegration(pub String);

impl FromStr for IntegrationType {
    type Err = UnknownIntegration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|integration| integration.display_name() == s)
            .ok_or_else(|| UnknownIntegration(s.to_string()))
    }
}

/// Opaque credentials for an integration.
///
/// The frontend never looks inside; the value is only serialized for
/// transport to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(pub Map<String, Value>);

impl Credentials {
    /// JSON text carried in the `credentials` form field.
    pub fn to_transport(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

/// Record returned by a backend `load` endpoint.
///
/// All fields are optional: each integration fills in what its upstream
/// API provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub directory: Option<String>,
    pub parent_id: Option<String>,
    pub parent_path_or_name: Option<String>,
    pub name: Option<String>,
    pub creation_time: Option<String>,
    pub last_modified_time: Option<String>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub visibility: Option<String>,
}

impl IntegrationItem {
    /// Lenient projection of an arbitrary JSON record.
    ///
    /// Missing, null, empty, zero and `false` values map to `None`; other
    /// scalars become their text form and nested values compact JSON.
    /// Non-object records project to an empty item.
    pub fn from_record(record: &Value) -> Self {
        let field = |name: &str| record.get(name).and_then(present_text);

        IntegrationItem {
            id: field("id"),
            item_type: field("type"),
            directory: field("directory"),
            parent_id: field("parent_id"),
            parent_path_or_name: field("parent_path_or_name"),
            name: field("name"),
            creation_time: field("creation_time"),
            last_modified_time: field("last_modified_time"),
            url: field("url"),
            mime_type: field("mime_type"),
            visibility: field("visibility"),
        }
    }
}

fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_path_segments_are_distinct_and_non_empty() {
        let segments: HashSet<_> = IntegrationType::ALL
            .iter()
            .map(|integration| integration.path_segment())
            .collect();

        assert_eq!(segments.len(), IntegrationType::ALL.len());
        assert!(segments.iter().all(|segment| !segment.is_empty()));
    }

    #[test]
    fn test_selector_round_trips_through_display_name() {
        for integration in IntegrationType::ALL {
            let parsed: IntegrationType = integration.to_string().parse().unwrap();
            assert_eq!(parsed, integration);
        }
        assert_eq!("HubSpot".parse::<IntegrationType>().unwrap().path_segment(), "hubspot");
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let err = "Salesforce".parse::<IntegrationType>().unwrap_err();
        assert_eq!(err, UnknownIntegration("Salesforce".to_string()));
        assert!(err.to_string().contains("Salesforce"));

        // Selectors are matched exactly
        assert!("notion".parse::<IntegrationType>().is_err());
    }

    #[test]
    fn test_credentials_serialize_verbatim() {
        let credentials: Credentials = serde_json::from_value(json!({
            "token": "abc",
            "workspace": { "id": 7 }
        }))
        .unwrap();

        let transported: Value = serde_json::from_str(&credentials.to_transport().unwrap()).unwrap();
        assert_eq!(transported, json!({ "token": "abc", "workspace": { "id": 7 } }));
    }

    #[test]
    fn test_item_from_record_applies_truthiness() {
        let item = IntegrationItem::from_record(&json!({
            "id": 42,
            "name": "",
            "type": null,
            "creation_time": "2024-03-01T10:00:00Z",
            "visibility": false,
            "url": 0,
            "directory": true
        }));

        assert_eq!(item.id.as_deref(), Some("42"));
        assert_eq!(item.name, None);
        assert_eq!(item.item_type, None);
        assert_eq!(item.creation_time.as_deref(), Some("2024-03-01T10:00:00Z"));
        assert_eq!(item.visibility, None);
        assert_eq!(item.url, None);
        assert_eq!(item.directory.as_deref(), Some("true"));
        assert_eq!(item.last_modified_time, None);
    }

    #[test]
    fn test_item_from_non_object_record_is_empty() {
        assert_eq!(IntegrationItem::from_record(&json!("plain")), IntegrationItem::default());
        assert_eq!(IntegrationItem::from_record(&json!([1, 2])), IntegrationItem::default());
    }

    #[test]
    fn test_item_deserializes_backend_shape() {
        let item: IntegrationItem = serde_json::from_value(json!({
            "id": "abc",
            "type": "Contact",
            "name": "Ada Lovelace",
            "parent_id": null
        }))
        .unwrap();

        assert_eq!(item.item_type.as_deref(), Some("Contact"));
        assert_eq!(item.parent_id, None);
    }
}
