//! Pure rendering plan for a loaded payload.
//!
//! Components only map a [`PayloadView`] to markup, so every display rule
//! (placeholders, date formatting, row keys, headings) lives here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;
use shared::{IntegrationItem, IntegrationType};
use std::collections::HashSet;

use crate::state::{Loaded, Payload};

pub const TEXT_PLACEHOLDER: &str = "N/A";
pub const DATE_PLACEHOLDER: &str = "-";

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub key: String,
    pub id: String,
    pub name: String,
    pub item_type: String,
    pub created: String,
    pub modified: String,
}

/// What to show for the current payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadView {
    Table {
        heading: String,
        rows: Vec<RecordRow>,
    },
    /// A successful load that returned an empty array
    EmptyTable { heading: String },
    Raw { heading: String, pretty: String },
}

/// Plan the view for the loaded data; `None` means render nothing.
///
/// Headings name the integration the data was loaded from. Dates are
/// shown in the calendar of `tz`.
pub fn payload_view<Tz: TimeZone>(loaded: Option<&Loaded>, tz: &Tz) -> Option<PayloadView> {
    let Loaded {
        integration,
        payload,
    } = loaded?;
    let integration = *integration;

    match payload {
        Payload::Records(records) if records.is_empty() => Some(PayloadView::EmptyTable {
            heading: records_heading(0, integration),
        }),
        Payload::Records(records) => Some(PayloadView::Table {
            heading: records_heading(records.len(), integration),
            rows: record_rows(records, tz),
        }),
        Payload::Structured(value) => Some(PayloadView::Raw {
            heading: format!("Data from {}", integration),
            pretty: serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        }),
    }
}

fn records_heading(count: usize, integration: IntegrationType) -> String {
    format!("Loaded {} items from {}", count, integration)
}

/// Project records into rows with unique keys: the record id where it is
/// present and not already taken, otherwise the position.
pub fn record_rows<Tz: TimeZone>(records: &[Value], tz: &Tz) -> Vec<RecordRow> {
    let mut used_keys = HashSet::new();

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let item = IntegrationItem::from_record(record);

            let key = match &item.id {
                Some(id) if used_keys.insert(format!("id:{}", id)) => format!("id:{}", id),
                _ => format!("#{}", index),
            };

            RecordRow {
                key,
                id: text_or_placeholder(item.id),
                name: text_or_placeholder(item.name),
                item_type: text_or_placeholder(item.item_type),
                created: date_or_placeholder(item.creation_time.as_deref(), tz),
                modified: date_or_placeholder(item.last_modified_time.as_deref(), tz),
            }
        })
        .collect()
}

fn text_or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| TEXT_PLACEHOLDER.to_string())
}

fn date_or_placeholder<Tz: TimeZone>(value: Option<&str>, tz: &Tz) -> String {
    match value {
        Some(raw) => format_calendar_date(raw, tz),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// Calendar date of a timestamp, without time of day.
///
/// In the browser the date is written in the viewer's locale; elsewhere
/// as `YYYY-MM-DD`.
///
/// Timestamps with an offset are converted into `tz` first. Offset-less
/// date-times and plain dates keep the date as written. Anything else is
/// returned unchanged.
pub fn format_calendar_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(tz).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => display_date(date),
        Err(_) => raw.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn display_date(date: NaiveDate) -> String {
    use chrono::Datelike;

    // Local midnight, so the browser does not shift the day
    let local = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    local
        .to_locale_date_string("default", &js_sys::Object::new())
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn display_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    fn loaded(integration: IntegrationType, body: Value) -> Option<Loaded> {
        Payload::from_body(body).map(|payload| Loaded {
            integration,
            payload,
        })
    }

    fn view(body: Value) -> Option<PayloadView> {
        payload_view(loaded(IntegrationType::Notion, body).as_ref(), &Utc)
    }

    #[test]
    fn test_absent_payload_renders_nothing() {
        assert_eq!(payload_view(None, &Utc), None);
    }

    #[test]
    fn test_falsy_body_renders_nothing() {
        for body in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(view(body.clone()), None, "body={}", body);
        }
    }

    #[test]
    fn test_heading_names_source_integration() {
        let Some(PayloadView::Table { heading, .. }) = payload_view(
            loaded(IntegrationType::HubSpot, json!([{ "id": "7" }, { "id": "8" }])).as_ref(),
            &Utc,
        ) else {
            panic!("expected table");
        };
        assert_eq!(heading, "Loaded 2 items from HubSpot");
    }

    #[test]
    fn test_single_record_with_missing_fields() {
        let Some(PayloadView::Table { heading, rows }) = view(json!([{ "id": "1", "name": "Doc A" }]))
        else {
            panic!("expected table");
        };

        assert_eq!(heading, "Loaded 1 items from Notion");
        assert_eq!(
            rows,
            vec![RecordRow {
                key: "id:1".to_string(),
                id: "1".to_string(),
                name: "Doc A".to_string(),
                item_type: "N/A".to_string(),
                created: "-".to_string(),
                modified: "-".to_string(),
            }]
        );
    }

    #[test]
    fn test_one_row_per_record() {
        let records = json!([
            { "id": "a", "name": "First", "type": "Page", "creation_time": "2024-01-15T08:30:00Z" },
            { "name": "No id" },
            {},
            "not an object"
        ]);

        let Some(PayloadView::Table { rows, .. }) = view(records) else {
            panic!("expected table");
        };

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].item_type, "Page");
        assert_eq!(rows[0].created, "2024-01-15");
        assert_eq!(rows[0].modified, "-");
        assert_eq!(rows[1].id, TEXT_PLACEHOLDER);
        for row in &rows[2..] {
            assert_eq!(row.id, TEXT_PLACEHOLDER);
            assert_eq!(row.name, TEXT_PLACEHOLDER);
            assert_eq!(row.item_type, TEXT_PLACEHOLDER);
            assert_eq!(row.created, DATE_PLACEHOLDER);
            assert_eq!(row.modified, DATE_PLACEHOLDER);
        }
    }

    #[test]
    fn test_row_keys_unique() {
        let rows = record_rows(
            &[json!({ "id": "x" }), json!({ "id": "x" }), json!({}), json!({ "id": "#2" })],
            &Utc,
        );
        let keys: Vec<_> = rows.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["id:x", "#1", "#2", "id:#2"]);
    }

    #[test]
    fn test_empty_array_is_distinct_from_absent() {
        assert_eq!(
            view(json!([])),
            Some(PayloadView::EmptyTable {
                heading: "Loaded 0 items from Notion".to_string()
            })
        );
    }

    #[test]
    fn test_object_renders_pretty_dump() {
        let Some(PayloadView::Raw { heading, pretty }) = view(json!({ "results": [1], "ok": true }))
        else {
            panic!("expected raw dump");
        };

        assert_eq!(heading, "Data from Notion");
        assert!(pretty.contains("\n  \"results\": [\n    1\n  ]"));
    }

    #[test]
    fn test_dates_converted_to_viewer_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let los_angeles = FixedOffset::west_opt(8 * 3600).unwrap();

        assert_eq!(format_calendar_date("2024-05-31T20:00:00Z", &tokyo), "2024-06-01");
        assert_eq!(format_calendar_date("2024-05-31T20:00:00Z", &Utc), "2024-05-31");
        assert_eq!(format_calendar_date("2024-06-01T03:00:00.000Z", &los_angeles), "2024-05-31");
    }

    #[test]
    fn test_dates_without_offset_keep_written_date() {
        assert_eq!(format_calendar_date("2023-11-02T23:59:59", &Utc), "2023-11-02");
        assert_eq!(format_calendar_date("2023-11-02 23:59:59.120", &Utc), "2023-11-02");
        assert_eq!(format_calendar_date("2023-11-02", &Utc), "2023-11-02");
    }

    #[test]
    fn test_unparseable_date_shown_verbatim() {
        assert_eq!(format_calendar_date("last tuesday", &Utc), "last tuesday");
    }
}
