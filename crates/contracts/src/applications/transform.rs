use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use super::record::ApplicationRecord;

/// Paths probed for the record array, in priority order. The first path
/// that resolves to an array wins; none matching yields an empty list.
const ARRAY_PATHS: &[&[&str]] = &[
    &[],
    &["data"],
    &["data", "data"],
    &["data", "list"],
    &["data", "results"],
    &["list"],
    &["results"],
];

/// Candidate source-field names per canonical field. Deployments disagree
/// on spelling; the first present, non-empty candidate wins.
const APPLICATION_NO_FIELDS: &[&str] = &[
    "applicationNo",
    "application_no",
    "applicationNumber",
    "application_number",
    "appNo",
    "app_no",
    "num",
    "number",
];
const PRO_FIELDS: &[&str] = &["pro", "proName", "pro_name", "withPro", "executive"];
const CAMPUS_FIELDS: &[&str] = &["campus", "campusName", "campus_name", "branch"];
const DGM_FIELDS: &[&str] = &["dgm", "dgmName", "dgm_name"];
const ZONE_FIELDS: &[&str] = &["zone", "zoneName", "zone_name", "region"];
const STATUS_FIELDS: &[&str] = &[
    "status",
    "applicationStatus",
    "application_status",
    "currentStatus",
    "state",
];
const DATE_FIELDS: &[&str] = &[
    "date",
    "applicationDate",
    "application_date",
    "appliedDate",
    "applied_date",
    "createdAt",
    "created_at",
    "entryDate",
];

/// Normalize a raw backend payload into application records.
///
/// Total over arbitrary JSON: an unrecognized shape is an empty result,
/// not an error. Items whose application number trims to empty are
/// dropped; input order is preserved and duplicates are kept.
pub fn extract_records(payload: &Value) -> Vec<ApplicationRecord> {
    let Some(items) = locate_array(payload) else {
        return Vec::new();
    };
    items.iter().filter_map(to_record).collect()
}

fn locate_array(payload: &Value) -> Option<&Vec<Value>> {
    for path in ARRAY_PATHS {
        let mut node = Some(payload);
        for segment in *path {
            node = node.and_then(|value| value.get(segment));
        }
        if let Some(Value::Array(items)) = node {
            return Some(items);
        }
    }
    None
}

fn to_record(item: &Value) -> Option<ApplicationRecord> {
    let application_no = string_field(item, APPLICATION_NO_FIELDS);
    if application_no.is_empty() {
        return None;
    }
    Some(ApplicationRecord {
        application_no,
        pro: string_field(item, PRO_FIELDS),
        campus: string_field(item, CAMPUS_FIELDS),
        dgm: string_field(item, DGM_FIELDS),
        zone: string_field(item, ZONE_FIELDS),
        date: date_field(item, DATE_FIELDS),
        status: string_field(item, STATUS_FIELDS),
        is_selected: false,
    })
}

/// First present, non-empty candidate; numbers are accepted for key-like
/// fields some backends send unquoted
fn string_field(item: &Value, candidates: &[&str]) -> String {
    for name in candidates {
        match item.get(*name) {
            Some(Value::String(text)) if !text.trim().is_empty() => {
                return text.trim().to_string();
            }
            Some(Value::Number(number)) => return number.to_string(),
            _ => {}
        }
    }
    String::new()
}

/// First candidate that parses; none parsing defaults to "now" so the
/// record still sorts and displays
fn date_field(item: &Value, candidates: &[&str]) -> DateTime<Utc> {
    for name in candidates {
        if let Some(parsed) = item.get(*name).and_then(parse_date_value) {
            return parsed;
        }
    }
    Utc::now()
}

fn parse_date_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_date_str(text.trim()),
        Value::Number(number) => number.as_i64().and_then(parse_epoch),
        _ => None,
    }
}

fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&datetime));
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|datetime| Utc.from_utc_datetime(&datetime));
        }
    }
    None
}

fn parse_epoch(value: i64) -> Option<DateTime<Utc>> {
    // Values this large can only be milliseconds
    if value > 20_000_000_000 {
        Utc.timestamp_millis_opt(value).single()
    } else {
        Utc.timestamp_opt(value, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_array() {
        let payload = json!([
            {"applicationNo": "A1", "campus": "North", "status": "Sold"},
            {"applicationNo": "A2", "campus": "South", "status": "With PRO"},
        ]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].application_no, "A1");
        assert_eq!(records[1].campus, "South");
    }

    #[test]
    fn test_nested_payload_shapes() {
        for payload in [
            json!({"data": [{"applicationNo": "A1"}]}),
            json!({"data": {"data": [{"applicationNo": "A1"}]}}),
            json!({"data": {"list": [{"applicationNo": "A1"}]}}),
            json!({"data": {"results": [{"applicationNo": "A1"}]}}),
            json!({"list": [{"applicationNo": "A1"}]}),
            json!({"results": [{"applicationNo": "A1"}]}),
        ] {
            let records = extract_records(&payload);
            assert_eq!(records.len(), 1, "payload: {}", payload);
            assert_eq!(records[0].application_no, "A1");
        }
    }

    #[test]
    fn test_unrecognized_shapes_yield_empty() {
        for payload in [
            json!({"rows": [{"applicationNo": "A1"}]}),
            json!({"data": {"items": []}}),
            json!("just a string"),
            json!(42),
            json!(null),
            json!({}),
        ] {
            assert!(extract_records(&payload).is_empty(), "payload: {}", payload);
        }
    }

    #[test]
    fn test_field_name_variants() {
        let payload = json!([
            {"application_no": "A1", "campus_name": "North", "pro_name": "Ravi", "applicationStatus": "Sold"},
            {"num": "A2", "branch": "South", "region": "Zone 4", "state": "Damaged"},
            {"appNo": 12345, "dgmName": "Priya"},
        ]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].campus, "North");
        assert_eq!(records[0].pro, "Ravi");
        assert_eq!(records[0].status, "Sold");
        assert_eq!(records[1].application_no, "A2");
        assert_eq!(records[1].zone, "Zone 4");
        assert_eq!(records[2].application_no, "12345");
        assert_eq!(records[2].dgm, "Priya");
    }

    #[test]
    fn test_records_without_application_no_are_dropped() {
        let payload = json!([
            {"applicationNo": "A1"},
            {"applicationNo": "   "},
            {"campus": "North"},
            {"applicationNo": "A2"},
        ]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].application_no, "A1");
        assert_eq!(records[1].application_no, "A2");
    }

    #[test]
    fn test_duplicates_are_preserved_in_order() {
        let payload = json!([
            {"applicationNo": "A1", "campus": "North"},
            {"applicationNo": "A1", "campus": "South"},
        ]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].campus, "North");
        assert_eq!(records[1].campus, "South");
    }

    #[test]
    fn test_date_candidates_and_formats() {
        let payload = json!([
            {"applicationNo": "A1", "date": "2024-03-15T10:30:00Z"},
            {"applicationNo": "A2", "appliedDate": "2024-03-15"},
            {"applicationNo": "A3", "created_at": "15/03/2024"},
            {"applicationNo": "A4", "entryDate": 1710499800},
        ]);
        let records = extract_records(&payload);
        for record in &records {
            assert_eq!(record.date.format("%Y-%m-%d").to_string(), "2024-03-15");
        }
    }

    #[test]
    fn test_unparsable_dates_default_to_now() {
        let before = Utc::now();
        let payload = json!([{"applicationNo": "A1", "date": "not a date"}]);
        let records = extract_records(&payload);
        assert!(records[0].date >= before);
    }

    #[test]
    fn test_malformed_items_never_panic() {
        let payload = json!([
            null,
            42,
            "text",
            [],
            {"applicationNo": {"nested": true}},
            {"applicationNo": "A1", "date": {"bad": "shape"}, "campus": null},
        ]);
        let records = extract_records(&payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].application_no, "A1");
        assert_eq!(records[0].campus, "");
    }
}
