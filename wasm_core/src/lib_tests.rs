use super::*;
use approx::assert_relative_eq;
use serde_json::Value;

fn options() -> ToolboxOptions {
    ToolboxOptions::default()
}

#[test]
fn unit_sheet_lists_every_length_unit_in_table_order() {
    let sheet = unit_sheet("length", "1", "Meters", &options()).expect("sheet ok");
    let units: Vec<&str> = sheet.keys().map(String::as_str).collect();
    assert_eq!(units.first(), Some(&"Meters"));
    assert_eq!(sheet["Meters"], "1.000000");
    assert_eq!(sheet["Centimeters"], "100.000000");
    assert_eq!(sheet["Feet"], "3.280840");
}

#[test]
fn unit_sheet_uses_temperature_precision() {
    let sheet = unit_sheet("Temperature", "100", "Celsius", &options()).expect("sheet ok");
    assert_eq!(sheet["Fahrenheit"], "212.0000");
    assert_eq!(sheet["Kelvin"], "373.1500");

    let custom = ToolboxOptions::from_json(r#"{"temperaturePrecision":1}"#).unwrap();
    let sheet = unit_sheet("temperature", "0", "Celsius", &custom).unwrap();
    assert_eq!(sheet["Fahrenheit"], "32.0");
}

#[test]
fn unit_sheet_rejects_bad_input() {
    let err = unit_sheet("length", "abc", "Meters", &options()).unwrap_err();
    assert!(matches!(err, ToolError::Validation(_)), "{err}");
    let err = unit_sheet("volume", "1", "Liters", &options()).unwrap_err();
    assert!(matches!(err, ToolError::UnknownCategory(_)), "{err}");
    let err = unit_sheet("length", "1", "Kelvin", &options()).unwrap_err();
    assert!(matches!(err, ToolError::UnknownUnit { .. }), "{err}");
}

#[test]
fn storage_sheet_is_binary() {
    let sheet = unit_sheet("storage", "1", "Terabytes", &options()).unwrap();
    assert_eq!(sheet["Gigabytes"], "1024.000000");
    let bytes = units::convert_named("storage", 1.0, "Kilobytes", "Bytes").unwrap();
    assert_relative_eq!(bytes, 1024.0);
}

#[test]
fn unit_sheet_fails_whole_when_a_unit_overflows() {
    let err = unit_sheet("storage", "1e300", "Terabytes", &options()).unwrap_err();
    assert!(matches!(err, ToolError::Validation(_)), "{err}");
    let err = unit_sheet("length", "1e308", "Kilometers", &options()).unwrap_err();
    assert!(matches!(err, ToolError::Validation(_)), "{err}");
}

#[test]
fn uuid_batch_honours_version_and_count() {
    let ids = uuid_batch("v7", 5).expect("uuids ok");
    assert_eq!(ids.len(), 5);
    assert!(ids.iter().all(|id| id.as_bytes()[14] == b'7'), "{ids:?}");
    assert!(uuid_batch("v4", 0).is_err());
    assert!(uuid_batch("v4", 101).is_err());
    assert!(uuid_batch("v9", 1).is_err());
}

#[test]
fn yaml_document_converts_to_json_then_xml() {
    let json = convert::convert_formats("YAML", "JSON", "name: John\nage: 30", &options())
        .expect("yaml -> json");
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"name": "John", "age": 30}));

    let xml = convert::convert_formats("json", "xml", &json, &options()).expect("json -> xml");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<name>John</name>"), "{xml}");
    assert!(xml.contains("<age>30</age>"), "{xml}");
}

#[test]
fn xml_root_name_comes_from_options() {
    let custom = ToolboxOptions::from_json(r#"{"xmlRoot":"config"}"#).unwrap();
    let xml = convert::convert_formats("json", "xml", r#"{"a":1}"#, &custom).unwrap();
    assert!(xml.contains("<config>"), "{xml}");
    assert!(xml.trim_end().ends_with("</config>"), "{xml}");
}

#[test]
fn history_record_truncates_preview_to_configured_limit() {
    let custom = ToolboxOptions::from_json(r#"{"previewLimit":11}"#).unwrap();
    let entry = history_record("user-1", "json-converter", Some("JSON → YAML and more"), &custom)
        .expect("entry ok");
    assert_eq!(entry.input_preview.as_deref(), Some("JSON → YAML"));
    assert_eq!(entry.tool_id, "json-converter");
}

#[test]
fn history_record_accepts_tools_outside_the_catalog() {
    let entry = history_record("user-1", "ai-summarizer", None, &options()).unwrap();
    assert_eq!(entry.input_preview, None);
    assert!(history_record("", "unit-converter", None, &options()).is_err());
}

#[test]
fn history_previews_match_recorded_text() {
    assert_eq!(unit_history_preview("5", "Miles", "Kilometers"), "5 Miles to Kilometers");
    assert_eq!(
        catalog::format_preview("yaml".parse().unwrap(), "xml".parse().unwrap()),
        "YAML → XML"
    );
}

#[test]
fn jwt_and_base64_share_the_validation_error() {
    let err = jwt::decode("only.two", 0).unwrap_err();
    assert!(matches!(err, ToolError::Validation(_)));
    let err = encoding::base64_decode("***").unwrap_err();
    assert!(matches!(err, ToolError::Validation(_)));
}

#[test]
fn gpa_semesters_deserialize_from_ui_shape() {
    let semesters: Vec<gpa::Semester> = serde_json::from_value(serde_json::json!([
        {"name": "Fall", "courses": [
            {"name": "Algebra", "credits": 3, "grade": "A"},
            {"credits": 1, "grade": "F"}
        ]}
    ]))
    .expect("semesters decode");
    let summary = gpa::summarize(&semesters);
    assert_eq!(summary.cumulative, "3.00");
    assert_relative_eq!(summary.total_credits, 4.0);
}
