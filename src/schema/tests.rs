//! Schema inference tests

use super::*;
use crate::types::{Sample, Scalar};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use test_case::test_case;

fn string(s: &str) -> Scalar {
    Scalar::String(s.to_string())
}

fn synthesize(name: &str, value: serde_json::Value) -> serde_json::Value {
    Synthesizer::default()
        .synthesize(name, &Sample::from(value))
        .to_json()
}

// ============================================================================
// Classifier Tests
// ============================================================================

#[test]
fn test_classify_booleans() {
    let classifier = Classifier::new();
    assert_eq!(classifier.classify("active", &Scalar::Bool(true)), TypeTag::Boolean);
    assert_eq!(classifier.classify("active", &Scalar::Bool(false)), TypeTag::Boolean);
}

#[test]
fn test_classify_native_numbers() {
    let classifier = Classifier::new();
    assert_eq!(classifier.classify("id", &Scalar::Number(42.into())), TypeTag::Number);

    let float = serde_json::Number::from_f64(2.5).unwrap();
    assert_eq!(classifier.classify("ratio", &Scalar::Number(float)), TypeTag::Number);
}

#[test_case("42" ; "integer")]
#[test_case("19.99" ; "decimal")]
#[test_case("-7" ; "negative")]
#[test_case(" 42 " ; "padded")]
#[test_case(".5" ; "leading dot")]
#[test_case("5." ; "trailing dot")]
#[test_case("1e3" ; "exponent")]
#[test_case("0x1F" ; "hex")]
#[test_case("0b101" ; "binary")]
#[test_case("Infinity" ; "infinity")]
#[test_case("2023" ; "year is still a number")]
#[test_case("20230115" ; "compact date is still a number")]
fn test_classify_numeric_strings(s: &str) {
    assert_eq!(Classifier::new().classify("value", &string(s)), TypeTag::Number);
}

#[test_case("2023-01-15" ; "date")]
#[test_case("2023-01-15T10:00:00Z" ; "date time")]
#[test_case("2024-01-15 10:30:00" ; "space separated")]
fn test_classify_dates(s: &str) {
    assert_eq!(Classifier::new().classify("created_at", &string(s)), TypeTag::DateTime);
}

#[test_case("hello" ; "word")]
#[test_case("" ; "empty")]
#[test_case("   " ; "blank")]
#[test_case("NaN" ; "nan")]
#[test_case("12 apples" ; "leading digits")]
#[test_case("1,000" ; "thousands separator")]
#[test_case("Boolean" ; "tag literal with wrong case")]
fn test_classify_strings(s: &str) {
    assert_eq!(Classifier::new().classify("value", &string(s)), TypeTag::String);
}

#[test]
fn test_classify_null_is_string() {
    assert_eq!(Classifier::new().classify("deleted_at", &Scalar::Null), TypeTag::String);
}

#[test]
fn test_coerces_to_number() {
    assert!(coerces_to_number("+1.5e-3"));
    assert!(coerces_to_number("-Infinity"));
    assert!(coerces_to_number("0o17"));
    assert!(!coerces_to_number("0x"));
    assert!(!coerces_to_number("inf"));
    assert!(!coerces_to_number("1.2.3"));
    assert!(!coerces_to_number("-"));
}

#[test]
fn test_price_heuristic() {
    let classifier = Classifier::new().with_numeric_mode(NumericMode::PriceHeuristic);

    assert_eq!(classifier.classify("quantity", &Scalar::Number(3.into())), TypeTag::Integer);
    assert_eq!(classifier.classify("unit_price", &Scalar::Number(3.into())), TypeTag::Number);
    assert_eq!(classifier.classify("Total", &string("19.99")), TypeTag::Number);
    assert_eq!(classifier.classify("id", &string("42")), TypeTag::Integer);

    // Non-numeric values are unaffected
    assert_eq!(classifier.classify("price_note", &string("free")), TypeTag::String);
}

#[test]
fn test_price_heuristic_custom_keys() {
    let classifier = Classifier::new()
        .with_numeric_mode(NumericMode::PriceHeuristic)
        .with_monetary_keys(["Cents"]);

    assert!(classifier.is_monetary_key("amount_in_cents"));
    assert!(!classifier.is_monetary_key("price"));
    assert_eq!(classifier.classify("price", &Scalar::Number(1.into())), TypeTag::Integer);
}

#[test]
fn test_date_detection_modes() {
    let off = Classifier::new().with_date_detection(DateDetection::Off);
    assert_eq!(off.classify("created_at", &string("2023-01-15")), TypeTag::String);

    let strict = Classifier::new().with_date_detection(DateDetection::Strict);
    assert_eq!(strict.classify("created_at", &string("Jan 15 2023")), TypeTag::String);
    assert_eq!(strict.classify("created_at", &string("2023-01-15")), TypeTag::DateTime);
}

#[derive(Debug)]
struct AlwaysDate;

impl DateDetector for AlwaysDate {
    fn looks_like_date(&self, _s: &str) -> bool {
        true
    }
}

#[test]
fn test_custom_date_detector_keeps_priority() {
    let classifier = Classifier::new().with_date_detector(Arc::new(AlwaysDate));

    assert_eq!(classifier.classify("x", &string("anything")), TypeTag::DateTime);
    // Numbers and booleans are decided before the date detector runs
    assert_eq!(classifier.classify("x", &string("12")), TypeTag::Number);
    assert_eq!(classifier.classify("x", &Scalar::Bool(true)), TypeTag::Boolean);
}

// ============================================================================
// Type Tag Tests
// ============================================================================

#[test]
fn test_type_tag_literals() {
    for tag in TypeTag::ALL {
        assert_eq!(TypeTag::from_literal(tag.as_str()), Some(tag));
    }
    assert_eq!(TypeTag::from_literal("date"), None);
    assert_eq!(TypeTag::from_literal("bool"), None);
    assert_eq!(TypeTag::from_literal(""), None);
    assert_eq!(TypeTag::DateTime.to_string(), "date-time");
}

// ============================================================================
// Fragment Tests
// ============================================================================

#[test]
fn test_fragment_serialization() {
    assert_eq!(
        SchemaFragment::scalar(TypeTag::Integer).to_json(),
        json!({"type": ["null", "integer"]})
    );
    assert_eq!(
        SchemaFragment::scalar(TypeTag::DateTime).to_json(),
        json!({"type": ["null", "string"], "format": "date-time"})
    );
    assert_eq!(
        SchemaFragment::empty_object().to_json(),
        json!({"type": ["null", "object"], "properties": {}})
    );
}

#[test]
fn test_fragment_pretty_rendering() {
    let rendered = SchemaFragment::scalar(TypeTag::Boolean).to_json_pretty();
    assert_eq!(
        rendered,
        "{\n  \"type\": [\n    \"null\",\n    \"boolean\"\n  ]\n}"
    );
}

#[test]
fn test_fragment_deserialize_single_type() {
    let fragment: SchemaFragment = serde_json::from_value(json!({"type": "boolean"})).unwrap();
    assert_eq!(fragment.primary_type(), JsonType::Boolean);
    assert_eq!(fragment.json_type.types(), vec![JsonType::Null, JsonType::Boolean]);
}

#[test]
fn test_fragment_type_tag() {
    for tag in TypeTag::ALL {
        assert_eq!(SchemaFragment::scalar(tag).type_tag(), Some(tag));
    }
    assert_eq!(SchemaFragment::empty_object().type_tag(), None);
}

// ============================================================================
// Synthesizer Tests
// ============================================================================

#[test]
fn test_synthesize_nested_order() {
    let schema = synthesize(
        "order",
        json!({
            "id": 1,
            "total": "19.99",
            "placed_at": "2023-01-15",
            "tags": ["a", "b"]
        }),
    );

    assert_eq!(
        schema,
        json!({
            "type": ["null", "object"],
            "properties": {
                "id": {"type": ["null", "number"]},
                "total": {"type": ["null", "number"]},
                "placed_at": {"type": ["null", "string"], "format": "date-time"},
                "tags": {
                    "type": ["null", "array"],
                    "items": {"type": ["null", "string"]}
                }
            }
        })
    );
}

#[test]
fn test_synthesize_array_of_objects() {
    let schema = synthesize("orders", json!([{"id": 1, "name": "x"}]));

    assert_eq!(
        schema,
        json!({
            "type": ["null", "array"],
            "items": {
                "type": ["null", "object"],
                "properties": {
                    "id": {"type": ["null", "number"]},
                    "name": {"type": ["null", "string"]}
                }
            }
        })
    );
}

#[test]
fn test_synthesize_uses_first_element_only() {
    let schema = synthesize("orders", json!([{"id": 1}, {"id": "x", "extra": true}]));

    assert_eq!(
        schema["items"]["properties"],
        json!({"id": {"type": ["null", "number"]}})
    );
}

#[test]
fn test_synthesize_empty_array() {
    assert_eq!(
        synthesize("empty", json!([])),
        json!({
            "type": ["null", "array"],
            "items": {"type": ["null", "object"], "properties": {}}
        })
    );
}

#[test]
fn test_synthesize_empty_array_property() {
    let schema = synthesize("account", json!({"addresses": []}));
    assert_eq!(
        schema["properties"]["addresses"]["items"],
        json!({"type": ["null", "object"], "properties": {}})
    );
}

#[test]
fn test_synthesize_declared_types() {
    let schema = synthesize(
        "x",
        json!({
            "flag": "boolean",
            "count": "integer",
            "seen_at": "date-time",
            "label": "string",
            "almost": "bool"
        }),
    );

    assert_eq!(
        schema["properties"],
        json!({
            "flag": {"type": ["null", "boolean"]},
            "count": {"type": ["null", "integer"]},
            "seen_at": {"type": ["null", "string"], "format": "date-time"},
            "label": {"type": ["null", "string"]},
            "almost": {"type": ["null", "string"]}
        })
    );
}

#[test]
fn test_top_level_tag_literal_is_classified() {
    assert_eq!(
        synthesize("x", json!("boolean")),
        json!({"type": ["null", "string"]})
    );
}

#[test]
fn test_synthesize_scalars() {
    assert_eq!(synthesize("s", json!(true)), json!({"type": ["null", "boolean"]}));
    assert_eq!(synthesize("s", json!(null)), json!({"type": ["null", "string"]}));
    assert_eq!(
        synthesize("s", json!("2023-01-15T10:00:00Z")),
        json!({"type": ["null", "string"], "format": "date-time"})
    );
}

#[test]
fn test_synthesize_null_property() {
    let schema = synthesize("account", json!({"closed_at": null}));
    assert_eq!(
        schema["properties"]["closed_at"],
        json!({"type": ["null", "string"]})
    );
}

#[test]
fn test_synthesize_nested_arrays() {
    let schema = synthesize("matrix", json!({"rows": [[1, 2], [3]]}));
    assert_eq!(
        schema["properties"]["rows"],
        json!({
            "type": ["null", "array"],
            "items": {
                "type": ["null", "array"],
                "items": {"type": ["null", "number"]}
            }
        })
    );
}

#[test]
fn test_synthesize_is_idempotent() {
    let sample = Sample::from(json!({
        "account": {"code": "abc", "balance": 10.5},
        "line_items": [{"sku": "x", "quantity": 2}]
    }));
    let synthesizer = Synthesizer::default();

    let first = synthesizer.synthesize("invoice", &sample);
    let second = synthesizer.synthesize("invoice", &sample);
    assert_eq!(first, second);
}

#[test]
fn test_synthesize_price_heuristic_through_arrays() {
    let classifier = Classifier::new().with_numeric_mode(NumericMode::PriceHeuristic);
    let synthesizer = Synthesizer::new(classifier);

    let schema = synthesizer
        .synthesize(
            "plan",
            &Sample::from(json!({"setup_fee": 5, "trial_days": 14, "prices": [9.99]})),
        )
        .to_json();

    assert_eq!(schema["properties"]["setup_fee"]["type"], json!(["null", "number"]));
    assert_eq!(schema["properties"]["trial_days"]["type"], json!(["null", "integer"]));
    assert_eq!(
        schema["properties"]["prices"]["items"]["type"],
        json!(["null", "number"])
    );

    // The schema name is never a classification hint
    let top = synthesizer.synthesize("price", &Sample::from(json!(3)));
    assert_eq!(top.type_tag(), Some(TypeTag::Integer));
}

#[test]
fn test_synthesize_max_depth() {
    let synthesizer = Synthesizer::default().with_max_depth(2);
    let schema = synthesizer.synthesize("deep", &Sample::from(json!({"a": {"b": {"c": 1}}})));

    let a = schema.property("a").unwrap();
    assert_eq!(a.primary_type(), JsonType::Object);
    assert_eq!(a.property("b"), Some(&SchemaFragment::empty_object()));
}

#[test]
fn test_max_depth_still_classifies_scalars() {
    let synthesizer = Synthesizer::default().with_max_depth(2);
    let schema = synthesizer.synthesize(
        "leaves",
        &Sample::from(json!({"a": {"n": 1, "s": "x", "list": [1], "flag": "boolean"}})),
    );

    let a = schema.property("a").unwrap();
    assert_eq!(a.property("n").unwrap().to_json(), json!({"type": ["null", "number"]}));
    assert_eq!(a.property("s").unwrap().to_json(), json!({"type": ["null", "string"]}));
    assert_eq!(a.property("flag").unwrap().type_tag(), Some(TypeTag::Boolean));
    assert_eq!(a.property("list"), Some(&SchemaFragment::empty_object()));
}

#[test]
fn test_infer_schema_convenience() {
    let schema = infer_schema("accounts", &json!([{"code": "a1"}]));
    let item = schema.item_schema().unwrap();
    assert_eq!(
        item.property("code").and_then(SchemaFragment::type_tag),
        Some(TypeTag::String)
    );
}

#[test]
fn test_synthesize_from_mapping_sample() {
    // Samples built by hand, without going through serde_json
    let sample = Sample::Mapping(vec![
        ("code".to_string(), Sample::string("abc")),
        ("tags".to_string(), Sample::Sequence(vec![])),
    ]);
    let schema = Synthesizer::default().synthesize("account", &sample);

    assert_eq!(schema.property("code").unwrap().type_tag(), Some(TypeTag::String));
    assert_eq!(
        schema.property("tags").unwrap().item_schema(),
        Some(&SchemaFragment::empty_object())
    );
}
