//! Property tests: determinism and structural round-trips

use proptest::prelude::*;
use serde_json::{Map, Value};
use yaml2json::Converter;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "s[a-z0-9 ]{0,9}[a-z0-9]".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("k[a-z_]{0,7}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #[test]
    fn conversion_is_deterministic(value in json_value()) {
        let yaml = serde_yaml::to_string(&value).unwrap();
        let converter = Converter::default();
        let first = converter.convert_bytes(yaml.as_bytes()).unwrap();
        let second = converter.convert_bytes(yaml.as_bytes()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_parses_back_to_input_structure(value in json_value()) {
        let yaml = serde_yaml::to_string(&value).unwrap();
        let out = Converter::default().convert_bytes(yaml.as_bytes()).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn indented_output_matches_compact_form(value in json_value()) {
        let yaml = serde_yaml::to_string(&value).unwrap();
        let compact = yaml2json::convert::yaml_to_json(yaml.as_bytes()).unwrap();
        let out = Converter::default().convert_bytes(yaml.as_bytes()).unwrap();
        let reparsed: Value = serde_json::from_slice(&out).unwrap();
        prop_assert_eq!(serde_json::to_vec(&reparsed).unwrap(), compact);
    }
}
