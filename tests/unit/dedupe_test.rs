use crate::fixtures::LocaleFixture;
use i18n_tools::{dedupe_json_object_inplace, dedupe_pairs_keep_last, LocaleError};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};

fn raw_pairs() -> impl Strategy<Value = Vec<(Value, Value)>> {
    prop::collection::vec(
        (
            prop_oneof![
                4 => "[a-d]".prop_map(Value::String),
                1 => any::<i32>().prop_map(|n| json!(n)),
            ],
            "[a-z]{0,3}".prop_map(Value::String),
        ),
        0..16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dedupe_documented_example() {
        let deduped = dedupe_pairs_keep_last(vec![
            (json!("x"), json!("1")),
            (json!("y"), json!("2")),
            (json!("x"), json!("3")),
        ]);

        let object: serde_json::Map<String, Value> = deduped.into_iter().collect();
        assert_eq!(Value::Object(object), json!({"x": "3", "y": "2"}));
    }

    #[test]
    fn test_dedupe_file_is_idempotent() {
        let fixture = LocaleFixture::new().unwrap();
        fixture.with_target(r#"{"a": "1", "b": {"c": [1, 2]}, "a": "2"}"#).unwrap();

        assert!(dedupe_json_object_inplace(fixture.target_path()).unwrap());
        let first = fixture.read_target();

        assert!(!dedupe_json_object_inplace(fixture.target_path()).unwrap());
        assert_eq!(fixture.read_target(), first);
        assert_eq!(
            first,
            "{\n    \"b\": {\n        \"c\": [\n            1,\n            2\n        ]\n    },\n    \"a\": \"2\"\n}\n"
        );
    }

    #[test]
    fn test_dedupe_file_keeps_non_ascii_literal() {
        let fixture = LocaleFixture::new().unwrap();
        fixture.with_target(r#"{"Deploy": "部署", "Deploy": "发布"}"#).unwrap();

        assert!(dedupe_json_object_inplace(fixture.target_path()).unwrap());
        assert_eq!(fixture.read_target(), "{\n    \"Deploy\": \"发布\"\n}\n");
    }

    #[test]
    fn test_dedupe_file_invalid_json() {
        let fixture = LocaleFixture::new().unwrap();
        fixture.with_target("{\"a\": ").unwrap();

        let err = dedupe_json_object_inplace(fixture.target_path()).unwrap_err();
        assert!(matches!(err, LocaleError::MalformedInput { .. }));
    }

    proptest! {
        #[test]
        fn prop_one_pair_per_string_key_with_last_value(pairs in raw_pairs()) {
            let mut last: HashMap<String, Value> = HashMap::new();
            for (key, value) in &pairs {
                if let Value::String(key) = key {
                    last.insert(key.clone(), value.clone());
                }
            }

            let deduped = dedupe_pairs_keep_last(pairs);

            prop_assert_eq!(deduped.len(), last.len());
            let keys: HashSet<&String> = deduped.iter().map(|(k, _)| k).collect();
            prop_assert_eq!(keys.len(), deduped.len());
            for (key, value) in &deduped {
                prop_assert_eq!(last.get(key), Some(value));
            }
        }

        #[test]
        fn prop_dedupe_is_idempotent(pairs in raw_pairs()) {
            let once = dedupe_pairs_keep_last(pairs);
            let again = dedupe_pairs_keep_last(
                once.iter().map(|(k, v)| (Value::String(k.clone()), v.clone())).collect::<Vec<_>>(),
            );
            prop_assert_eq!(again, once);
        }

        #[test]
        fn prop_non_string_keys_never_retained(pairs in raw_pairs()) {
            let string_keys: HashSet<String> = pairs
                .iter()
                .filter_map(|(k, _)| k.as_str().map(str::to_string))
                .collect();

            let deduped = dedupe_pairs_keep_last(pairs);

            for (key, _) in &deduped {
                prop_assert!(string_keys.contains(key));
            }
        }
    }
}
