use i18n_tools::terms::{is_extractable_term, normalize_key, seed_terms};
use i18n_tools::TranslationMap;
use proptest::prelude::*;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seed_terms_is_idempotent() {
        let mut target = TranslationMap::new();
        let terms = ["Deploy", "Preview Deployments", "Usage"];

        let first = seed_terms(&mut target, terms);
        let snapshot = target.clone();
        let second = seed_terms(&mut target, terms);

        assert_eq!(first.added.len(), 3);
        assert!(second.added.is_empty());
        assert_eq!(second.existing, 3);
        assert_eq!(target, snapshot);
    }

    #[test]
    fn test_seed_terms_normalizes_before_lookup() {
        let mut target = TranslationMap::new();
        target.insert("Log In".to_string(), json!("登录"));

        let report = seed_terms(&mut target, ["  Log\u{a0}In  "]);

        assert!(report.added.is_empty());
        assert_eq!(report.existing, 1);
        assert_eq!(target.get("Log In"), Some(&json!("登录")));
    }

    proptest! {
        #[test]
        fn prop_seeding_never_changes_existing_values(
            existing in prop::collection::btree_map("[A-Z][a-z]{1,6}", "[a-z]{0,4}", 0..8),
            terms in prop::collection::vec("[A-Za-z ]{0,12}", 0..12),
        ) {
            let mut target: TranslationMap =
                existing.iter().map(|(k, v)| (k.clone(), json!(v))).collect();

            seed_terms(&mut target, &terms);

            for (key, value) in &existing {
                prop_assert_eq!(target.get(key), Some(&json!(value)));
            }
        }

        #[test]
        fn prop_normalize_key_is_stable(text in "\\PC{0,20}") {
            let once = normalize_key(&text);
            prop_assert_eq!(normalize_key(&once), once.clone());
            prop_assert_eq!(is_extractable_term(&text), is_extractable_term(&once));
        }
    }
}
