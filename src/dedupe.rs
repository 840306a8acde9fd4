use crate::locale_file::writer::{write_json, JsonStyle};
use crate::locale_file::{reader, RawPairs, TranslationMap};
use crate::LocaleError;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Drop repeated keys, keeping the last occurrence of each.
///
/// Pairs are scanned from the end; a pair survives if its key was not seen
/// yet in that backward walk. Pairs whose key is not a string are dropped.
/// The survivors come back in their original relative order.
pub fn dedupe_pairs_keep_last<I>(pairs: I) -> Vec<(String, Value)>
where
    I: IntoIterator<Item = (Value, Value)>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut seen = HashSet::new();
    let mut kept: Vec<(String, Value)> = pairs
        .into_iter()
        .rev()
        .filter_map(|(key, value)| match key {
            Value::String(key) => Some((key, value)),
            other => {
                debug!("Dropping pair with non-string key {other}");
                None
            },
        })
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect();
    kept.reverse();
    kept
}

/// Build the canonical object from already deduplicated pairs
pub fn canonical_object(pairs: Vec<(String, Value)>) -> TranslationMap {
    pairs.into_iter().collect()
}

/// Remove duplicate keys from the JSON object stored at `path`.
///
/// Returns `true` when duplicates were found and the file was rewritten in
/// canonical form, `false` when the file was left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The file is not valid JSON or its root is not an object
/// - Writing the canonical object fails
pub fn dedupe_json_object_inplace<P: AsRef<Path>>(path: P) -> Result<bool, LocaleError> {
    let path_ref = path.as_ref();

    let pairs: RawPairs = reader::read_raw_pairs(path_ref)?;
    let original_len = pairs.len();

    let deduped = dedupe_pairs_keep_last(pairs.into_inner());
    let changed = deduped.len() != original_len;
    debug!("{} of {} pairs kept in {}", deduped.len(), original_len, path_ref.display());

    if changed {
        info!(
            "Removed {} duplicate pair(s) from {}",
            original_len - deduped.len(),
            path_ref.display()
        );
        write_json(path_ref, &canonical_object(deduped), JsonStyle::Canonical)?;
    }

    Ok(changed)
}
