use crate::locale_file::writer::{write_json, JsonStyle};
use crate::locale_file::{is_empty_translation, reader, TranslationMap};
use crate::LocaleError;
use std::path::Path;
use tracing::{debug, info};

/// Outcome of merging a source file into a target locale file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries whose empty target value was replaced by a source translation
    pub filled: usize,
    /// Keys present only in the source and added to the target
    pub inserted: usize,
    /// Garbage keys removed after merging
    pub removed_keys: Vec<String>,
}

impl MergeReport {
    /// Number of entries changed by the merge, filled and inserted together
    pub const fn updated_count(&self) -> usize {
        self.filled + self.inserted
    }
}

/// Fill empty entries of `target` from `source` and add keys missing from `target`.
///
/// Populated target values are never overwritten, and an empty source value
/// never clears anything. Source order decides where new keys are appended.
pub fn merge_translations(target: &mut TranslationMap, source: &TranslationMap) -> MergeReport {
    let mut report = MergeReport::default();

    for (key, value) in source {
        match target.get_mut(key) {
            Some(existing) => {
                if is_empty_translation(existing) && !is_empty_translation(value) {
                    debug!("Filling empty translation for {key:?}");
                    *existing = value.clone();
                    report.filled += 1;
                }
            },
            None => {
                debug!("Adding missing key {key:?}");
                target.insert(key.clone(), value.clone());
                report.inserted += 1;
            },
        }
    }

    report
}

/// Remove each of `keys` from `target`, returning the ones that were present
pub fn strip_garbage_keys<S: AsRef<str>>(target: &mut TranslationMap, keys: &[S]) -> Vec<String> {
    keys.iter()
        .map(|key| key.as_ref())
        // shift_remove keeps the remaining keys in file order
        .filter(|key| target.shift_remove(*key).is_some())
        .map(str::to_string)
        .collect()
}

/// Merge `source` into `target` on disk and rewrite `target`.
///
/// The target is only written once both files were read and merged in memory.
///
/// # Errors
///
/// Returns an error if:
/// - Either file does not exist
/// - Either file is not a valid JSON object
/// - Writing the merged target fails
pub fn merge_translation_files<P, Q, S>(
    target: P,
    source: Q,
    garbage_keys: &[S],
) -> Result<MergeReport, LocaleError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<str>,
{
    let target_path = target.as_ref();
    let source_path = source.as_ref();

    reader::require_exists(target_path)?;
    reader::require_exists(source_path)?;

    let mut target_map = reader::read_translation_map(target_path)?;
    let source_map = reader::read_translation_map(source_path)?;
    debug!(
        "Merging {} source entries into {} target entries",
        source_map.len(),
        target_map.len()
    );

    let mut report = merge_translations(&mut target_map, &source_map);
    report.removed_keys = strip_garbage_keys(&mut target_map, garbage_keys);
    if !report.removed_keys.is_empty() {
        info!("Removed garbage keys: {}", report.removed_keys.join(", "));
    }

    write_json(target_path, &target_map, JsonStyle::Translation)?;
    info!(
        "Merged {} into {} ({} filled, {} inserted)",
        source_path.display(),
        target_path.display(),
        report.filled,
        report.inserted
    );

    Ok(report)
}
