use super::{RawPairs, TranslationMap};
use crate::LocaleError;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a locale file whose root must be a JSON object
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file is not UTF-8 or not valid JSON, or its root is not an object
/// - Any other I/O failure occurs while reading
pub fn read_translation_map<P: AsRef<Path>>(path: P) -> Result<TranslationMap, LocaleError> {
    read_json(path.as_ref())
}

/// Read the root object of a JSON file as raw pairs, keeping duplicate keys
///
/// # Errors
///
/// Same conditions as [`read_translation_map`].
pub fn read_raw_pairs<P: AsRef<Path>>(path: P) -> Result<RawPairs, LocaleError> {
    read_json(path.as_ref())
}

/// Like [`read_translation_map`], but a missing file reads as an empty object
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_translation_map_or_default<P: AsRef<Path>>(
    path: P,
) -> Result<TranslationMap, LocaleError> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        debug!("{} does not exist yet, starting from an empty object", path_ref.display());
        return Ok(TranslationMap::new());
    }

    read_translation_map(path_ref)
}

/// Fail with [`LocaleError::MissingFile`] unless `path` exists
///
/// # Errors
///
/// Returns an error if the path does not exist.
pub fn require_exists(path: &Path) -> Result<(), LocaleError> {
    if path.exists() {
        Ok(())
    } else {
        Err(LocaleError::MissingFile { path: path.to_path_buf() })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LocaleError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LocaleError::MissingFile { path: path.to_path_buf() },
        ErrorKind::InvalidData => LocaleError::malformed(path, "file is not valid UTF-8"),
        _ => LocaleError::Unexpected(e),
    })?;

    debug!("Read {} bytes from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|e| LocaleError::malformed(path, e))
}
