#![allow(missing_docs)]

pub mod app_config;
pub mod cli;
pub mod dedupe;
pub mod locale_file;
pub mod merge;
pub mod terms;

use std::path::PathBuf;

pub use dedupe::{dedupe_json_object_inplace, dedupe_pairs_keep_last};
pub use locale_file::{RawPairs, TranslationMap};
pub use merge::{merge_translation_files, merge_translations, MergeReport};
pub use terms::{seed_terms, seed_terms_file, SeedReport};

/// Garbage key that translation exports leave behind in the source file
pub const DEFAULT_GARBAGE_KEY: &str = "file_path";

/// Locale file maintained by every tool unless told otherwise
pub const DEFAULT_LOCALE_PATH: &str = "i18n/zh-cn.json";

/// Temporary file the merger reads new translations from
pub const DEFAULT_SOURCE_PATH: &str = "temp_translations.json";

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("{} not found.", path.display())]
    MissingFile { path: PathBuf },

    #[error("malformed JSON in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("unexpected error: {0}")]
    Unexpected(#[from] std::io::Error),
}

impl LocaleError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedInput { path: path.into(), reason: reason.to_string() }
    }
}
