//! Seeding of newly discovered UI terms into a locale file.
//!
//! Terms arrive as a plain-text list (one per line), usually scraped from
//! rendered pages. Only strings that look like translatable headlines or
//! labels are kept, and each is added with an empty value so that a later
//! merge can fill it.

use crate::locale_file::writer::{write_json, JsonStyle};
use crate::locale_file::{reader, TranslationMap};
use crate::LocaleError;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

const MAX_TERM_CHARS: usize = 80;
const MAX_TERM_WORDS: usize = 8;

struct TermPatterns {
    whitespace: Regex,
    cjk_only: Regex,
    long_number: Regex,
    markup: Regex,
}

fn patterns() -> &'static TermPatterns {
    static PATTERNS: OnceLock<TermPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TermPatterns {
        whitespace: Regex::new(r"[\s\u{a0}]+").expect("whitespace pattern is valid"),
        cjk_only: Regex::new(r"^[\u{4e00}-\u{9fff}]+$").expect("CJK pattern is valid"),
        long_number: Regex::new(r"\d{3,}").expect("number pattern is valid"),
        markup: Regex::new(r"[<>\[\]{}=\\]").expect("markup pattern is valid"),
    })
}

/// Collapse whitespace runs (non-breaking spaces included) and trim
pub fn normalize_key(text: &str) -> String {
    patterns().whitespace.replace_all(text, " ").trim().to_string()
}

/// Whether `text` looks like a UI string worth translating
pub fn is_extractable_term(text: &str) -> bool {
    let key = normalize_key(text);
    let patterns = patterns();
    let lower = key.to_lowercase();

    let char_count = key.chars().count();
    if char_count <= 1 || char_count > MAX_TERM_CHARS {
        return false;
    }
    if !key.chars().any(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    if patterns.cjk_only.is_match(&key)
        || patterns.long_number.is_match(&key)
        || patterns.markup.is_match(&key)
    {
        return false;
    }
    if ["http", "@", "var(", "/"].iter().any(|needle| key.contains(needle)) {
        return false;
    }
    if lower.starts_with("avatar for ") || lower.ends_with("logo") {
        return false;
    }

    key.split(' ').filter(|word| !word.is_empty()).count() <= MAX_TERM_WORDS
}

/// Outcome of seeding terms into a locale file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Newly added keys, in the order they were inserted
    pub added: Vec<String>,
    /// Candidates rejected by [`is_extractable_term`]
    pub rejected: usize,
    /// Extractable candidates that were already keys of the target
    pub existing: usize,
}

/// Add every extractable term that is not yet a key of `target`.
///
/// New keys get an empty value and are appended sorted case-insensitively.
/// Existing keys and their values are left alone.
pub fn seed_terms<I, S>(target: &mut TranslationMap, terms: I) -> SeedReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = SeedReport::default();
    let mut candidates = BTreeSet::new();

    for term in terms {
        let term = term.as_ref();
        if !is_extractable_term(term) {
            report.rejected += 1;
            continue;
        }
        let key = normalize_key(term);
        if target.contains_key(&key) {
            report.existing += 1;
        } else {
            candidates.insert((key.to_lowercase(), key));
        }
    }

    for (_, key) in candidates {
        target.insert(key.clone(), Value::String(String::new()));
        report.added.push(key);
    }

    report
}

/// Seed the terms listed in `terms_file` (one per line) into `target`.
///
/// A missing target is created. The target is only rewritten when at least
/// one term was added.
///
/// # Errors
///
/// Returns an error if:
/// - The terms file does not exist or cannot be read
/// - The target exists but is not a valid JSON object
/// - Writing the target fails
pub fn seed_terms_file<P, Q>(target: P, terms_file: Q) -> Result<SeedReport, LocaleError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let target_path = target.as_ref();
    let terms_path = terms_file.as_ref();

    reader::require_exists(terms_path)?;
    let content = fs::read_to_string(terms_path)?;
    let mut target_map = reader::read_translation_map_or_default(target_path)?;

    let report = seed_terms(&mut target_map, content.lines());
    debug!(
        "{} candidate(s) rejected, {} already present",
        report.rejected, report.existing
    );

    if !report.added.is_empty() {
        write_json(target_path, &target_map, JsonStyle::Translation)?;
        info!("Seeded {} new term(s) into {}", report.added.len(), target_path.display());
    }

    Ok(report)
}
