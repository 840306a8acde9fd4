use crate::LocaleError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Output layout for JSON written back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indent, no trailing newline (merged and seeded locale files)
    Translation,
    /// Four-space indent followed by a newline (deduplicated objects)
    Canonical,
}

impl JsonStyle {
    const fn indent(self) -> &'static [u8] {
        match self {
            Self::Translation => b"  ",
            Self::Canonical => b"    ",
        }
    }

    const fn trailing_newline(self) -> bool {
        matches!(self, Self::Canonical)
    }
}

/// Render `value` as pretty JSON in the given style.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render_json<T: Serialize + ?Sized>(
    value: &T,
    style: JsonStyle,
) -> Result<String, LocaleError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(style.indent()));
    value.serialize(&mut serializer).map_err(std::io::Error::from)?;

    if style.trailing_newline() {
        buf.push(b'\n');
    }

    String::from_utf8(buf)
        .map_err(|e| LocaleError::Unexpected(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write `value` to `path` as pretty JSON, replacing the file contents atomically
///
/// An existing file keeps its permissions, and a symlinked path updates the
/// file the link points to.
///
/// # Errors
///
/// Returns an error if:
/// - Unable to resolve an existing path or read its permissions
/// - Unable to create parent directories
/// - Unable to serialize the value
/// - Unable to write or persist the temporary file
pub fn write_json<P, T>(path: P, value: &T, style: JsonStyle) -> Result<(), LocaleError>
where
    P: AsRef<Path>,
    T: Serialize + ?Sized,
{
    let path_ref = path.as_ref();
    let rendered = render_json(value, style)?;

    // Stage next to the real file so the rename never replaces a symlink
    let (destination, permissions) = if path_ref.exists() {
        let resolved = fs::canonicalize(path_ref)?;
        let permissions = fs::metadata(&resolved)?.permissions();
        (resolved, Some(permissions))
    } else {
        (path_ref.to_path_buf(), None)
    };

    // An empty parent means the file lives in the working directory
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(rendered.as_bytes())?;
    staged.flush()?;
    if let Some(permissions) = permissions {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.persist(&destination).map_err(std::io::Error::from)?;

    debug!("Wrote {} bytes to {}", rendered.len(), destination.display());
    Ok(())
}
