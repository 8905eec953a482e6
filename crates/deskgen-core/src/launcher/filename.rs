//! Turning display names into launcher file names.

use crate::config::AppConfig;

/// Convert a display name into a filesystem-safe file stem.
///
/// Keeps letters, digits, spaces, hyphens and underscores and drops
/// everything else. "Letter" means the Unicode Alphabetic property, so
/// combining vowel signs in scripts such as Devanagari are kept. The kept
/// text is trimmed, spaces become underscores and the result is
/// lowercased. Names with nothing left map to
/// [`AppConfig::FALLBACK_FILE_STEM`].
pub fn derive_file_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let stem = kept.trim().replace(' ', "_").to_lowercase();

    if stem.is_empty() {
        AppConfig::FALLBACK_FILE_STEM.to_string()
    } else {
        stem
    }
}

/// The full file name (`<stem>.desktop`) for a display name.
pub fn entry_file_name(name: &str) -> String {
    format!("{}.{}", derive_file_name(name), AppConfig::ENTRY_EXTENSION)
}
