//! Centralized configuration for deskgen.
//!
//! Constants for the generated launcher entries, their on-disk location and
//! the file picker filters used by front ends.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "deskgen";
    /// Stem used when a name sanitizes down to nothing.
    pub const FALLBACK_FILE_STEM: &'static str = "custom-app";
    pub const ENTRY_EXTENSION: &'static str = "desktop";
}

/// Fixed parts of every generated launcher entry.
pub struct EntryConfig;

impl EntryConfig {
    pub const SECTION_HEADER: &'static str = "[Desktop Entry]";
    pub const ENTRY_TYPE: &'static str = "Application";
    pub const CATEGORIES: &'static str = "Utility;";
    pub const STARTUP_NOTIFY: &'static str = "true";
    /// rwxr-xr-x, so desktop environments treat the entry as launchable.
    pub const FILE_MODE: u32 = 0o755;
}

/// Shared directory names.
pub struct PathsConfig;

impl PathsConfig {
    pub const APPLICATIONS_DIR_NAME: &'static str = "applications";
}

/// File picker filters.
pub struct PickerConfig;

impl PickerConfig {
    pub const ICON_EXTENSIONS: &'static [&'static str] = &["png", "svg", "jpg", "jpeg"];

    /// Whether `extension` (without the dot) is an accepted icon type.
    pub fn is_icon_extension(extension: &str) -> bool {
        Self::ICON_EXTENSIONS
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
