//! Launcher entry (.desktop file) rendering.
//!
//! Produces the fixed subset of the XDG Desktop Entry Specification this
//! tool writes: one `[Desktop Entry]` section with eight keys in a fixed
//! order. Values are inserted verbatim.

use std::fmt;

use super::spec::LauncherSpec;
use crate::config::EntryConfig;

/// Keys of a launcher entry, in the order they are written.
pub const ENTRY_KEYS: [&str; 8] = [
    "Type",
    "Name",
    "Comment",
    "Exec",
    "Icon",
    "Terminal",
    "Categories",
    "StartupNotify",
];

/// A rendered-ready launcher entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherDocument {
    values: [String; 8],
}

impl LauncherDocument {
    /// Fill the fixed schema from a spec.
    pub fn from_spec(spec: &LauncherSpec) -> Self {
        Self {
            values: [
                EntryConfig::ENTRY_TYPE.to_string(),
                spec.name().to_string(),
                spec.effective_comment().to_string(),
                spec.exec_command().to_string(),
                spec.icon().to_string(),
                spec.terminal().to_string(),
                EntryConfig::CATEGORIES.to_string(),
                EntryConfig::STARTUP_NOTIFY.to_string(),
            ],
        }
    }

    /// Key/value pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ENTRY_KEYS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Look up the value written for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

impl fmt::Display for LauncherDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", EntryConfig::SECTION_HEADER)?;
        for (key, value) in self.entries() {
            writeln!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Render the launcher entry text for a spec.
pub fn build_document(spec: &LauncherSpec) -> String {
    LauncherDocument::from_spec(spec).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retro_game() -> LauncherSpec {
        LauncherSpec::builder()
            .name("Retro Game")
            .exec_command("/usr/bin/retro")
            .icon("retro-icon")
            .terminal(true)
            .build()
    }

    #[test]
    fn test_document_exact_content() {
        let content = build_document(&retro_game());

        assert_eq!(
            content,
            "[Desktop Entry]\n\
             Type=Application\n\
             Name=Retro Game\n\
             Comment=Retro Game\n\
             Exec=/usr/bin/retro\n\
             Icon=retro-icon\n\
             Terminal=true\n\
             Categories=Utility;\n\
             StartupNotify=true\n"
        );
    }

    #[test]
    fn test_comment_defaults_to_name() {
        let doc = LauncherDocument::from_spec(&retro_game());
        assert_eq!(doc.get("Comment"), doc.get("Name"));
    }

    #[test]
    fn test_explicit_comment_and_terminal_false() {
        let spec = LauncherSpec::builder()
            .name("Editor")
            .exec_command("gedit %U")
            .comment("Edit text files")
            .build();
        let doc = LauncherDocument::from_spec(&spec);

        assert_eq!(doc.get("Comment"), Some("Edit text files"));
        assert_eq!(doc.get("Terminal"), Some("false"));
        assert_eq!(doc.get("Icon"), Some(""));
        assert_eq!(doc.get("Missing"), None);
    }

    #[test]
    fn test_key_order_is_fixed() {
        let content = build_document(&retro_game());
        let keys: Vec<&str> = content
            .lines()
            .skip(1)
            .filter_map(|line| line.split_once('=').map(|(k, _)| k))
            .collect();

        assert_eq!(keys, ENTRY_KEYS);
        assert!(content.ends_with('\n'));
        assert!(!content.ends_with("\n\n"));
    }

    #[test]
    fn test_values_inserted_verbatim() {
        let spec = LauncherSpec::builder()
            .name("A=B")
            .exec_command("env FOO=bar app")
            .build();
        let content = build_document(&spec);

        assert!(content.contains("Name=A=B\n"));
        assert!(content.contains("Exec=env FOO=bar app\n"));
    }
}
