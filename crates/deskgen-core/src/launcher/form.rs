//! Editable form state for front ends.
//!
//! The form holds raw, untrimmed field values as the user typed or picked
//! them. File picker results are routed to a field through [`FieldTarget`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::spec::LauncherSpec;
use crate::config::PickerConfig;
use crate::error::{DeskgenError, Result};

/// Which form field a file picker fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Executable,
    Icon,
}

impl FieldTarget {
    /// Field name used in validation errors.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldTarget::Executable => "exec_command",
            FieldTarget::Icon => "icon",
        }
    }
}

/// What a file picker returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerSelection {
    /// Picked files; only the first one is used.
    Files(Vec<PathBuf>),
    /// A picked directory.
    Directory(PathBuf),
}

/// Raw field values of the launcher form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherForm {
    pub name: String,
    #[serde(alias = "exec")]
    pub exec_command: String,
    pub icon: String,
    pub comment: String,
    pub terminal: bool,
}

impl LauncherForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a picker result to the field named by `target`.
    ///
    /// Returns whether the field changed. Directories only apply to the
    /// executable field, and icon files must have an accepted image
    /// extension.
    pub fn apply_selection(
        &mut self,
        target: FieldTarget,
        selection: PickerSelection,
    ) -> Result<bool> {
        let picked = match (target, selection) {
            (_, PickerSelection::Files(files)) => match files.into_iter().next() {
                Some(path) => path,
                None => return Ok(false),
            },
            (FieldTarget::Executable, PickerSelection::Directory(dir)) => dir,
            (FieldTarget::Icon, PickerSelection::Directory(_)) => return Ok(false),
        };

        if target == FieldTarget::Icon && !has_icon_extension(&picked) {
            return Err(DeskgenError::validation(
                target.field_name(),
                format!(
                    "{} is not an image ({})",
                    picked.display(),
                    PickerConfig::ICON_EXTENSIONS.join(", ")
                ),
            ));
        }

        let value = picked.to_str().ok_or_else(|| {
            DeskgenError::validation(target.field_name(), "path is not valid UTF-8")
        })?;

        debug!("Picked {} for {}", value, target.field_name());
        *self.field_mut(target) = value.to_string();
        Ok(true)
    }

    /// Trim every text field and freeze the form into a spec.
    pub fn to_spec(&self) -> LauncherSpec {
        LauncherSpec::builder()
            .name(self.name.trim())
            .exec_command(self.exec_command.trim())
            .icon(self.icon.trim())
            .comment(self.comment.trim())
            .terminal(self.terminal)
            .build()
    }

    /// Clear all fields, as after a successful generation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn field_mut(&mut self, target: FieldTarget) -> &mut String {
        match target {
            FieldTarget::Executable => &mut self.exec_command,
            FieldTarget::Icon => &mut self.icon,
        }
    }
}

fn has_icon_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(PickerConfig::is_icon_extension)
        .unwrap_or(false)
}
