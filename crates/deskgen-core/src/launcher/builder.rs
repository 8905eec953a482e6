//! Validating and writing launcher entries.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::document::build_document;
use super::filename::entry_file_name;
use super::outcome::WriteOutcome;
use super::spec::LauncherSpec;
use crate::error::{DeskgenError, Result};
use crate::platform;

/// Writes launcher entries into one target directory.
///
/// Holds no state besides the directory; every call is independent and
/// overwrites any existing entry with the same derived file name.
#[derive(Debug, Clone)]
pub struct LauncherFileBuilder {
    target_dir: PathBuf,
}

impl LauncherFileBuilder {
    /// Create a builder writing into `target_dir`.
    pub fn new(target_dir: impl AsRef<Path>) -> Self {
        Self {
            target_dir: target_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a builder for the current user's applications directory.
    pub fn for_current_user() -> Result<Self> {
        Ok(Self::new(platform::apps_dir()?))
    }

    /// Where the entry for `spec` will be written.
    pub fn entry_path(&self, spec: &LauncherSpec) -> PathBuf {
        self.target_dir.join(entry_file_name(spec.name()))
    }

    /// Check the fields of a spec before anything touches the disk.
    ///
    /// `name` and `exec_command` must be non-blank. No field may contain a
    /// line break, since that would start a new key in the entry.
    pub fn validate(spec: &LauncherSpec) -> Result<()> {
        if spec.name().trim().is_empty() {
            return Err(DeskgenError::validation("name", "a name is required"));
        }
        if spec.exec_command().trim().is_empty() {
            return Err(DeskgenError::validation(
                "exec_command",
                "a command to execute is required",
            ));
        }

        let fields = [
            ("name", spec.name()),
            ("exec_command", spec.exec_command()),
            ("icon", spec.icon()),
            ("comment", spec.comment()),
        ];
        for (field, value) in fields {
            if value.contains(['\n', '\r']) {
                return Err(DeskgenError::validation(
                    field,
                    "line breaks are not allowed",
                ));
            }
        }

        Ok(())
    }

    /// Validate, render and write the entry, returning its path.
    pub fn try_generate(&self, spec: &LauncherSpec) -> Result<PathBuf> {
        Self::validate(spec)?;

        let final_path = self.entry_path(spec);
        debug!("Derived launcher path {:?} for {:?}", final_path, spec.name());

        let content = build_document(spec);

        fs::create_dir_all(&self.target_dir).map_err(|e| DeskgenError::Io {
            message: format!("create directory: {}", e),
            path: Some(self.target_dir.clone()),
            source: Some(e),
        })?;

        let mut file = fs::File::create(&final_path).map_err(|e| DeskgenError::Io {
            message: format!("create launcher file: {}", e),
            path: Some(final_path.clone()),
            source: Some(e),
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| DeskgenError::Io {
                message: format!("write launcher file: {}", e),
                path: Some(final_path.clone()),
                source: Some(e),
            })?;

        platform::set_executable(&final_path)?;

        info!("Wrote launcher entry {:?} to {}", spec.name(), final_path.display());

        Ok(final_path)
    }

    /// Generate the entry and report the result as a value.
    pub fn generate(&self, spec: &LauncherSpec) -> WriteOutcome {
        let outcome = WriteOutcome::from(self.try_generate(spec));
        if let Some(reason) = outcome.failure() {
            warn!("Launcher generation failed: {}", reason);
        }
        outcome
    }
}

/// Generate a launcher entry into `target_dir`, or the current user's
/// applications directory when no override is given.
pub fn generate_launcher(spec: &LauncherSpec, target_dir: Option<&Path>) -> WriteOutcome {
    let builder = match target_dir {
        Some(dir) => LauncherFileBuilder::new(dir),
        None => match LauncherFileBuilder::for_current_user() {
            Ok(builder) => builder,
            Err(e) => {
                warn!("Could not resolve applications directory: {}", e);
                return WriteOutcome::from(Err(e));
            }
        },
    };
    builder.generate(spec)
}
