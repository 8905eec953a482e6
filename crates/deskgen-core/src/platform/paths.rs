//! Platform-specific path utilities.
//!
//! Resolves where per-user launcher entries live so they show up in the
//! application menu.

use crate::config::PathsConfig;
use crate::error::{DeskgenError, Result};
use std::path::PathBuf;

/// Get the per-user applications directory.
///
/// # Platform Behavior
/// - **Linux**: `$XDG_DATA_HOME/applications`, which is
///   `~/.local/share/applications` unless overridden (XDG spec)
/// - **Windows**: `%APPDATA%/Microsoft/Windows/Start Menu/Programs`
/// - **macOS**: `~/Applications`
pub fn apps_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let data_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
            .ok_or_else(|| DeskgenError::Config {
                message: "Could not determine user data directory".to_string(),
            })?;
        Ok(data_dir.join(PathsConfig::APPLICATIONS_DIR_NAME))
    }

    #[cfg(target_os = "windows")]
    {
        let data_dir = dirs::data_dir().ok_or_else(|| DeskgenError::Config {
            message: "Could not determine app data directory".to_string(),
        })?;
        Ok(data_dir
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs"))
    }

    #[cfg(target_os = "macos")]
    {
        let home = dirs::home_dir().ok_or_else(|| DeskgenError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(home.join("Applications"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        // Other unixes (BSDs) follow the XDG layout too.
        let home = dirs::home_dir().ok_or_else(|| DeskgenError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        Ok(home
            .join(".local")
            .join("share")
            .join(PathsConfig::APPLICATIONS_DIR_NAME))
    }
}
