//! Opening the target directory in the user's file manager.
//!
//! - Linux: `xdg-open`, then a few common file managers
//! - macOS: `open`
//! - Windows: `explorer`

use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use tracing::debug;

/// Spawn the platform file manager on `path` without waiting for it.
pub fn open_in_file_manager(path: &Path) -> Result<()> {
    #[cfg(target_os = "linux")]
    {
        open_linux(path)
    }

    #[cfg(target_os = "macos")]
    {
        spawn_detached("open", path)
    }

    #[cfg(target_os = "windows")]
    {
        spawn_detached("explorer", path)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        spawn_detached("xdg-open", path)
    }
}

#[cfg(target_os = "linux")]
fn open_linux(path: &Path) -> Result<()> {
    match spawn_detached("xdg-open", path) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!("xdg-open failed: {}", e);

            for fm in ["nautilus", "dolphin", "thunar", "pcmanfm", "nemo"] {
                if spawn_detached(fm, path).is_ok() {
                    return Ok(());
                }
            }

            Err(anyhow!("Failed to open file manager: {}", e))
        }
    }
}

fn spawn_detached(program: &str, path: &Path) -> Result<()> {
    // The child is not waited on; it is reparented once deskgen exits.
    Command::new(program)
        .arg(path)
        .spawn()
        .map_err(|e| anyhow!("{}: {}", program, e))?;

    debug!("Opened {} with {}", path.display(), program);
    Ok(())
}
