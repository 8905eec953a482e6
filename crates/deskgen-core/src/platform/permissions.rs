//! Platform-specific file permission handling.
//!
//! Launcher entries must carry the executable bit, otherwise most desktop
//! environments refuse to run them as trusted launchers.

use crate::config::EntryConfig;
use crate::error::{DeskgenError, Result};
use std::path::Path;
use tracing::debug;

/// Mark a launcher entry as executable.
///
/// # Platform Behavior
/// - **Linux/macOS**: Sets mode [`EntryConfig::FILE_MODE`] (0o755)
/// - **Windows**: No-op (Windows determines executability by file extension)
///
/// # Errors
/// Returns an IO error carrying the path if the file doesn't exist or
/// permissions can't be changed.
pub fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path).map_err(|e| DeskgenError::Io {
            message: format!("read metadata: {}", e),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(EntryConfig::FILE_MODE);
        std::fs::set_permissions(path, permissions).map_err(|e| DeskgenError::Io {
            message: format!("set permissions: {}", e),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;
        debug!(
            "Set mode {:o} on: {}",
            EntryConfig::FILE_MODE,
            path.display()
        );
    }

    #[cfg(windows)]
    {
        debug!("Skipping executable bit on Windows for: {}", path.display());
    }

    Ok(())
}

/// Check if a file can be executed by its owner.
///
/// # Platform Behavior
/// - **Linux/macOS**: Checks the owner execute bit
/// - **Windows**: Returns true if the file exists
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path)
            .map(|metadata| metadata.permissions().mode() & 0o100 != 0)
            .unwrap_or(false)
    }

    #[cfg(windows)]
    {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_set_executable() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("entry.desktop");
        File::create(&file_path).unwrap();

        set_executable(&file_path).unwrap();

        assert!(is_executable(&file_path));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_set_executable_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.desktop");

        let err = set_executable(&missing);

        #[cfg(unix)]
        assert!(matches!(err, Err(DeskgenError::Io { path: Some(_), .. })));
        #[cfg(windows)]
        assert!(err.is_ok());
    }

    #[test]
    fn test_is_executable_nonexistent() {
        assert!(!is_executable(Path::new("/nonexistent/entry.desktop")));
    }

    #[test]
    #[cfg(unix)]
    fn test_plain_file_not_executable() {
        use std::os::unix::fs::PermissionsExt;
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.desktop");
        File::create(&file_path).unwrap();
        std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o644)).unwrap();

        assert!(!is_executable(&file_path));
    }
}
