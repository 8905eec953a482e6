//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live in this module rather
//! than being scattered through the launcher code.
//!
//! - `paths` - where per-user launcher entries are installed
//! - `permissions` - executable bits on written entries

pub mod paths;
pub mod permissions;

pub use paths::apps_dir;
pub use permissions::{is_executable, set_executable};

/// Returns the current platform name.
pub fn current_platform() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "linux"
    }
    #[cfg(target_os = "windows")]
    {
        "windows"
    }
    #[cfg(target_os = "macos")]
    {
        "macos"
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        "unknown"
    }
}
