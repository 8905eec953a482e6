//! deskgen core - headless library for writing XDG launcher entries.
//!
//! Turns a handful of field values into a `<name>.desktop` file in the
//! user's applications directory so the program shows up in application
//! menus. Front ends (the `deskgen` CLI, or a GUI) collect the fields and
//! render the returned [`WriteOutcome`].
//!
//! # Example
//!
//! ```rust,no_run
//! use deskgen_core::{LauncherFileBuilder, LauncherSpec};
//!
//! let spec = LauncherSpec::builder()
//!     .name("Retro Game")
//!     .exec_command("/usr/bin/retro")
//!     .icon("retro-icon")
//!     .build();
//!
//! let builder = LauncherFileBuilder::for_current_user()?;
//! let outcome = builder.generate(&spec);
//! println!("{}", outcome.summary());
//! # Ok::<(), deskgen_core::DeskgenError>(())
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod platform;

pub use config::AppConfig;
pub use error::{DeskgenError, Result};
pub use launcher::{
    build_document, derive_file_name, entry_file_name, generate_launcher, FailureReason,
    FieldTarget, LauncherDocument, LauncherFileBuilder, LauncherForm, LauncherSpec,
    PickerSelection, WriteOutcome,
};
