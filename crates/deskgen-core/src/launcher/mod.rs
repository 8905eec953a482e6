//! Launcher entry generation.
//!
//! A [`LauncherSpec`] goes in, a [`WriteOutcome`] comes out. The
//! [`LauncherFileBuilder`] derives the file name, renders the entry and
//! writes it with executable permissions.

mod builder;
mod document;
mod filename;
mod form;
mod outcome;
mod spec;

pub use builder::{generate_launcher, LauncherFileBuilder};
pub use document::{build_document, LauncherDocument, ENTRY_KEYS};
pub use filename::{derive_file_name, entry_file_name};
pub use form::{FieldTarget, LauncherForm, PickerSelection};
pub use outcome::{FailureReason, WriteOutcome};
pub use spec::{LauncherSpec, LauncherSpecBuilder};
