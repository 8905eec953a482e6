//! Command-line arguments and their mapping onto the launcher form.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use deskgen_core::{DeskgenError, FieldTarget, LauncherForm, PickerSelection};

#[derive(Parser, Debug)]
#[command(name = "deskgen", version)]
#[command(about = "Create .desktop launchers for programs missing from the application menu")]
pub struct Args {
    /// Application name (Name=)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Command to execute (Exec=)
    #[arg(short, long = "exec", value_name = "COMMAND")]
    pub exec_command: Option<String>,

    /// Executable file or directory to use as the command
    #[arg(long, value_name = "PATH", conflicts_with = "exec_command")]
    pub exec_file: Option<PathBuf>,

    /// Icon theme name or image path (Icon=)
    #[arg(short, long)]
    pub icon: Option<String>,

    /// Image file (png, svg, jpg, jpeg) to use as the icon
    #[arg(long, value_name = "PATH", conflicts_with = "icon")]
    pub icon_file: Option<PathBuf>,

    /// Short description (Comment=), defaults to the name
    #[arg(short, long)]
    pub comment: Option<String>,

    /// Run the application inside a terminal (Terminal=)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub terminal: Option<bool>,

    /// JSON file with the launcher fields; flags override its values
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Directory to write into (defaults to the user's applications directory)
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// Open the target directory in the file manager afterwards
    #[arg(long)]
    pub open: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Collect the form fields from the spec file and the flags.
    pub fn to_form(&self) -> deskgen_core::Result<LauncherForm> {
        let mut form = match &self.spec {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .map_err(|e| DeskgenError::io_with_path(e, path))?;
                serde_json::from_str(&raw)?
            }
            None => LauncherForm::new(),
        };

        if let Some(name) = &self.name {
            form.name = name.clone();
        }
        if let Some(exec_command) = &self.exec_command {
            form.exec_command = exec_command.clone();
        }
        if let Some(icon) = &self.icon {
            form.icon = icon.clone();
        }
        if let Some(comment) = &self.comment {
            form.comment = comment.clone();
        }
        if let Some(terminal) = self.terminal {
            form.terminal = terminal;
        }

        if let Some(path) = &self.exec_file {
            let selection = if path.is_dir() {
                PickerSelection::Directory(path.clone())
            } else {
                PickerSelection::Files(vec![path.clone()])
            };
            form.apply_selection(FieldTarget::Executable, selection)?;
        }
        if let Some(path) = &self.icon_file {
            form.apply_selection(FieldTarget::Icon, PickerSelection::Files(vec![path.clone()]))?;
        }

        Ok(form)
    }
}
