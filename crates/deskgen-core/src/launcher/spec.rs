//! The input to a generation request.

/// Field values for one launcher entry.
///
/// Immutable once built. Front ends are expected to trim values before
/// building (see [`LauncherForm::to_spec`](super::LauncherForm::to_spec));
/// the document renders them exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherSpec {
    name: String,
    exec_command: String,
    icon: String,
    comment: String,
    terminal: bool,
}

impl LauncherSpec {
    /// Create a new spec builder.
    pub fn builder() -> LauncherSpecBuilder {
        LauncherSpecBuilder::new()
    }

    /// Display name (`Name=`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command line to run (`Exec=`).
    pub fn exec_command(&self) -> &str {
        &self.exec_command
    }

    /// Icon theme name or icon path (`Icon=`). May be empty.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The raw comment as entered. May be empty.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The comment that ends up in the entry: falls back to the name.
    pub fn effective_comment(&self) -> &str {
        if self.comment.is_empty() {
            &self.name
        } else {
            &self.comment
        }
    }

    /// Whether the application runs inside a terminal.
    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

/// Builder for launcher specs.
#[derive(Debug, Default)]
pub struct LauncherSpecBuilder {
    spec: LauncherSpec,
}

impl LauncherSpecBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.spec.name = name.into();
        self
    }

    /// Set the command to execute.
    pub fn exec_command(mut self, exec_command: impl Into<String>) -> Self {
        self.spec.exec_command = exec_command.into();
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.spec.icon = icon.into();
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.spec.comment = comment.into();
        self
    }

    /// Set whether to run in a terminal.
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.spec.terminal = terminal;
        self
    }

    /// Build the spec.
    pub fn build(self) -> LauncherSpec {
        self.spec
    }
}
