use std::fmt;

/// Origin of a registered system command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandSource {
    /// Built-in commands (restart, shutdown, ...).
    Core,
    /// Commands configured by the user.
    Custom,
}

impl CommandSource {
    /// The path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandSource::Core => "core",
            CommandSource::Custom => "custom",
        }
    }
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
