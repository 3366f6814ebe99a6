//! Registered system commands (restart, shutdown, custom scripts).

use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;
use crate::types::CommandSource;

const PATH: &str = "system/commands";

/// List registered system commands, for every source or just one.
pub fn commands(source: Option<CommandSource>) -> Request {
    match source {
        Some(source) => Request::get(format!("{}/{}", PATH, source)),
        None => Request::get(PATH),
    }
}

/// Execute the command `action` registered under `source`.
pub fn execute(source: CommandSource, action: &str) -> Request {
    Request::post(format!("{}/{}/{}", PATH, source, action))
}

/// Provides access to system command operations.
///
/// Obtained via [`OctoClient::system()`].
#[derive(Debug)]
pub struct SystemActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> SystemActions<'a> {
    /// List the registered system commands.
    pub async fn commands(&self, source: Option<CommandSource>) -> Result<Value> {
        self.client.retrieve(&commands(source)).await
    }

    /// Execute a registered system command.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::{CommandSource, OctoClient};
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// client.system().execute(CommandSource::Core, "restart").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(&self, source: CommandSource, action: &str) -> Result<()> {
        self.client.issue(&execute(source, action)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use reqwest::StatusCode;

    #[test]
    fn test_commands_paths() {
        assert_eq!(commands(None).path(), "system/commands");
        assert_eq!(
            commands(Some(CommandSource::Custom)).path(),
            "system/commands/custom"
        );
    }

    #[test]
    fn test_execute() {
        let request = execute(CommandSource::Core, "shutdown");
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "system/commands/core/shutdown");
        assert_eq!(request.expected_status(), StatusCode::NO_CONTENT);
        assert!(request.params().is_empty());
    }
}
