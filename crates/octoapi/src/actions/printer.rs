//! Printer state and raw G-code commands.

use serde_json::Value;

use super::project;
use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;

const PATH: &str = "printer";
const COMMAND_PATH: &str = "printer/command";

/// Retrieve the full printer state: temperatures, SD card and flags.
pub fn state() -> Request {
    Request::get(PATH)
}

/// Send one or more G-code commands to the printer.
pub fn command<S: AsRef<str>>(commands: &[S]) -> Request {
    let commands: Vec<&str> = commands.iter().map(AsRef::as_ref).collect();
    Request::post(COMMAND_PATH).param("commands", commands)
}

/// Provides access to printer state and raw commands.
///
/// Obtained via [`OctoClient::printer()`].
#[derive(Debug)]
pub struct PrinterActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> PrinterActions<'a> {
    /// Get the current printer state.
    pub async fn state(&self) -> Result<Value> {
        self.client.retrieve(&state()).await
    }

    /// Whether the printer is currently printing.
    pub async fn is_printing(&self) -> Result<bool> {
        project(&self.state().await?, "/state/flags/printing")
    }

    /// Send G-code commands.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::OctoClient;
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// client.printer().command(&["M106 S255", "G28 X"]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn command<S: AsRef<str>>(&self, commands: &[S]) -> Result<()> {
        self.client.issue(&command(commands)).await
    }
}
