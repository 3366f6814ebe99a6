//! Connection-related OctoPrint actions.
//!
//! Manage the serial link between OctoPrint and the printer.

use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;
use crate::types::ConnectOptions;

const PATH: &str = "connection";

/// Retrieve the current connection state and available options.
pub fn info() -> Request {
    Request::get(PATH)
}

/// Connect to the printer.
pub fn connect(options: &ConnectOptions) -> Request {
    command("connect")
        .param_opt("port", options.port.as_deref())
        .param_opt("baudrate", options.baudrate)
        .param_opt("printerProfile", options.printer_profile.as_deref())
        .param_opt("save", options.save)
        .param_opt("autoconnect", options.autoconnect)
}

/// Disconnect from the printer.
pub fn disconnect() -> Request {
    command("disconnect")
}

/// Acknowledge a command the firmware never acknowledged.
///
/// Useful when communication is stuck waiting for an `ok` that got lost.
pub fn fake_ack() -> Request {
    command("fake_ack")
}

fn command(command: &str) -> Request {
    Request::post(PATH).param("command", command)
}

/// Provides access to connection operations.
///
/// Obtained via [`OctoClient::connection()`].
#[derive(Debug)]
pub struct ConnectionActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> ConnectionActions<'a> {
    /// Get the connection state plus the available ports, baud rates and
    /// printer profiles.
    pub async fn info(&self) -> Result<Value> {
        self.client.retrieve(&info()).await
    }

    /// Connect to the printer.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::{ConnectOptions, OctoClient};
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// client
    ///     .connection()
    ///     .connect(&ConnectOptions::new().port("/dev/ttyUSB0").baudrate(250000))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(&self, options: &ConnectOptions) -> Result<()> {
        self.client.issue(&connect(options)).await
    }

    /// Disconnect from the printer.
    pub async fn disconnect(&self) -> Result<()> {
        self.client.issue(&disconnect()).await
    }

    /// Send a fake acknowledgement to the printer.
    pub async fn fake_ack(&self) -> Result<()> {
        self.client.issue(&fake_ack()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_connect_with_defaults_sends_only_command() {
        let request = connect(&ConnectOptions::new());
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "connection");
        assert_eq!(request.expected_status(), StatusCode::NO_CONTENT);
        assert_eq!(
            Value::Object(request.params().clone()),
            json!({"command": "connect"})
        );
    }

    #[test]
    fn test_connect_with_options() {
        let options = ConnectOptions::new()
            .port("/dev/ttyACM0")
            .baudrate(115200)
            .printer_profile("_default")
            .save(true)
            .autoconnect(false);

        assert_eq!(
            Value::Object(connect(&options).params().clone()),
            json!({
                "command": "connect",
                "port": "/dev/ttyACM0",
                "baudrate": 115200,
                "printerProfile": "_default",
                "save": true,
                "autoconnect": false
            })
        );
    }

    #[test]
    fn test_disconnect_and_fake_ack() {
        assert_eq!(disconnect().params()["command"], "disconnect");
        assert_eq!(fake_ack().params()["command"], "fake_ack");
        assert_eq!(fake_ack().path(), "connection");
    }
}
