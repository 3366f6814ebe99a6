//! SD card actions.

use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;

const PATH: &str = "printer/sd";

/// Retrieve the SD card state.
pub fn state() -> Request {
    Request::get(PATH)
}

/// Initialize the SD card.
pub fn init() -> Request {
    command("init")
}

/// Re-read the SD card's file list.
pub fn refresh() -> Request {
    command("refresh")
}

/// Release the SD card.
pub fn release() -> Request {
    command("release")
}

fn command(command: &str) -> Request {
    Request::post(PATH).param("command", command)
}

/// Provides access to SD card operations.
///
/// Obtained via [`OctoClient::sd()`].
#[derive(Debug)]
pub struct SdActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> SdActions<'a> {
    /// Get the SD card state (`{"ready": bool}`).
    pub async fn state(&self) -> Result<Value> {
        self.client.retrieve(&state()).await
    }

    /// Initialize the SD card.
    pub async fn init(&self) -> Result<()> {
        self.client.issue(&init()).await
    }

    /// Refresh the SD card file list.
    pub async fn refresh(&self) -> Result<()> {
        self.client.issue(&refresh()).await
    }

    /// Release the SD card.
    pub async fn release(&self) -> Result<()> {
        self.client.issue(&release()).await
    }
}
