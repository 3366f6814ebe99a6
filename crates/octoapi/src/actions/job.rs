//! Job-related OctoPrint actions.
//!
//! The current job is the file selected for printing. These operations start,
//! pause and cancel it, and read its progress.
//!
//! # Example
//!
//! ```no_run
//! use octoapi::OctoClient;
//!
//! # async fn example() -> octoapi::Result<()> {
//! let client = OctoClient::new()?;
//!
//! if let Some(left) = client.job().print_time_left().await? {
//!     println!("{} seconds to go", left);
//! }
//! client.job().cancel().await?;
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use super::project;
use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;
use crate::types::PauseAction;

const PATH: &str = "job";

/// Retrieve information about the current job.
pub fn info() -> Request {
    Request::get(PATH)
}

/// Start printing the selected file.
pub fn start() -> Request {
    command("start")
}

/// Cancel the running job.
pub fn cancel() -> Request {
    command("cancel")
}

/// Restart the paused job from the beginning.
pub fn restart() -> Request {
    command("restart")
}

/// Pause, resume or toggle the running job.
pub fn pause(action: PauseAction) -> Request {
    command("pause").param("action", action.as_str())
}

fn command(command: &str) -> Request {
    Request::post(PATH).param("command", command)
}

/// Provides access to job operations.
///
/// Obtained via [`OctoClient::job()`].
#[derive(Debug)]
pub struct JobActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> JobActions<'a> {
    /// Get the current job: file, estimates and progress.
    pub async fn info(&self) -> Result<Value> {
        self.client.retrieve(&info()).await
    }

    /// Start the print job.
    pub async fn start(&self) -> Result<()> {
        self.client.issue(&start()).await
    }

    /// Cancel the print job.
    pub async fn cancel(&self) -> Result<()> {
        self.client.issue(&cancel()).await
    }

    /// Restart the print job.
    ///
    /// Only valid while the job is paused.
    pub async fn restart(&self) -> Result<()> {
        self.client.issue(&restart()).await
    }

    /// Pause or resume the print job.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::{OctoClient, PauseAction};
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// client.job().pause(PauseAction::Pause).await?;
    /// // ... change filament ...
    /// client.job().pause(PauseAction::Resume).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pause(&self, action: PauseAction) -> Result<()> {
        self.client.issue(&pause(action)).await
    }

    /// Percentage of the file already printed, `None` while unknown.
    pub async fn completion(&self) -> Result<Option<f64>> {
        project(&self.info().await?, "/progress/completion")
    }

    /// Seconds elapsed since the print started, `None` while unknown.
    pub async fn print_time(&self) -> Result<Option<u64>> {
        project(&self.info().await?, "/progress/printTime")
    }

    /// Estimated seconds until the print finishes, `None` while unknown.
    pub async fn print_time_left(&self) -> Result<Option<u64>> {
        project(&self.info().await?, "/progress/printTimeLeft")
    }
}
