//! Print head movement.

use crate::client::OctoClient;
use crate::error::Result;
use crate::limits::{FEEDRATE_RANGE, clamp_factor, finite};
use crate::request::Request;
use crate::types::{Axis, Jog};

const PATH: &str = "printer/printhead";

/// Home the given axes.
pub fn home(axes: &[Axis]) -> Request {
    let axes: Vec<&str> = axes.iter().map(Axis::as_str).collect();
    command("home").param("axes", axes)
}

/// Jog the print head.
///
/// A NaN or infinite distance is an [`Error::InvalidArgument`](crate::Error::InvalidArgument).
pub fn jog(movement: &Jog) -> Result<Request> {
    Ok(command("jog")
        .param("x", finite("x", movement.x)?)
        .param("y", finite("y", movement.y)?)
        .param("z", finite("z", movement.z)?)
        .param("absolute", movement.absolute)
        .param_opt("speed", movement.speed))
}

/// Set the feed-rate factor in percent, clamped to 50..=200.
pub fn feedrate(factor: u32) -> Request {
    command("feedrate").param("factor", clamp_factor(factor, FEEDRATE_RANGE))
}

fn command(command: &str) -> Request {
    Request::post(PATH).param("command", command)
}

/// Provides access to print head operations.
///
/// Obtained via [`OctoClient::printhead()`].
#[derive(Debug)]
pub struct PrintheadActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> PrintheadActions<'a> {
    /// Home the given axes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::{Axis, OctoClient};
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// client.printhead().home(&[Axis::X, Axis::Y]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn home(&self, axes: &[Axis]) -> Result<()> {
        self.client.issue(&home(axes)).await
    }

    /// Move the print head.
    pub async fn jog(&self, movement: &Jog) -> Result<()> {
        self.client.issue(&jog(movement)?).await
    }

    /// Change the feed rate.
    ///
    /// Values outside 50..=200 are clamped to the nearest bound.
    pub async fn feedrate(&self, factor: u32) -> Result<()> {
        self.client.issue(&feedrate(factor)).await
    }
}
