//! Tool (extruder) actions: temperatures, offsets, extrusion.
//!
//! Tools are addressed by name: `tool0`, `tool1`, ...

use serde_json::{Map, Value};

use crate::client::OctoClient;
use crate::error::Result;
use crate::limits::{FLOWRATE_RANGE, clamp_factor, clamp_temperature, finite};
use crate::request::Request;

const PATH: &str = "printer/tool";

/// Name of the first tool.
pub const TOOL0: &str = "tool0";

/// Retrieve the tool temperatures.
pub fn state() -> Request {
    Request::get(PATH)
}

/// Make `tool` the active tool.
pub fn select(tool: &str) -> Request {
    command("select").param("tool", tool)
}

/// Set target temperatures per tool, each clamped to 0..=220 °C.
pub fn target(targets: &[(&str, f64)]) -> Request {
    let targets: Map<String, Value> = targets
        .iter()
        .map(|(tool, temp)| (tool.to_string(), Value::from(clamp_temperature(*temp))))
        .collect();
    command("target").param("targets", targets)
}

/// Set the target temperature of `tool0`.
pub fn target_tool0(target_temp: f64) -> Request {
    target(&[(TOOL0, target_temp)])
}

/// Set temperature offsets per tool.
///
/// Offsets are not clamped, but must be finite.
pub fn offset(offsets: &[(&str, f64)]) -> Result<Request> {
    let offsets = offsets
        .iter()
        .map(|(tool, offset)| Ok((tool.to_string(), Value::from(finite(tool, *offset)?))))
        .collect::<Result<Map<String, Value>>>()?;
    Ok(command("offset").param("offsets", offsets))
}

/// Set the temperature offset of `tool0`.
pub fn offset_tool0(offset_temp: f64) -> Result<Request> {
    offset(&[(TOOL0, offset_temp)])
}

/// Extrude `amount` millimetres of filament; negative retracts.
pub fn extrude(amount: f64, speed: Option<u32>) -> Result<Request> {
    Ok(command("extrude")
        .param("amount", finite("amount", amount)?)
        .param_opt("speed", speed))
}

/// Set the flow-rate factor in percent, clamped to 75..=125.
pub fn flowrate(factor: u32) -> Request {
    command("flowrate").param("factor", clamp_factor(factor, FLOWRATE_RANGE))
}

fn command(command: &str) -> Request {
    Request::post(PATH).param("command", command)
}

/// Provides access to tool operations.
///
/// Obtained via [`OctoClient::tool()`].
#[derive(Debug)]
pub struct ToolActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> ToolActions<'a> {
    /// Get the current tool temperatures.
    pub async fn state(&self) -> Result<Value> {
        self.client.retrieve(&state()).await
    }

    /// Select the active tool.
    pub async fn select(&self, tool: &str) -> Result<()> {
        self.client.issue(&select(tool)).await
    }

    /// Set target temperatures.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::OctoClient;
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// client.tool().target(&[("tool0", 210.0), ("tool1", 0.0)]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn target(&self, targets: &[(&str, f64)]) -> Result<()> {
        self.client.issue(&target(targets)).await
    }

    /// Set the target temperature of the first tool.
    pub async fn target_tool0(&self, target_temp: f64) -> Result<()> {
        self.client.issue(&target_tool0(target_temp)).await
    }

    /// Set temperature offsets.
    pub async fn offset(&self, offsets: &[(&str, f64)]) -> Result<()> {
        self.client.issue(&offset(offsets)?).await
    }

    /// Set the temperature offset of the first tool.
    pub async fn offset_tool0(&self, offset_temp: f64) -> Result<()> {
        self.client.issue(&offset_tool0(offset_temp)?).await
    }

    /// Extrude (or retract, if negative) filament on the active tool.
    pub async fn extrude(&self, amount: f64, speed: Option<u32>) -> Result<()> {
        self.client.issue(&extrude(amount, speed)?).await
    }

    /// Change the flow rate.
    pub async fn flowrate(&self, factor: u32) -> Result<()> {
        self.client.issue(&flowrate(factor)).await
    }
}
