//! Heated bed actions.

use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::limits::{clamp_temperature, finite};
use crate::request::Request;

const PATH: &str = "printer/bed";

/// Retrieve the bed temperature.
pub fn state() -> Request {
    Request::get(PATH)
}

/// Set the bed target temperature, clamped to 0..=220 °C.
pub fn target(target_temp: f64) -> Request {
    command("target").param("target", clamp_temperature(target_temp))
}

/// Set the bed temperature offset.
pub fn offset(offset_temp: f64) -> Result<Request> {
    Ok(command("offset").param("offset", finite("offset", offset_temp)?))
}

fn command(command: &str) -> Request {
    Request::post(PATH).param("command", command)
}

/// Provides access to heated bed operations.
///
/// Obtained via [`OctoClient::bed()`].
#[derive(Debug)]
pub struct BedActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> BedActions<'a> {
    /// Get the current bed temperature.
    pub async fn state(&self) -> Result<Value> {
        self.client.retrieve(&state()).await
    }

    /// Set the bed target temperature.
    pub async fn target(&self, target_temp: f64) -> Result<()> {
        self.client.issue(&target(target_temp)).await
    }

    /// Set the bed temperature offset.
    pub async fn offset(&self, offset_temp: f64) -> Result<()> {
        self.client.issue(&offset(offset_temp)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_target_clamped() {
        assert_eq!(target(-5.0), target(0.0));
        assert_eq!(target(400.0), target(220.0));
        assert_eq!(target(60.0).params()["target"], 60.0);

        let request = target(60.0);
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "printer/bed");
        assert_eq!(request.expected_status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_offset() {
        assert_eq!(
            Value::Object(offset(3.0).unwrap().params().clone()),
            json!({"command": "offset", "offset": 3.0})
        );
        assert!(offset(f64::NAN).is_err());
    }
}
