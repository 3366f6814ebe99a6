//! Printer profile actions.

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;

const PATH: &str = "printerprofiles";

/// Retrieve all printer profiles.
pub fn list() -> Request {
    Request::get(PATH)
}

/// Add a printer profile.
pub fn add(profile: Value) -> Request {
    Request::post(PATH)
        .param("profile", profile)
        .expect(StatusCode::OK)
}

/// Provides access to printer profile operations.
///
/// Obtained via [`OctoClient::profiles()`].
#[derive(Debug)]
pub struct ProfileActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> ProfileActions<'a> {
    /// Get all printer profiles, keyed by identifier.
    pub async fn list(&self) -> Result<Value> {
        self.client.retrieve(&list()).await
    }

    /// Add a printer profile, returning the profile as stored.
    ///
    /// Fields missing from `profile` are taken from the default profile, so
    /// the returned document is the complete profile.
    pub async fn add(&self, profile: Value) -> Result<Value> {
        self.client.retrieve(&add(profile)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use serde_json::json;

    #[test]
    fn test_add_wraps_profile() {
        let request = add(json!({"id": "mk3", "name": "Prusa MK3"}));
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "printerprofiles");
        assert_eq!(request.expected_status(), StatusCode::OK);
        assert_eq!(request.params()["profile"]["id"], "mk3");
    }
}
