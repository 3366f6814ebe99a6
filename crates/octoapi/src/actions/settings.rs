//! Settings actions.

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;

const PATH: &str = "settings";

/// Retrieve the current settings.
pub fn get() -> Request {
    Request::get(PATH)
}

/// Save a (partial) settings document.
///
/// OctoPrint merges the document into its settings and answers `200 OK`
/// with the resulting settings. `settings` must be a JSON object.
pub fn update(settings: Value) -> Result<Request> {
    Ok(Request::post(PATH)
        .params_from(settings)?
        .expect(StatusCode::OK))
}

/// Provides access to settings operations.
///
/// Obtained via [`OctoClient::settings()`].
#[derive(Debug)]
pub struct SettingsActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> SettingsActions<'a> {
    /// Get the current settings.
    pub async fn get(&self) -> Result<Value> {
        self.client.retrieve(&get()).await
    }

    /// Update settings, returning the settings as saved by the server.
    ///
    /// A `settings` value that is not a JSON object is rejected with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) before
    /// anything is sent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::OctoClient;
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// let saved = client
    ///     .settings()
    ///     .update(serde_json::json!({"appearance": {"name": "Workshop"}}))
    ///     .await?;
    /// assert_eq!(saved["appearance"]["name"], "Workshop");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update(&self, settings: Value) -> Result<Value> {
        self.client.retrieve(&update(settings)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use serde_json::json;

    #[test]
    fn test_update_expects_ok() {
        let request = update(json!({"feature": {"sdSupport": false}})).unwrap();
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "settings");
        assert_eq!(request.expected_status(), StatusCode::OK);
        assert_eq!(request.params()["feature"], json!({"sdSupport": false}));
    }

    #[test]
    fn test_update_rejects_non_object() {
        let err = update(json!([{"appearance": {"name": "Garage"}}])).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidArgument(_)));
    }
}
