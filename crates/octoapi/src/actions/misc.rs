//! Version, log and user retrieval.

use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;

/// Retrieve the API and server version.
pub fn version() -> Request {
    Request::get("version")
}

/// Retrieve the list of log files.
pub fn logs() -> Request {
    Request::get("logs")
}

/// Retrieve all users, or a single user by name.
pub fn users(name: Option<&str>) -> Request {
    match name {
        Some(name) => Request::get(format!("users/{}", name)),
        None => Request::get("users"),
    }
}

/// Provides access to miscellaneous operations.
///
/// Obtained via [`OctoClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> MiscActions<'a> {
    /// Get the API and server version.
    ///
    /// A cheap way to verify that the server is reachable and the API key
    /// is accepted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use octoapi::OctoClient;
    /// # async fn example() -> octoapi::Result<()> {
    /// let client = OctoClient::new()?;
    /// let version = client.misc().version().await?;
    /// println!("API {} on server {}", version["api"], version["server"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn version(&self) -> Result<Value> {
        self.client.retrieve(&version()).await
    }

    /// List the server's log files.
    pub async fn logs(&self) -> Result<Value> {
        self.client.retrieve(&logs()).await
    }

    /// Get users; requires an admin API key.
    pub async fn users(&self, name: Option<&str>) -> Result<Value> {
        self.client.retrieve(&users(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn test_paths() {
        assert_eq!(version().path(), "version");
        assert_eq!(logs().path(), "logs");
        assert_eq!(users(None).path(), "users");
        assert_eq!(users(Some("alice")).path(), "users/alice");
        assert_eq!(users(Some("alice")).method(), Method::Get);
    }
}
