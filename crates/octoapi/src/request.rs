//! Request descriptors for the OctoPrint REST API.
//!
//! A [`Request`] is a plain value: method, path below `/api/`, parameters and
//! the status code the endpoint returns on success. The functions in
//! [`crate::actions`] build these without touching the network, which makes
//! the endpoint catalog easy to inspect and compare.

use std::fmt;

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// HTTP method used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Retrieval; parameters go in the query string.
    Get,
    /// Command; parameters go in the JSON body.
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A single call against the API.
///
/// # Example
///
/// ```
/// use octoapi::{Method, Request};
/// use reqwest::StatusCode;
///
/// let request = Request::post("job").param("command", "cancel");
/// assert_eq!(request.method(), Method::Post);
/// assert_eq!(request.path(), "job");
/// assert_eq!(request.expected_status(), StatusCode::NO_CONTENT);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    params: Map<String, Value>,
    expected_status: StatusCode,
}

impl Request {
    /// A GET request expecting `200 OK`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, StatusCode::OK)
    }

    /// A POST request expecting `204 No Content`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path, StatusCode::NO_CONTENT)
    }

    fn new(method: Method, path: impl Into<String>, expected_status: StatusCode) -> Self {
        Self {
            method,
            path: path.into(),
            params: Map::new(),
            expected_status,
        }
    }

    /// Add a parameter, replacing any previous value for `key`.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Add a parameter only if `value` is present.
    pub fn param_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Merge every entry of a JSON object into the parameters.
    ///
    /// `null` adds nothing. Any other non-object value is an
    /// [`Error::InvalidArgument`], since it has no place in a query string or
    /// a command body.
    pub fn params_from(mut self, value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => self.params.extend(map),
            Value::Null => {}
            other => {
                return Err(Error::InvalidArgument(format!(
                    "parameters must be a JSON object, got {}",
                    other
                )));
            }
        }
        Ok(self)
    }

    /// Override the status code treated as success.
    pub fn expect(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The path relative to `<base_url>/api/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query (GET) or body (POST) parameters.
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// The status code that signals success.
    pub fn expected_status(&self) -> StatusCode {
        self.expected_status
    }
}
