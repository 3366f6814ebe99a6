//! The OctoPrint client and builder.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::actions::{
    BedActions, ConnectionActions, FileActions, JobActions, MiscActions, PrintheadActions,
    PrinterActions, ProfileActions, SdActions, SettingsActions, SystemActions, ToolActions,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::request::{Method, Request};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// The main client for interacting with OctoPrint.
///
/// The underlying HTTP session is created on the first request, so a client
/// built from an incomplete [`Config`] only fails once it is used.
///
/// # Example
///
/// ```no_run
/// use octoapi::OctoClient;
///
/// # async fn example() -> octoapi::Result<()> {
/// // Reads ~/.octoapi.conf
/// let client = OctoClient::new()?;
///
/// let version = client.misc().version().await?;
/// println!("OctoPrint {}", version["server"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OctoClient {
    config: Config,
    timeout: Duration,
    session: OnceCell<Client>,
}

impl OctoClient {
    /// Create a client from the per-user config file.
    ///
    /// See [`Config::load`] for how a missing file is handled.
    pub fn new() -> Result<Self> {
        Ok(Self::builder().config(Config::load()?).build())
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured API key.
    pub fn api_key(&self) -> Result<&str> {
        self.config.api_key()
    }

    /// The API root, `<base_url>/api/`.
    pub fn base_url(&self) -> Result<String> {
        self.config.base_url()
    }

    /// Access connection operations.
    pub fn connection(&self) -> ConnectionActions<'_> {
        ConnectionActions { client: self }
    }

    /// Access job operations.
    pub fn job(&self) -> JobActions<'_> {
        JobActions { client: self }
    }

    /// Access file operations.
    pub fn files(&self) -> FileActions<'_> {
        FileActions { client: self }
    }

    /// Access printer state and raw command operations.
    pub fn printer(&self) -> PrinterActions<'_> {
        PrinterActions { client: self }
    }

    /// Access print head operations.
    pub fn printhead(&self) -> PrintheadActions<'_> {
        PrintheadActions { client: self }
    }

    /// Access tool (extruder) operations.
    pub fn tool(&self) -> ToolActions<'_> {
        ToolActions { client: self }
    }

    /// Access heated bed operations.
    pub fn bed(&self) -> BedActions<'_> {
        BedActions { client: self }
    }

    /// Access SD card operations.
    pub fn sd(&self) -> SdActions<'_> {
        SdActions { client: self }
    }

    /// Access settings operations.
    pub fn settings(&self) -> SettingsActions<'_> {
        SettingsActions { client: self }
    }

    /// Access printer profile operations.
    pub fn profiles(&self) -> ProfileActions<'_> {
        ProfileActions { client: self }
    }

    /// Access system command operations.
    pub fn system(&self) -> SystemActions<'_> {
        SystemActions { client: self }
    }

    /// Access version, log and user operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// GET `path` with `params` as the query string, expecting `200 OK`.
    ///
    /// `params` must serialize to a JSON object (or `()` for none); anything
    /// else is an [`Error::InvalidArgument`] and nothing is sent.
    pub async fn get<P, R>(&self, path: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.get_expecting(path, params, StatusCode::OK).await
    }

    /// GET with an explicit success status.
    pub async fn get_expecting<P, R>(&self, path: &str, params: &P, expected: StatusCode) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = Request::get(path)
            .params_from(to_params(params)?)?
            .expect(expected);
        self.retrieve(&request).await
    }

    /// POST `body` as JSON to `path`, expecting `204 No Content`.
    ///
    /// `body` must serialize to a JSON object (or `()` for none); anything
    /// else is an [`Error::InvalidArgument`] and nothing is sent.
    pub async fn post<P>(&self, path: &str, body: &P) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        self.post_expecting(path, body, StatusCode::NO_CONTENT).await
    }

    /// POST with an explicit success status.
    pub async fn post_expecting<P>(&self, path: &str, body: &P, expected: StatusCode) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let request = Request::post(path)
            .params_from(to_params(body)?)?
            .expect(expected);
        self.issue(&request).await
    }

    /// Execute a request and decode the JSON response body.
    pub async fn retrieve<R>(&self, request: &Request) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.send(request).await?;
        let body = check_response(response, request.expected_status()).await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(path = request.path(), error = %e, "Failed to decode response body");
            Error::Decode(e)
        })
    }

    /// Execute a request whose only success signal is the status code.
    pub async fn issue(&self, request: &Request) -> Result<()> {
        let response = self.send(request).await?;
        check_response(response, request.expected_status()).await?;
        Ok(())
    }

    /// The shared HTTP session, built on first use.
    async fn session(&self) -> Result<&Client> {
        self.session
            .get_or_try_init(|| async { self.build_session() })
            .await
    }

    fn build_session(&self) -> Result<Client> {
        let mut api_key = HeaderValue::from_str(self.config.api_key()?)
            .map_err(|_| Error::Config("api_key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // One request per connection; nothing is kept alive between calls.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(client)
    }

    /// The full URL for an API path.
    ///
    /// Each `/`-separated segment of `path` is percent-encoded, so a file
    /// named `part#2.gcode` stays one path segment instead of becoming a
    /// fragment.
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base_url = self.config.base_url()?;
        let mut url = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base_url {}: {}", base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base_url {} cannot hold a path", base_url)))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    /// Send a request to OctoPrint.
    async fn send(&self, request: &Request) -> Result<Response> {
        let session = self.session().await?;
        let url = self.endpoint_url(request.path())?;
        debug!(method = %request.method(), url = %url, "Sending request");

        let builder = match request.method() {
            Method::Get => session.get(url.clone()).query(request.params()),
            Method::Post => session.post(url.clone()).json(request.params()),
        };

        builder.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused(url.to_string())
            } else {
                Error::Http(e)
            }
        })
    }
}

/// Compare the response status against the expected one and read the body.
///
/// A mismatch is logged and returned as [`Error::UnexpectedStatus`] with the
/// raw body attached, or an empty body if it could not be read.
async fn check_response(response: Response, expected: StatusCode) -> Result<String> {
    let status = response.status();

    if status != expected {
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, expected = %expected, body = %body, "Unexpected status code");
        return Err(Error::UnexpectedStatus {
            expected,
            status,
            body,
        });
    }

    Ok(response.text().await?)
}

fn to_params<P>(params: &P) -> Result<serde_json::Value>
where
    P: Serialize + ?Sized,
{
    serde_json::to_value(params)
        .map_err(|e| Error::InvalidArgument(format!("invalid parameters: {}", e)))
}

/// Builder for creating a customized [`OctoClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use octoapi::OctoClient;
///
/// let client = OctoClient::builder()
///     .url("http://octopi.local")
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: Config,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a builder with an empty config.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the whole config, e.g. one from [`Config::load`].
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the OctoPrint server URL (without `/api`).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> OctoClient {
        OctoClient {
            config: self.config,
            timeout: self.timeout,
            session: OnceCell::new(),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
