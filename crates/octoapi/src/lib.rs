//! An async Rust client for the OctoPrint REST API.
//!
//! Every endpoint maps to one function. Each function sends a single request,
//! checks the status code the endpoint documents, and decodes the JSON body
//! when there is one.
//!
//! # Quick Start
//!
//! ```no_run
//! use octoapi::OctoClient;
//!
//! # async fn example() -> octoapi::Result<()> {
//! // Reads the API key and server URL from ~/.octoapi.conf
//! let client = OctoClient::new()?;
//!
//! if client.printer().is_printing().await? {
//!     let done = client.job().completion().await?.unwrap_or_default();
//!     println!("{:.1}% done", done);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! The config file is a JSON object:
//!
//! ```json
//! { "api_key": "0123456789ABCDEF", "base_url": "http://octopi.local" }
//! ```
//!
//! Or configure the client directly:
//!
//! ```no_run
//! use std::time::Duration;
//! use octoapi::OctoClient;
//!
//! let client = OctoClient::builder()
//!     .url("http://octopi.local")
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(10))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! - [`OctoClient::printer()`] - Printer state and raw G-code
//! - [`OctoClient::printhead()`] - Home, jog, feed rate
//! - [`OctoClient::tool()`] - Extruder temperatures, offsets, extrusion, flow rate
//! - [`OctoClient::bed()`] - Bed temperature and offset
//! - [`OctoClient::sd()`] - SD card state and control
//! - [`OctoClient::connection()`] - Connect and disconnect the printer
//! - [`OctoClient::job()`] - Start, pause, cancel, progress
//! - [`OctoClient::files()`] - List, select, print, copy, move
//! - [`OctoClient::settings()`] - Read and update settings
//! - [`OctoClient::profiles()`] - Printer profiles
//! - [`OctoClient::system()`] - Registered system commands
//! - [`OctoClient::misc()`] - Version, logs, users
//!
//! # Requests
//!
//! Each action module also exposes the [`Request`] for every endpoint, built
//! without any I/O:
//!
//! ```
//! use octoapi::actions::printhead;
//!
//! // Feed rate is clamped to 50..=200 percent
//! assert_eq!(printhead::feedrate(500), printhead::feedrate(200));
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod limits;
mod request;
pub mod types;

pub use client::{ClientBuilder, OctoClient};
pub use config::Config;
pub use error::{Error, Result};
pub use request::{Method, Request};
pub use types::{Axis, CommandSource, ConnectOptions, FileLocation, Jog, PauseAction};
