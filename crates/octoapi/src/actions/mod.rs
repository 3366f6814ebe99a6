//! Action modules for OctoPrint operations.
//!
//! Each module covers one API resource. It exposes plain functions that build
//! the [`Request`](crate::Request) for every endpoint, plus an action group
//! (obtained from [`OctoClient`](crate::OctoClient)) that sends them.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

pub mod bed;
pub mod connection;
pub mod files;
pub mod job;
pub mod misc;
pub mod printer;
pub mod printhead;
pub mod profiles;
pub mod sd;
pub mod settings;
pub mod system;
pub mod tool;

pub use bed::BedActions;
pub use connection::ConnectionActions;
pub use files::FileActions;
pub use job::JobActions;
pub use misc::MiscActions;
pub use printer::PrinterActions;
pub use printhead::PrintheadActions;
pub use profiles::ProfileActions;
pub use sd::SdActions;
pub use settings::SettingsActions;
pub use system::SystemActions;
pub use tool::ToolActions;

/// Read the field at `pointer` (JSON Pointer syntax) out of a response.
pub(crate) fn project<T>(value: &Value, pointer: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let field = value
        .pointer(pointer)
        .ok_or_else(|| Error::MissingField(pointer.to_string()))?;
    T::deserialize(field).map_err(Error::Decode)
}
