//! Typed arguments for OctoPrint commands.
//!
//! Each type enumerates the fields an endpoint recognizes, so commands are
//! built from checked values rather than free-form maps.

mod connection;
mod files;
mod job;
mod printhead;
mod system;

pub use connection::ConnectOptions;
pub use files::FileLocation;
pub use job::PauseAction;
pub use printhead::{Axis, Jog};
pub use system::CommandSource;
