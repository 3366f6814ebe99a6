//! Serial connection types.

/// Options for connecting to the printer.
///
/// Every field is optional; OctoPrint falls back to its saved preferences
/// for anything left unset.
///
/// # Example
///
/// ```
/// use octoapi::ConnectOptions;
///
/// let options = ConnectOptions::new()
///     .port("/dev/ttyACM0")
///     .baudrate(115200)
///     .save(true);
/// assert_eq!(options.baudrate, Some(115200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Serial port, e.g. `/dev/ttyUSB0` or `AUTO`.
    pub port: Option<String>,
    /// Baud rate.
    pub baudrate: Option<u32>,
    /// Printer profile identifier.
    pub printer_profile: Option<String>,
    /// Persist these settings as the new defaults.
    pub save: Option<bool>,
    /// Connect automatically on server startup.
    pub autoconnect: Option<bool>,
}

impl ConnectOptions {
    /// Options with everything left to the server's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serial port.
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the baud rate.
    pub fn baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = Some(baudrate);
        self
    }

    /// Set the printer profile.
    pub fn printer_profile(mut self, profile: impl Into<String>) -> Self {
        self.printer_profile = Some(profile.into());
        self
    }

    /// Save the connection settings.
    pub fn save(mut self, save: bool) -> Self {
        self.save = Some(save);
        self
    }

    /// Enable or disable autoconnect.
    pub fn autoconnect(mut self, autoconnect: bool) -> Self {
        self.autoconnect = Some(autoconnect);
        self
    }
}
