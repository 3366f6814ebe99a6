use std::fmt;

/// Where a file is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FileLocation {
    /// OctoPrint's upload folder.
    #[default]
    Local,
    /// The printer's SD card.
    Sdcard,
}

impl FileLocation {
    /// The path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileLocation::Local => "local",
            FileLocation::Sdcard => "sdcard",
        }
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
