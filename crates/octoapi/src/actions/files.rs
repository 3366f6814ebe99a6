//! File-related OctoPrint actions.
//!
//! List stored files and select, print, copy or move them.
//!
//! # Example
//!
//! ```no_run
//! use octoapi::OctoClient;
//!
//! # async fn example() -> octoapi::Result<()> {
//! let client = OctoClient::new()?;
//!
//! let files = client.files().list(true).await?;
//! println!("{}", files["files"]);
//!
//! client.files().print("benchy.gcode").await?;
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use serde_json::Value;

use crate::client::OctoClient;
use crate::error::Result;
use crate::request::Request;
use crate::types::FileLocation;

const PATH: &str = "files";

/// List files in every location.
pub fn list(recursive: bool) -> Request {
    with_recursive(Request::get(PATH), recursive)
}

/// List files in one location.
pub fn list_location(location: FileLocation, recursive: bool) -> Request {
    with_recursive(Request::get(format!("{}/{}", PATH, location)), recursive)
}

/// Retrieve information about a single file or folder.
pub fn info(location: FileLocation, path: &str) -> Request {
    Request::get(file_path(location, path))
}

/// Select a file, optionally starting the print right away.
pub fn select(location: FileLocation, path: &str, print: bool) -> Request {
    Request::post(file_path(location, path))
        .param("command", "select")
        .param("print", print)
}

/// Select a local file and print it.
pub fn print(path: &str) -> Request {
    select(FileLocation::Local, path, true)
}

/// Copy a local file or folder to `destination`.
pub fn copy(path: &str, destination: &str) -> Request {
    transfer("copy", path, destination)
}

/// Move a local file or folder to `destination`.
pub fn move_to(path: &str, destination: &str) -> Request {
    transfer("move", path, destination)
}

fn transfer(command: &str, path: &str, destination: &str) -> Request {
    Request::post(file_path(FileLocation::Local, path))
        .param("command", command)
        .param("destination", destination)
        .expect(StatusCode::CREATED)
}

fn with_recursive(request: Request, recursive: bool) -> Request {
    if recursive {
        request.param("recursive", true)
    } else {
        request
    }
}

fn file_path(location: FileLocation, path: &str) -> String {
    format!("{}/{}/{}", PATH, location, path.trim_start_matches('/'))
}

/// Provides access to file operations.
///
/// Obtained via [`OctoClient::files()`].
#[derive(Debug)]
pub struct FileActions<'a> {
    pub(crate) client: &'a OctoClient,
}

impl<'a> FileActions<'a> {
    /// List all files, descending into folders if `recursive`.
    pub async fn list(&self, recursive: bool) -> Result<Value> {
        self.client.retrieve(&list(recursive)).await
    }

    /// List the files stored in `location`.
    pub async fn list_location(&self, location: FileLocation, recursive: bool) -> Result<Value> {
        self.client
            .retrieve(&list_location(location, recursive))
            .await
    }

    /// Get information about one file.
    pub async fn info(&self, location: FileLocation, path: &str) -> Result<Value> {
        self.client.retrieve(&info(location, path)).await
    }

    /// Select a file for printing.
    pub async fn select(&self, location: FileLocation, path: &str, print: bool) -> Result<()> {
        self.client.issue(&select(location, path, print)).await
    }

    /// Select a local file and start printing it.
    pub async fn print(&self, path: &str) -> Result<()> {
        self.client.issue(&print(path)).await
    }

    /// Copy a local file.
    ///
    /// `destination` is a folder path relative to the upload root.
    pub async fn copy(&self, path: &str, destination: &str) -> Result<()> {
        self.client.issue(&copy(path, destination)).await
    }

    /// Move a local file.
    pub async fn move_to(&self, path: &str, destination: &str) -> Result<()> {
        self.client.issue(&move_to(path, destination)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn test_list_paths() {
        assert_eq!(list(false).path(), "files");
        assert!(list(false).params().is_empty());
        assert_eq!(list(true).params()["recursive"], true);

        let sd = list_location(FileLocation::Sdcard, false);
        assert_eq!(sd.method(), Method::Get);
        assert_eq!(sd.path(), "files/sdcard");
    }

    #[test]
    fn test_select_and_print() {
        let request = select(FileLocation::Local, "parts/bracket.gcode", false);
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.path(), "files/local/parts/bracket.gcode");
        assert_eq!(request.expected_status(), StatusCode::NO_CONTENT);
        assert_eq!(request.params()["print"], false);

        assert_eq!(
            print("benchy.gcode"),
            select(FileLocation::Local, "benchy.gcode", true)
        );
    }

    #[test]
    fn test_copy_and_move_expect_created() {
        let request = copy("benchy.gcode", "archive");
        assert_eq!(request.path(), "files/local/benchy.gcode");
        assert_eq!(request.expected_status(), StatusCode::CREATED);
        assert_eq!(request.params()["command"], "copy");
        assert_eq!(request.params()["destination"], "archive");

        let request = move_to("benchy.gcode", "archive");
        assert_eq!(request.expected_status(), StatusCode::CREATED);
        assert_eq!(request.params()["command"], "move");
    }

    #[test]
    fn test_leading_slash_is_trimmed() {
        assert_eq!(
            info(FileLocation::Local, "/benchy.gcode").path(),
            "files/local/benchy.gcode"
        );
    }
}
