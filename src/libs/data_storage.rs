//! Location of rollcall's files on disk.
//!
//! `config.json` and the default `rollcall.db` share one per-OS application
//! data directory:
//!
//! - Linux: `$HOME/.local/share/rollcall/rollcall`
//! - macOS: `$HOME/Library/Application Support/rollcall/rollcall`
//! - Windows: `%LOCALAPPDATA%\rollcall\rollcall`

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

/// Publisher directory. rollcall has no publisher namespace of its own, so
/// the vendor level repeats the application name and keeps the usual
/// `<vendor>/<app>` layout.
pub const VENDOR_NAME: &str = "rollcall";
pub const APP_NAME: &str = "rollcall";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    /// The application data directory for the current OS and user.
    pub fn new() -> Self {
        Self::at(Self::os_data_dir().join(VENDOR_NAME).join(APP_NAME))
    }

    /// A data directory rooted at `base_path`, e.g. a temporary one.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` in the data directory. The directory is created
    /// on first use so callers can open or write the file directly.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }

    fn os_data_dir() -> PathBuf {
        let home = || PathBuf::from(var("HOME").unwrap_or_else(|_| ".".into()));
        match OS {
            "windows" => PathBuf::from(var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
            "macos" => home().join("Library").join("Application Support"),
            _ => home().join(".local").join("share"),
        }
    }
}
