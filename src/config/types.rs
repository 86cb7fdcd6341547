use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::state::Dimensions;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Display size used until the driver reports its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Cells per row (default: 40).
    #[serde(default = "default_width")]
    pub width: usize,
    /// Rows per page, header included (default: 9).
    #[serde(default = "default_height")]
    pub height: usize,
}

impl DisplayConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Where books, state and logs live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_library_dir")]
    pub library_dir: PathBuf,
    /// Mount point of the USB stick.
    #[serde(default = "default_usb_dir")]
    pub usb_dir: PathBuf,
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
    /// Log file copied by "backup log to USB stick".
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// How often the buttons are polled, in milliseconds (default: 100).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_width() -> usize {
    40
}

fn default_height() -> usize {
    9
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("canute-ui")
}

fn default_library_dir() -> PathBuf {
    data_dir().join("books")
}

fn default_usb_dir() -> PathBuf {
    PathBuf::from("/media/usb0")
}

fn default_state_file() -> PathBuf {
    data_dir().join("state.json")
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            library_dir: default_library_dir(),
            usb_dir: default_usb_dir(),
            state_file: default_state_file(),
            log_file: None,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
