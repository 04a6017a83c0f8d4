//! Operating system search policy.

use serde::{Deserialize, Serialize};

/// Search policy families.
///
/// Windows has no usable system binary directories for the tools we look
/// for and requires the `.exe` suffix; everything else shares the Unix
/// layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    Unix,
}

const UNIX_BIN_DIRS: &[&str] = &[
    "/usr/local/bin/",
    "/usr/local/sbin/",
    "/usr/bin/",
    "/usr/sbin/",
    "/bin/",
    "/sbin/",
    "/opt/local/bin/",
    "/opt/local/sbin/",
    "/opt/bin/",
    "/opt/sbin/",
];

impl Os {
    /// The family of the running platform.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Fixed system directories, highest priority first.
    pub fn system_bin_dirs(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &[],
            Self::Unix => UNIX_BIN_DIRS,
        }
    }

    pub fn exe_suffix(self) -> Option<&'static str> {
        match self {
            Self::Windows => Some(".exe"),
            Self::Unix => None,
        }
    }
}

impl Default for Os {
    fn default() -> Self {
        Self::current()
    }
}
