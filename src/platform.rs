//! Host operating system identification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The operating system a run targets.
///
/// Decided once at startup. `Other` is a valid value, not an error: only the
/// install step refuses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Os {
    /// Microsoft Windows, driven through the compatibility shell.
    Windows,
    /// Any Linux distribution with `apt`.
    Linux,
    /// macOS with Homebrew.
    MacOs,
    /// Anything else, carrying the name it was detected or requested as.
    Other(String),
}

impl Os {
    /// Maps an OS name to an identifier. Matching is case-insensitive and
    /// `darwin` is accepted for macOS; unknown names keep their spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::MacOs,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Suffix the platform requires on executable file names.
    #[must_use]
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            _ => "",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("Windows"),
            Self::Linux => f.write_str("Linux"),
            Self::MacOs => f.write_str("macOS"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Detects the OS this binary was compiled for.
#[must_use]
pub fn detect_os() -> Os {
    Os::from_name(std::env::consts::OS)
}
