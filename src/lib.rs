mod adapter;
mod cli;
mod command;
mod dispatch;
mod error;
mod linux;
mod mac;
mod macos;
mod probe;
mod windows;

use std::fmt;

pub use adapter::{change_mac, ChangeReport, PlatformAdapter, Stage, StepOutcome};
pub use cli::{Args, USAGE};
pub use command::{display_command, CommandOutput, CommandRunner, Output, SystemRunner};
pub use dispatch::{dispatch, Outcome};
pub use error::{ChangeMacError, ErrorKind, Result};
pub use linux::LinuxAdapter;
pub use mac::{generate_random_mac, is_valid_mac, MacAddress};
pub use macos::{MacOsAdapter, AIRPORT};
pub use probe::{interface_exists, is_wifi_macos, require_tool};
pub use windows::WindowsAdapter;

/// Host operating system, as far as this tool cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    Other(String),
}

impl Platform {
    pub fn current() -> Self {
        Platform::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            other => Platform::Other(other.to_owned()),
        }
    }

    /// Name of the account class allowed to reconfigure interfaces.
    pub fn privileged_role(&self) -> &'static str {
        match self {
            Platform::Windows => "admin",
            _ => "root",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => f.write_str("Linux"),
            Platform::Windows => f.write_str("Windows"),
            Platform::MacOs => f.write_str("macOS"),
            Platform::Other(name) => f.write_str(name),
        }
    }
}

/// Process-wide facts gathered once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub platform: Platform,
    pub privileged: bool,
}

impl Context {
    pub fn detect() -> Self {
        Context {
            platform: Platform::current(),
            privileged: is_privileged(),
        }
    }
}

#[cfg(unix)]
fn is_privileged() -> bool {
    nix::unistd::Uid::effective().is_root()
}

#[cfg(windows)]
fn is_privileged() -> bool {
    is_elevated::is_elevated()
}

#[cfg(not(any(unix, windows)))]
fn is_privileged() -> bool {
    false
}
