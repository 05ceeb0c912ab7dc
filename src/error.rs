use thiserror::Error;

use crate::adapter::Stage;

const HINT: &str = "Try 'changemac -h' for more info.";

/// Broad class of a [`ChangeMacError`], used to decide how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or contradictory arguments.
    Usage,
    /// The host is not in a state where a change can be attempted.
    Precondition,
    /// A single command of the change sequence failed.
    Step,
}

#[derive(Error, Debug)]
pub enum ChangeMacError {
    #[error("No interface provided.\n{}", HINT)]
    MissingInterface,
    #[error("No MAC address provided.\n{}", HINT)]
    MissingMac,
    #[error("You can not use -r/--random and -m/--mac options together.\n{}", HINT)]
    ConflictingMacSource,
    #[error("Not a valid unicast MAC address: {0}")]
    InvalidMac(String),

    #[error("{0} package does not exist. Please install it first and try again.")]
    MissingTool(String),
    #[error("Not a valid interface: {0}")]
    UnknownInterface(String),
    #[error("Please run the program as {0} and try again.")]
    NotPrivileged(&'static str),
    #[error("Unknown OS detected ({0}). This platform is not supported")]
    UnsupportedPlatform(String),

    #[error("{stage} step failed running `{command}`: {detail}")]
    StepFailed {
        stage: Stage,
        command: String,
        detail: String,
    },
}

impl ChangeMacError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChangeMacError::MissingInterface
            | ChangeMacError::MissingMac
            | ChangeMacError::ConflictingMacSource
            | ChangeMacError::InvalidMac(_) => ErrorKind::Usage,
            ChangeMacError::MissingTool(_)
            | ChangeMacError::UnknownInterface(_)
            | ChangeMacError::NotPrivileged(_)
            | ChangeMacError::UnsupportedPlatform(_) => ErrorKind::Precondition,
            ChangeMacError::StepFailed { .. } => ErrorKind::Step,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChangeMacError>;
