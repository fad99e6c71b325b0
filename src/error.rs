use miette::Diagnostic;
use thiserror::Error;

use crate::codec::Location;

/// Main error type for pgm operations
#[derive(Error, Diagnostic, Debug)]
pub enum PgmError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pgm::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pgm::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Format error at {location}: {message}")]
    #[diagnostic(code(pgm::format))]
    Format {
        message: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid state: {message}")]
    #[diagnostic(code(pgm::state))]
    InvalidState {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(pgm::argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pgm::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PgmError {
    pub fn format(message: impl Into<String>, location: Location) -> Self {
        PgmError::Format {
            message: message.into(),
            location,
            help: None,
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        PgmError::InvalidState {
            message: message.into(),
            help: None,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PgmError::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }

    /// Attach help text to errors that carry it.
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            PgmError::Format { help, .. }
            | PgmError::InvalidState { help, .. }
            | PgmError::InvalidArgument { help, .. }
            | PgmError::Config { help, .. } => *help = Some(text.into()),
            PgmError::IoError(_) | PgmError::Io { .. } => {}
        }
        self
    }

    pub fn is_format(&self) -> bool {
        matches!(self, PgmError::Format { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, PgmError::InvalidState { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PgmError::InvalidArgument { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, PgmError::IoError(_) | PgmError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, PgmError>;
