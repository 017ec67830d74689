//! Global error handling for pasteflow
//!
//! Only structurally invalid input fails an operation. Problems with a single
//! file are reported as [`crate::types::Warning`] values instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for pasteflow operations
#[derive(Error, Debug)]
pub enum PasteFlowError {
    /// The analysis root does not exist, is not a directory, or cannot be listed
    #[error("Cannot access root directory {path}: {source}")]
    InaccessibleRoot {
        /// Root as supplied by the caller
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// File system errors outside of traversal (output, selection files)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Clipboard delivery errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PasteFlowError {
    pub(crate) fn inaccessible_root(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InaccessibleRoot {
            path: path.into(),
            source,
        }
    }
}

/// Specialized Result type for pasteflow operations
pub type Result<T> = std::result::Result<T, PasteFlowError>;

/// Creates a PasteFlowError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::PasteFlowError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets the binary keep an io::Result main
impl From<PasteFlowError> for io::Error {
    fn from(err: PasteFlowError) -> Self {
        match err {
            PasteFlowError::Io(e) => e,
            other => {
                let kind = if matches!(other, PasteFlowError::InaccessibleRoot { .. }) {
                    io::ErrorKind::NotFound
                } else {
                    io::ErrorKind::Other
                };
                io::Error::new(kind, other.to_string())
            }
        }
    }
}
