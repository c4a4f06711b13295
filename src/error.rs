//! Error module for the Kuramoto library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum KuramotoError {
    /// Error for a per-oscillator array whose length differs from the network size.
    SizeMismatch {
        field: String,
        expected: usize,
        found: usize,
    },
    /// Error for invalid parameters, e.g., a negative frequency spread.
    InvalidParameter(String),
    /// Error for I/O operations.
    IOError(String),
}

impl KuramotoError {
    /// Returns a size mismatch error for the given field.
    pub fn size_mismatch(field: &str, expected: usize, found: usize) -> Self {
        KuramotoError::SizeMismatch {
            field: field.to_string(),
            expected,
            found,
        }
    }
}

impl fmt::Display for KuramotoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KuramotoError::SizeMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "Size of {} vector not equal to system size: expected {}, found {}",
                field, expected, found
            ),
            KuramotoError::InvalidParameter(e) => write!(f, "Invalid parameters: {}", e),
            KuramotoError::IOError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for KuramotoError {}
