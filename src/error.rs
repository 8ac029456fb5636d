//! Error types for the WFD capability codec

use thiserror::Error;

/// Errors produced while building or decoding WFD device information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WfdError {
    /// Device type outside of 0..=3
    #[error("invalid WFD device type: {0} (expected 0..=3)")]
    InvalidDeviceType(i32),

    /// Wire input is shorter than the fixed record size
    #[error("truncated WFD record: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    /// A hex subelement could not be parsed
    #[error("invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    /// The R2 subelement did not carry the expected leading tag
    #[error("unexpected subelement tag: expected {expected:#06x}, found {found:#06x}")]
    UnexpectedSubelementTag { expected: u16, found: u16 },
}

pub type Result<T> = std::result::Result<T, WfdError>;
