use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Error classification reported by the platform SDK.
///
/// The set of codes is owned by the platform and may grow between SDK
/// releases; codes this crate does not know about yet are preserved verbatim
/// in the `Unknown` variant rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The operation is not supported on the current platform.
    UnsupportedPlatform,
    /// The client does not support the requested operation.
    ClientUnsupportedOperation,
    /// The payment subsystem has not finished initializing for this session.
    PaymentsNotInitialized,
    /// A parameter passed to the operation was invalid.
    InvalidParam,
    /// The network call to the platform failed.
    NetworkFailure,
    /// The operation is invalid in the current session state.
    InvalidOperation,
    /// The player dismissed or rejected the native purchase interaction.
    UserInput,

    #[serde(untagged)]
    Unknown(String),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::UnsupportedPlatform => write!(f, "UNSUPPORTED_PLATFORM"),
            ErrorCode::ClientUnsupportedOperation => write!(f, "CLIENT_UNSUPPORTED_OPERATION"),
            ErrorCode::PaymentsNotInitialized => write!(f, "PAYMENTS_NOT_INITIALIZED"),
            ErrorCode::InvalidParam => write!(f, "INVALID_PARAM"),
            ErrorCode::NetworkFailure => write!(f, "NETWORK_FAILURE"),
            ErrorCode::InvalidOperation => write!(f, "INVALID_OPERATION"),
            ErrorCode::UserInput => write!(f, "USER_INPUT"),
            ErrorCode::Unknown(code) => write!(f, "{code}"),
        }
    }
}

/// Failure raised by the platform SDK for an asynchronous operation.
///
/// This crate never produces errors of its own and never translates, retries,
/// or recovers from platform failures; whatever the platform rejects with is
/// what the caller receives.
#[derive(Debug, Clone, PartialEq, Eq, Error, Deserialize)]
#[error("{code}: {message}")]
pub struct PaymentsError {
    pub code: ErrorCode,
    pub message: String,
}

impl PaymentsError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
