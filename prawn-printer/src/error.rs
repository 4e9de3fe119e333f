//! Error types for the printing stack

use thiserror::Error;

/// Printing error taxonomy
///
/// Every transport driver failure maps to one of these variants. The
/// orchestrator catches them at its boundary and turns them into status
/// messages; none of them should ever reach the UI layer as a panic.
#[derive(Debug, Error)]
pub enum PrintError {
    /// A required permission was not granted (Bluetooth scan, USB access)
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The Bluetooth adapter is turned off
    #[error("bluetooth adapter is disabled")]
    AdapterDisabled,

    /// Discovery finished without finding any printer
    #[error("no printer found")]
    DeviceNotFound,

    /// Could not establish a connection to the printer
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Connected, but sending the payload failed
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// An operation produced no terminal signal in time
    #[error("timeout while {0}")]
    Timeout(String),

    /// The requested transport is not available on this platform
    #[error("not supported on this platform: {0}")]
    Unsupported(String),

    /// The user dismissed the OS print dialog
    #[error("print dialog was cancelled")]
    UserCancelled,

    /// Invalid target configuration (address, port, missing device id)
    #[error("{0}")]
    InvalidConfig(String),

    /// The document cannot be rendered for the requested dialect
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for printing operations
pub type PrintResult<T> = Result<T, PrintError>;
