//! Transport driver interfaces
//!
//! The native plugins (Bluetooth stacks, USB drivers, OS print dialogs)
//! are opaque capability providers supplied by the host shell. Each trait
//! here mirrors one of them; every operation is asynchronous and resolves
//! exactly once with a typed result. Implementations must not block the
//! caller.

use async_trait::async_trait;
use prawn_printer::{PrintError, PrintResult};
use serde::{Deserialize, Serialize};

/// A discovered printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: String,
    pub name: String,
}

impl DeviceInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Which port class a native driver should enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortType {
    Bluetooth,
    Usb,
}

/// The resolved delivery target of one print attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportTarget {
    Bluetooth { device_id: String },
    Usb { device_id: String },
    Tcp { address: String, port: u16 },
}

impl TransportTarget {
    /// Build a validated TCP target; the raw-socket printing convention
    /// uses port 9100.
    pub fn tcp(address: impl Into<String>, port: u16) -> PrintResult<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(PrintError::InvalidConfig(
                "printer address is empty".into(),
            ));
        }
        if port == 0 {
            return Err(PrintError::InvalidConfig(
                "port must be between 1 and 65535".into(),
            ));
        }
        Ok(Self::Tcp { address, port })
    }
}

/// Native thermal-printer driver
///
/// Accepts the markup dialect and manages its own connection lifecycle:
/// one `print_formatted` call covers connect, send and disconnect.
#[async_trait]
pub trait NativeThermalDriver: Send + Sync {
    /// Request the Bluetooth permissions discovery needs
    async fn request_bt_permissions(&self) -> PrintResult<()>;

    /// Enumerate printers on the given port class
    async fn list_printers(&self, port: PortType) -> PrintResult<Vec<DeviceInfo>>;

    /// Ask the user to grant access to a specific USB device
    async fn request_usb_permission(&self, device: &DeviceInfo) -> PrintResult<()>;

    /// Deliver a markup-dialect payload to the target
    async fn print_formatted(&self, target: &TransportTarget, text: &str) -> PrintResult<()>;
}

/// Generic Bluetooth serial channel
///
/// Unlike the native driver this is a bare pipe: the caller owns the
/// connect → write → disconnect sequence (see
/// [`crate::transport::serial_print`]).
#[async_trait]
pub trait SerialPort: Send + Sync {
    /// Whether the Bluetooth radio is currently enabled
    async fn is_enabled(&self) -> bool;

    /// List paired devices
    async fn list(&self) -> PrintResult<Vec<DeviceInfo>>;

    async fn connect(&self, device_id: &str) -> PrintResult<()>;

    async fn write(&self, data: &str) -> PrintResult<()>;

    async fn disconnect(&self) -> PrintResult<()>;
}

/// OS print service
#[async_trait]
pub trait PrintDialog: Send + Sync {
    /// Present the platform print dialog with the rendered HTML.
    /// Returns `false` when the user cancels.
    async fn print_html(&self, html: &str, job_name: &str) -> PrintResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tcp_target_rejects_port_zero() {
        let err = TransportTarget::tcp("192.168.1.100", 0).unwrap_err();
        assert!(matches!(err, PrintError::InvalidConfig(_)));
    }

    #[test]
    fn tcp_target_rejects_empty_address() {
        let err = TransportTarget::tcp("", 9100).unwrap_err();
        assert!(matches!(err, PrintError::InvalidConfig(_)));
    }

    #[test]
    fn tcp_target_accepts_demo_default() {
        let target = TransportTarget::tcp("192.168.1.100", 9100).unwrap();
        assert_eq!(
            target,
            TransportTarget::Tcp {
                address: "192.168.1.100".into(),
                port: 9100
            }
        );
    }
}
