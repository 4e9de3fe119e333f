//! Transport execution
//!
//! Concrete plumbing between the orchestrator and the driver interfaces:
//! the timeout wrapper every driver call runs under, the explicit
//! connect → write → disconnect sequence for serial transports, and a raw
//! TCP implementation of the native-driver interface.

use crate::driver::{DeviceInfo, NativeThermalDriver, PortType, SerialPort, TransportTarget};
use async_trait::async_trait;
use prawn_printer::{NetworkPrinter, PrintError, PrintResult, Printer};
use std::future::Future;
use std::time::Duration;
use tracing::{instrument, warn};

/// Default terminal-signal timeout for driver calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Await a driver operation, converting silence into a `Timeout` failure
///
/// Native calls that never signal completion would otherwise leave the
/// attempt stuck in `Connecting`/`Sending` forever.
pub async fn with_timeout<T>(
    timeout: Duration,
    what: &str,
    fut: impl Future<Output = PrintResult<T>>,
) -> PrintResult<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| PrintError::Timeout(what.to_string()))?
}

/// Send a payload over a Bluetooth serial channel
///
/// State machine: Idle → Connecting → Sending → (Success | Failed) → Idle.
/// Once the connection is established, disconnect runs on every exit path;
/// a failed disconnect is logged and swallowed since the channel is being
/// abandoned anyway. Connect failures surface as `ConnectionFailed`, write
/// failures as `WriteFailed`, never the other way around.
#[instrument(skip(port, payload), fields(payload_len = payload.len()))]
pub async fn serial_print(
    port: &dyn SerialPort,
    timeout: Duration,
    device_id: &str,
    payload: &str,
) -> PrintResult<()> {
    // Connecting
    with_timeout(timeout, "connecting", port.connect(device_id))
        .await
        .map_err(|e| match e {
            PrintError::Timeout(w) => PrintError::Timeout(w),
            PrintError::ConnectionFailed(m) => PrintError::ConnectionFailed(m),
            other => PrintError::ConnectionFailed(other.to_string()),
        })?;

    // Sending
    let write_result = with_timeout(timeout, "writing", port.write(payload)).await;

    // Cleanup happens before the write outcome is surfaced.
    if let Err(e) = with_timeout(timeout, "disconnecting", port.disconnect()).await {
        warn!(error = %e, "disconnect after send failed");
    }

    write_result.map_err(|e| match e {
        PrintError::Timeout(w) => PrintError::Timeout(w),
        PrintError::WriteFailed(m) => PrintError::WriteFailed(m),
        other => PrintError::WriteFailed(other.to_string()),
    })
}

/// Raw TCP implementation of [`NativeThermalDriver`]
///
/// Streams the payload verbatim to `address:port` (demo convention 9100)
/// via [`NetworkPrinter`]; useful against printer emulators and firmware
/// that accepts the dialect directly. Bluetooth and USB operations are
/// unsupported here — those need a real platform driver.
#[derive(Debug, Clone)]
pub struct RawTcpDriver {
    timeout: Duration,
}

impl RawTcpDriver {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RawTcpDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NativeThermalDriver for RawTcpDriver {
    async fn request_bt_permissions(&self) -> PrintResult<()> {
        Err(PrintError::Unsupported(
            "bluetooth is not available over raw TCP".into(),
        ))
    }

    async fn list_printers(&self, _port: PortType) -> PrintResult<Vec<DeviceInfo>> {
        Err(PrintError::Unsupported(
            "discovery is not available over raw TCP".into(),
        ))
    }

    async fn request_usb_permission(&self, _device: &DeviceInfo) -> PrintResult<()> {
        Err(PrintError::Unsupported(
            "USB is not available over raw TCP".into(),
        ))
    }

    async fn print_formatted(&self, target: &TransportTarget, text: &str) -> PrintResult<()> {
        let TransportTarget::Tcp { address, port } = target else {
            return Err(PrintError::Unsupported(
                "raw TCP driver only handles network targets".into(),
            ));
        };
        let printer = NetworkPrinter::new(address, *port)?.with_timeout(self.timeout);
        printer.print(text.as_bytes()).await
    }
}
