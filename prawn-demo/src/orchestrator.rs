//! Print orchestration
//!
//! The orchestrator owns one print attempt end to end: it resolves which
//! transport and dialect to use from the user's selection and the platform
//! capabilities, renders the document, drives the chosen driver, and
//! reports the outcome through the status interface. It never returns an
//! error to its caller — every failure becomes a status message.

use crate::document::{Document, DocumentVariant};
use crate::driver::{
    DeviceInfo, NativeThermalDriver, PortType, PrintDialog, SerialPort, TransportTarget,
};
use crate::platform::{CapabilitySet, Platform, PlatformKind};
use crate::render::{Dialect, render};
use crate::status::StatusReporter;
use crate::transport::{DEFAULT_TIMEOUT, serial_print, with_timeout};
use prawn_printer::{PrintError, PrintResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// The transport type the user picked in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportChoice {
    Bluetooth,
    Usb,
    Network,
}

/// The transport actually used for one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    BluetoothNative,
    BluetoothSerial,
    Usb,
    Network,
    OsPrintFallback,
}

/// Current UI selection, rebuilt per print action
#[derive(Debug, Clone)]
pub struct Selection {
    pub transport: TransportChoice,
    pub device_id: Option<String>,
    pub address: Option<String>,
    pub port: Option<u16>,
}

impl Selection {
    pub fn bluetooth(device_id: impl Into<String>) -> Self {
        Self {
            transport: TransportChoice::Bluetooth,
            device_id: Some(device_id.into()),
            address: None,
            port: None,
        }
    }

    pub fn usb() -> Self {
        Self {
            transport: TransportChoice::Usb,
            device_id: None,
            address: None,
            port: None,
        }
    }

    pub fn network(address: impl Into<String>, port: u16) -> Self {
        Self {
            transport: TransportChoice::Network,
            device_id: None,
            address: Some(address.into()),
            port: Some(port),
        }
    }
}

/// Resolve which transport and dialect serve a selection
///
/// Pure function of the selection, the platform kind and the installed
/// capabilities; first match wins:
///
/// 1. Bluetooth + native driver (Android) → native driver, markup
/// 2. Bluetooth + serial channel → serial, ESC/POS
/// 3. USB + native driver + USB host (Android) → native driver, markup
/// 4. Network + native driver → native driver, markup
/// 5. Network + OS print service → print dialog, HTML
/// 6. otherwise → not printable
pub fn resolve(
    choice: TransportChoice,
    platform: PlatformKind,
    caps: &CapabilitySet,
) -> Option<(TransportKind, Dialect)> {
    match choice {
        TransportChoice::Bluetooth
            if caps.native_thermal_driver && platform == PlatformKind::Android =>
        {
            Some((TransportKind::BluetoothNative, Dialect::Markup))
        }
        TransportChoice::Bluetooth if caps.bluetooth_serial => {
            Some((TransportKind::BluetoothSerial, Dialect::EscPos))
        }
        TransportChoice::Usb
            if caps.native_thermal_driver
                && caps.usb_host
                && platform == PlatformKind::Android =>
        {
            Some((TransportKind::Usb, Dialect::Markup))
        }
        TransportChoice::Network if caps.native_thermal_driver => {
            Some((TransportKind::Network, Dialect::Markup))
        }
        TransportChoice::Network if caps.os_print_service => {
            Some((TransportKind::OsPrintFallback, Dialect::Html))
        }
        _ => None,
    }
}

/// Drives print attempts against the injected platform drivers
pub struct Orchestrator {
    platform: Arc<dyn Platform>,
    reporter: Arc<dyn StatusReporter>,
    native: Option<Arc<dyn NativeThermalDriver>>,
    serial: Option<Arc<dyn SerialPort>>,
    dialog: Option<Arc<dyn PrintDialog>>,
    timeout: Duration,
}

impl Orchestrator {
    pub fn new(platform: Arc<dyn Platform>, reporter: Arc<dyn StatusReporter>) -> Self {
        Self {
            platform,
            reporter,
            native: None,
            serial: None,
            dialog: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_native_driver(mut self, driver: Arc<dyn NativeThermalDriver>) -> Self {
        self.native = Some(driver);
        self
    }

    pub fn with_serial_port(mut self, port: Arc<dyn SerialPort>) -> Self {
        self.serial = Some(port);
        self
    }

    pub fn with_print_dialog(mut self, dialog: Arc<dyn PrintDialog>) -> Self {
        self.dialog = Some(dialog);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one print attempt and report the outcome
    ///
    /// Never returns an error; all failures end up in the status log with
    /// `is_error = true`.
    #[instrument(skip(self, selection), fields(variant = ?variant, transport = ?selection.transport))]
    pub async fn print(&self, variant: DocumentVariant, selection: &Selection) {
        let caps = self.platform.capabilities();
        let Some((kind, dialect)) = resolve(selection.transport, self.platform.kind(), &caps)
        else {
            self.reporter.report(MSG_NOT_AVAILABLE, true);
            return;
        };

        match self.dispatch(kind, dialect, variant, selection).await {
            Ok(()) => self
                .reporter
                .report(&success_message(variant, kind), false),
            Err(e) => self.reporter.report(&failure_message(kind, &e), true),
        }
    }

    /// Discover Bluetooth printers, reporting progress and failures
    ///
    /// Returns an empty list when discovery is unavailable or fails; the
    /// reason is in the status log.
    #[instrument(skip(self))]
    pub async fn discover_printers(&self) -> Vec<DeviceInfo> {
        match self.try_discover().await {
            Ok(devices) => devices,
            Err(e) => {
                self.reporter.report(&discover_failure_message(&e), true);
                Vec::new()
            }
        }
    }

    async fn try_discover(&self) -> PrintResult<Vec<DeviceInfo>> {
        let kind = self.platform.kind();
        if kind == PlatformKind::Other {
            return Err(PrintError::Unsupported(
                "bluetooth discovery needs a real device".into(),
            ));
        }

        let caps = self.platform.capabilities();
        if caps.native_thermal_driver && kind == PlatformKind::Android {
            let driver = self.native()?;
            with_timeout(
                self.timeout,
                "requesting bluetooth permissions",
                driver.request_bt_permissions(),
            )
            .await?;
            let devices = with_timeout(
                self.timeout,
                "listing bluetooth printers",
                driver.list_printers(PortType::Bluetooth),
            )
            .await?;
            self.reporter.report(
                &format!("Found {} Bluetooth devices", devices.len()),
                false,
            );
            Ok(devices)
        } else if caps.bluetooth_serial {
            let port = self.serial()?;
            if !port.is_enabled().await {
                return Err(PrintError::AdapterDisabled);
            }
            let devices =
                with_timeout(self.timeout, "listing paired devices", port.list()).await?;
            self.reporter.report(
                &format!("Found {} paired Bluetooth devices", devices.len()),
                false,
            );
            Ok(devices)
        } else {
            Err(PrintError::Unsupported(
                "no bluetooth capability on this platform".into(),
            ))
        }
    }

    async fn dispatch(
        &self,
        kind: TransportKind,
        dialect: Dialect,
        variant: DocumentVariant,
        selection: &Selection,
    ) -> PrintResult<()> {
        let doc: Document = variant.document_now();
        let payload = render(&doc, dialect)?;

        match kind {
            TransportKind::BluetoothNative => {
                let driver = self.native()?;
                let target = TransportTarget::Bluetooth {
                    device_id: required_device_id(selection)?,
                };
                with_timeout(
                    self.timeout,
                    "printing",
                    driver.print_formatted(&target, &payload),
                )
                .await
            }
            TransportKind::BluetoothSerial => {
                let port = self.serial()?;
                let device_id = required_device_id(selection)?;
                serial_print(port.as_ref(), self.timeout, &device_id, &payload).await
            }
            TransportKind::Usb => {
                let driver = self.native()?;
                let printers = with_timeout(
                    self.timeout,
                    "discovering USB printers",
                    driver.list_printers(PortType::Usb),
                )
                .await?;
                let printer = printers.first().ok_or(PrintError::DeviceNotFound)?;
                with_timeout(
                    self.timeout,
                    "requesting USB permission",
                    driver.request_usb_permission(printer),
                )
                .await?;
                let target = TransportTarget::Usb {
                    device_id: printer.id.clone(),
                };
                with_timeout(
                    self.timeout,
                    "printing",
                    driver.print_formatted(&target, &payload),
                )
                .await
            }
            TransportKind::Network => {
                let driver = self.native()?;
                let target = network_target(selection)?;
                with_timeout(
                    self.timeout,
                    "printing",
                    driver.print_formatted(&target, &payload),
                )
                .await
            }
            TransportKind::OsPrintFallback => {
                let dialog = self.dialog()?;
                // No timeout here: the dialog legitimately waits on the user.
                let accepted = dialog.print_html(&payload, job_name(variant)).await?;
                if accepted {
                    Ok(())
                } else {
                    Err(PrintError::UserCancelled)
                }
            }
        }
    }

    fn native(&self) -> PrintResult<&Arc<dyn NativeThermalDriver>> {
        self.native.as_ref().ok_or_else(|| {
            PrintError::Unsupported("native thermal driver is not installed".into())
        })
    }

    fn serial(&self) -> PrintResult<&Arc<dyn SerialPort>> {
        self.serial
            .as_ref()
            .ok_or_else(|| PrintError::Unsupported("bluetooth serial is not installed".into()))
    }

    fn dialog(&self) -> PrintResult<&Arc<dyn PrintDialog>> {
        self.dialog
            .as_ref()
            .ok_or_else(|| PrintError::Unsupported("OS print service is not installed".into()))
    }
}

const MSG_NOT_AVAILABLE: &str = "Printing is not available on this platform/configuration";

fn required_device_id(selection: &Selection) -> PrintResult<String> {
    selection
        .device_id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            PrintError::InvalidConfig("Please select a Bluetooth printer first".into())
        })
}

fn network_target(selection: &Selection) -> PrintResult<TransportTarget> {
    let (Some(address), Some(port)) = (selection.address.clone(), selection.port) else {
        return Err(PrintError::InvalidConfig(
            "Please enter IP address and port".into(),
        ));
    };
    if address.is_empty() {
        return Err(PrintError::InvalidConfig(
            "Please enter IP address and port".into(),
        ));
    }
    TransportTarget::tcp(address, port)
}

fn job_name(variant: DocumentVariant) -> &'static str {
    match variant {
        DocumentVariant::TestPage => "Test Document",
        DocumentVariant::Receipt => "Receipt",
    }
}

fn success_message(variant: DocumentVariant, kind: TransportKind) -> String {
    let what = match variant {
        DocumentVariant::TestPage => "Test page",
        DocumentVariant::Receipt => "Receipt",
    };
    match kind {
        TransportKind::BluetoothNative | TransportKind::BluetoothSerial => {
            format!("{} printed successfully!", what)
        }
        TransportKind::Usb => format!("{} printed via USB!", what),
        TransportKind::Network => format!("{} printed via network!", what),
        TransportKind::OsPrintFallback => "Document sent to printer".to_string(),
    }
}

fn failure_message(kind: TransportKind, err: &PrintError) -> String {
    match err {
        PrintError::AdapterDisabled => "Please enable Bluetooth to continue".into(),
        PrintError::UserCancelled => "Print canceled".into(),
        PrintError::DeviceNotFound if kind == TransportKind::Usb => {
            "No USB printers found. Please connect a printer.".into()
        }
        PrintError::PermissionDenied(_) if kind == TransportKind::Usb => {
            "USB permission denied".into()
        }
        PrintError::InvalidConfig(msg) => msg.clone(),
        _ => match kind {
            TransportKind::Usb => format!("USB print failed: {}", err),
            TransportKind::Network => format!("Network print failed: {}", err),
            _ => format!("Print failed: {}", err),
        },
    }
}

fn discover_failure_message(err: &PrintError) -> String {
    match err {
        PrintError::AdapterDisabled => "Please enable Bluetooth to continue".into(),
        PrintError::Unsupported(_) => {
            "Bluetooth functionality is only available on real devices".into()
        }
        _ => format!("Error listing Bluetooth devices: {}", err),
    }
}
