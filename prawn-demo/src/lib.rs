//! # prawn-demo
//!
//! Core of the thermal-printer demo app: documents, dialect renderers,
//! transport drivers and the print orchestrator.
//!
//! ## Scope
//!
//! This crate decides WHAT to print and over WHICH channel:
//! - Document model with canned test page / sample receipt
//! - Renderers for the markup, ESC/POS and HTML dialects
//! - Capability-provider traits for the native platform drivers
//! - Transport selection and the connect → send → cleanup sequence
//! - Bounded status log the UI shell displays
//!
//! Low-level payload building and TCP transport live in `prawn-printer`.
//!
//! ## Example
//!
//! ```ignore
//! use prawn_demo::{
//!     CapabilitySet, DocumentVariant, Orchestrator, PlatformKind, RawTcpDriver,
//!     Selection, StaticPlatform, StatusLog,
//! };
//! use std::sync::Arc;
//!
//! let log = Arc::new(StatusLog::new());
//! let platform = Arc::new(StaticPlatform::new(
//!     PlatformKind::Other,
//!     CapabilitySet { native_thermal_driver: true, ..Default::default() },
//! ));
//! let orchestrator = Orchestrator::new(platform, log.clone())
//!     .with_native_driver(Arc::new(RawTcpDriver::new()));
//!
//! orchestrator
//!     .print(DocumentVariant::TestPage, &Selection::network("192.168.1.100", 9100))
//!     .await;
//! ```

mod document;
mod driver;
mod orchestrator;
mod platform;
mod render;
mod status;
mod transport;

// Re-exports
pub use document::{Align, CodePayload, Document, DocumentVariant, LineItem, TextLine};
pub use driver::{DeviceInfo, NativeThermalDriver, PortType, PrintDialog, SerialPort, TransportTarget};
pub use orchestrator::{Orchestrator, Selection, TransportChoice, TransportKind, resolve};
pub use platform::{CapabilitySet, Platform, PlatformKind, StaticPlatform};
pub use prawn_printer::{PrintError, PrintResult};
pub use render::{Dialect, render};
pub use status::{StatusEntry, StatusLog, StatusReporter};
pub use transport::{DEFAULT_TIMEOUT, RawTcpDriver, serial_print, with_timeout};
