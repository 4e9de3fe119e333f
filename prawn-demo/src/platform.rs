//! Platform capability queries
//!
//! The original app probed for globally injected plugin objects to decide
//! which transport to use. Here the platform is an explicit collaborator
//! injected into the orchestrator: it answers what kind of device this is
//! and which printing capabilities are installed, nothing more.

use serde::{Deserialize, Serialize};

/// The kind of device the app is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Android,
    Ios,
    Other,
}

/// Which printing capabilities the platform provides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// A native thermal-printer driver accepting the markup dialect
    pub native_thermal_driver: bool,
    /// A generic Bluetooth serial channel
    pub bluetooth_serial: bool,
    /// USB host mode (required for USB printing)
    pub usb_host: bool,
    /// An OS print service (print dialog) for the HTML fallback
    pub os_print_service: bool,
}

/// Platform query interface consumed by the orchestrator
pub trait Platform: Send + Sync {
    fn kind(&self) -> PlatformKind;
    fn capabilities(&self) -> CapabilitySet;
}

/// Fixed platform description
///
/// Hosts build one of these at startup from whatever runtime detection
/// they have; tests build them directly.
#[derive(Debug, Clone)]
pub struct StaticPlatform {
    kind: PlatformKind,
    capabilities: CapabilitySet,
}

impl StaticPlatform {
    pub fn new(kind: PlatformKind, capabilities: CapabilitySet) -> Self {
        Self { kind, capabilities }
    }
}

impl Platform for StaticPlatform {
    fn kind(&self) -> PlatformKind {
        self.kind
    }

    fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }
}
