//! Send a test page to a network printer (or emulator) over raw TCP.
//!
//! Run: cargo run --example network_test_page -- 192.168.1.100:9100
//!
//! Without an argument it targets 127.0.0.1:9100; `nc -l 9100 | xxd`
//! makes a serviceable printer stand-in.

use prawn_demo::{
    CapabilitySet, DocumentVariant, Orchestrator, PlatformKind, RawTcpDriver, Selection,
    StaticPlatform, StatusLog,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:9100".to_string());
    let (host, port) = addr.rsplit_once(':').expect("expected HOST:PORT");
    let port: u16 = port.parse().expect("port must be a number");

    let log = Arc::new(StatusLog::new());
    let platform = Arc::new(StaticPlatform::new(
        PlatformKind::Other,
        CapabilitySet {
            native_thermal_driver: true,
            ..Default::default()
        },
    ));

    let orchestrator = Orchestrator::new(platform, log.clone())
        .with_native_driver(Arc::new(RawTcpDriver::new()));

    orchestrator
        .print(DocumentVariant::TestPage, &Selection::network(host, port))
        .await;
    orchestrator
        .print(DocumentVariant::Receipt, &Selection::network(host, port))
        .await;

    println!(
        "{}",
        serde_json::to_string_pretty(&log.snapshot()).expect("status log serializes")
    );
}
