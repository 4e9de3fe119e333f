//! NetworkPrinter integration tests against a local TCP listener

use prawn_printer::{EscPosBuilder, NetworkPrinter, PrintError, Printer};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

#[tokio::test]
async fn print_delivers_exact_bytes() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let mut b = EscPosBuilder::new(36);
    b.align_center().write_line("hello printer").feed_and_cut();
    let payload = b.finalize();

    let printer = NetworkPrinter::new("127.0.0.1", addr.port()).unwrap();
    printer.print(payload.as_bytes()).await.unwrap();

    let received = server.await.unwrap();
    assert_eq!(received, payload.as_bytes());
    assert!(received.starts_with(&[0x1B, 0x40]));
    assert!(received.ends_with(&[0x1B, 0x64, 0x03]));
}

#[tokio::test]
async fn connect_refused_is_connection_failed() {
    // Bind and drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let printer = NetworkPrinter::new("127.0.0.1", addr.port())
        .unwrap()
        .with_timeout(Duration::from_secs(1));
    let err = printer.print(b"\x1B\x40").await.unwrap_err();
    assert!(matches!(err, PrintError::ConnectionFailed(_)));
}

#[tokio::test]
async fn is_online_reflects_listener_state() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let printer = NetworkPrinter::new("127.0.0.1", addr.port()).unwrap();
    assert!(printer.is_online().await);

    drop(listener);
    assert!(!printer.is_online().await);
}
