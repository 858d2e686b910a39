//! Full-stack integration tests: drive `EClient` against a loopback TCP
//! server that plays the role of TWS/IB Gateway, exercising the real
//! handshake, writer/byte-reader/parser stages, and the consumer event queue
//! end to end (as opposed to the per-module unit tests, which substitute
//! `core::streamer::TestStreamer` for the socket).
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use twsapi::core::client::EClient;
use twsapi::core::connection::ConnectOptions;
use twsapi::core::errors::IbkrError;
use twsapi::core::events::Event;

/// Writes the handshake reply (`server_version`, `connection_time`), reading
/// and discarding the peer's `CLIENT_VERSION` and `client_id` greeting first.
fn play_handshake(stream: &mut TcpStream, server_version: i32) {
    let mut buf = [0u8; 64];
    let _ = stream.read(&mut buf); // CLIENT_VERSION
    let _ = stream.read(&mut buf); // client_id
    let reply = format!("{}\x0020240101 10:00:00\x00", server_version);
    stream.write_all(reply.as_bytes()).unwrap();
}

#[test]
fn connect_handshake_and_disconnect_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        play_handshake(&mut stream, 66);
        // Keep the socket open until the client disconnects.
        let mut buf = [0u8; 64];
        loop {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => continue,
            }
        }
    });

    let mut client = EClient::new();
    client
        .connect_with(ConnectOptions { host: "127.0.0.1".to_string(), port, client_id: 7, ..ConnectOptions::default() })
        .unwrap();

    assert!(client.is_connected());
    assert_eq!(client.server_version(), 66);
    assert_eq!(client.connection_time(), "20240101 10:00:00");

    client.disconnect().unwrap();
    assert!(!client.is_connected());

    server.join().unwrap();
}

#[test]
fn incompatible_server_version_is_rejected_and_socket_closes() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 64];
        let _ = stream.read(&mut buf); // CLIENT_VERSION only; client_id is withheld
        stream.write_all(b"10\x0020240101 10:00:00\x00").unwrap();
    });

    let mut client = EClient::new();
    let err = client
        .connect_with(ConnectOptions { host: "127.0.0.1".to_string(), port, ..ConnectOptions::default() })
        .unwrap_err();

    assert!(matches!(err, IbkrError::IncompatibleServer { server_version: 10, .. }));
    assert!(!client.is_connected());

    server.join().unwrap();
}

#[test]
fn requests_enqueued_after_connect_reach_the_server_and_responses_become_events() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        play_handshake(&mut stream, 66);

        // req_ids(1) frame: "8\x001\x001\x00" (ReqIds=8, version=1, num_ids=1).
        let mut buf = [0u8; 64];
        let n = stream.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"8\x001\x001\x00");

        // Reply with next_valid_id, split across two writes to exercise the
        // byte-reader's buffer-reassembly path across a partial field.
        stream.write_all(b"9\x001\x0042").unwrap();
        thread::sleep(Duration::from_millis(20));
        stream.write_all(b"\x00").unwrap();

        let mut buf = [0u8; 64];
        loop {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => continue,
            }
        }
    });

    let mut client = EClient::new();
    client
        .connect_with(ConnectOptions { host: "127.0.0.1".to_string(), port, ..ConnectOptions::default() })
        .unwrap();

    client.req_ids(1).unwrap();

    let event = client.next_event(Duration::from_secs(2)).expect("expected a next_valid_id event");
    assert_eq!(event, Event::NextValidId { req_id: 42 });

    client.disconnect().unwrap();
    server.join().unwrap();
}
