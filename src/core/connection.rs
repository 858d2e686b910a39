//! Connection lifecycle and handshake (C6). Owns the TCP socket, drives the
//! `Disconnected -> Handshaking -> Connected -> Closing -> Disconnected`
//! state machine (spec section 4.4), and starts/stops the three cooperating
//! stages (writer, byte-reader, parser) that glue the socket to the
//! consumer's event queue.
use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info};

use crate::core::common::{CLIENT_VERSION, MIN_SERVER_VERSION};
use crate::core::decoder::Decoder;
use crate::core::errors::IbkrError;
use crate::core::events::Event;
use crate::core::messages::{decode, encode_field, Field};
use crate::core::reader::Reader;
use crate::core::streamer::{Streamer, TcpStreamer};
use crate::core::writer::{OutboundMessage, Writer};

/// How often the parser stage wakes up to check for the shutdown sentinel
/// even with no traffic. A liveness probe only; never fails the connection.
const PARSER_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnState {
    Disconnected,
    Handshaking,
    Connected,
    Closing,
}

/// The five configuration options spec section 6 names.
#[derive(Clone, Debug)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub client_id: i32,
    pub timeout: Duration,
    pub buffer_size: usize,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        use crate::core::common::{
            DEFAULT_BUFFER_SIZE, DEFAULT_CLIENT_ID, DEFAULT_HOST, DEFAULT_PORT,
            DEFAULT_TIMEOUT_SECS,
        };
        ConnectOptions {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            client_id: DEFAULT_CLIENT_ID,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Owns the live socket and the three cooperating stages between `connect`
/// and `disconnect`. A fresh `Connection` starts `Disconnected`.
pub struct Connection {
    state: ConnState,
    server_version: i32,
    connection_time: String,
    outbound_tx: Option<Sender<OutboundMessage>>,
    field_tx: Option<Sender<String>>,
    event_tx: Option<Sender<Event>>,
    event_rx: Option<Receiver<Event>>,
    shutdown_stream: Option<Box<dyn Streamer>>,
    writer_handle: Option<JoinHandle<()>>,
    reader_handle: Option<JoinHandle<()>>,
    parser_handle: Option<JoinHandle<()>>,
}

impl Default for Connection {
    fn default() -> Self {
        Connection {
            state: ConnState::Disconnected,
            server_version: 0,
            connection_time: String::new(),
            outbound_tx: None,
            field_tx: None,
            event_tx: None,
            event_rx: None,
            shutdown_stream: None,
            writer_handle: None,
            reader_handle: None,
            parser_handle: None,
        }
    }
}

impl Connection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnState::Connected
    }

    pub fn server_version(&self) -> i32 {
        self.server_version
    }

    pub fn connection_time(&self) -> &str {
        &self.connection_time
    }

    /// Performs the handshake and starts the three stages. A second call
    /// while the socket is live is a no-op (spec section 4.4).
    pub fn connect(&mut self, opts: &ConnectOptions) -> Result<(), IbkrError> {
        if self.state != ConnState::Disconnected {
            info!("connect called while already connected; ignoring");
            return Ok(());
        }
        self.state = ConnState::Handshaking;

        let addr = (opts.host.as_str(), opts.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| IbkrError::ProtocolError(format!("unresolvable host {}", opts.host)))?;
        let stream = TcpStream::connect(addr)?;
        let mut handshake_stream = TcpStreamer::new(stream);

        let (server_version, connection_time, extra_fields, tail) =
            handshake(&mut handshake_stream, opts.client_id)?;

        if server_version < MIN_SERVER_VERSION {
            let _ = handshake_stream.shutdown(Shutdown::Both);
            self.state = ConnState::Disconnected;
            return Err(IbkrError::IncompatibleServer {
                server_version,
                min_required: MIN_SERVER_VERSION,
            });
        }

        self.server_version = server_version;
        self.connection_time = connection_time;

        let reader_stream: Box<dyn Streamer> =
            Box::new(TcpStreamer::new(handshake_stream.stream.try_clone()?));
        let writer_stream: Box<dyn Streamer> =
            Box::new(TcpStreamer::new(handshake_stream.stream.try_clone()?));
        let shutdown_stream: Box<dyn Streamer> = Box::new(handshake_stream);

        let (outbound_tx, outbound_rx) = mpsc::channel::<OutboundMessage>();
        let (field_tx, field_rx) = mpsc::channel::<String>();
        let (event_tx, event_rx) = mpsc::channel::<Event>();

        // Any fields the gateway coalesced into the handshake's TCP segment
        // must not be lost; replay them onto the field queue before the
        // reader stage starts pulling fresh bytes off the socket.
        for field in extra_fields {
            let _ = field_tx.send(field);
        }

        let writer = Writer::new(writer_stream, outbound_rx);
        let writer_handle = thread::spawn(move || writer.run());

        let reader_field_tx = field_tx.clone();
        let buffer_size = opts.buffer_size;
        let read_timeout = opts.timeout;
        let reader_handle = thread::spawn(move || {
            let mut reader = Reader::new(reader_stream, reader_field_tx, buffer_size, read_timeout);
            reader.seed(tail);
            reader.run();
        });

        let parser_event_tx = event_tx.clone();
        let parser_handle = thread::spawn(move || run_parser(field_rx, parser_event_tx));

        self.outbound_tx = Some(outbound_tx);
        self.field_tx = Some(field_tx);
        self.event_tx = Some(event_tx);
        self.event_rx = Some(event_rx);
        self.shutdown_stream = Some(shutdown_stream);
        self.writer_handle = Some(writer_handle);
        self.reader_handle = Some(reader_handle);
        self.parser_handle = Some(parser_handle);
        self.state = ConnState::Connected;
        info!("connected, server_version={}", self.server_version);
        Ok(())
    }

    /// Enqueues an already-encoded request frame on the outbound queue.
    pub fn send(&self, bytes: Vec<u8>) -> Result<(), IbkrError> {
        self.outbound_tx
            .as_ref()
            .ok_or_else(|| IbkrError::ProtocolError("not connected".to_string()))?
            .send(OutboundMessage::Data(bytes))
            .map_err(|e| IbkrError::ProtocolError(format!("outbound queue closed: {}", e)))
    }

    /// The consumer's event queue. `None` before the first successful
    /// `connect`.
    pub fn events(&self) -> Option<&Receiver<Event>> {
        self.event_rx.as_ref()
    }

    /// Half-closes the write side, propagates shutdown sentinels through
    /// every queue, fully closes the socket, then joins the three stages
    /// (spec section 4.4 teardown). The full close must happen before the
    /// joins: the byte-reader only exits on EOF, a closed-descriptor error,
    /// or a failed send on the field queue, and a write-only half-close
    /// does not unblock a reader parked in `read()` against a peer that's
    /// still holding the connection open. Closing the socket out from under
    /// it forces that `read()` to return, the same close-before-teardown
    /// ordering the original network handler uses.
    pub fn disconnect(&mut self) -> Result<(), IbkrError> {
        if self.state != ConnState::Connected {
            return Ok(());
        }
        self.state = ConnState::Closing;

        if let Some(stream) = self.shutdown_stream.as_mut() {
            let _ = stream.shutdown(Shutdown::Write);
        }
        if let Some(tx) = &self.outbound_tx {
            let _ = tx.send(OutboundMessage::Stop);
        }
        if let Some(tx) = &self.field_tx {
            let _ = tx.send("-1".to_string());
        }
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(Event::Stop);
        }

        if let Some(stream) = self.shutdown_stream.as_mut() {
            let _ = stream.shutdown(Shutdown::Both);
        }

        if let Some(h) = self.writer_handle.take() {
            let _ = h.join();
        }
        if let Some(h) = self.reader_handle.take() {
            let _ = h.join();
        }
        if let Some(h) = self.parser_handle.take() {
            let _ = h.join();
        }

        self.outbound_tx = None;
        self.field_tx = None;
        self.event_tx = None;
        self.shutdown_stream = None;
        self.state = ConnState::Disconnected;
        info!("disconnected");
        Ok(())
    }
}

/// Sends `CLIENT_VERSION`, reads the peer's single reply chunk, and extracts
/// `(server_version, connection_time, trailing_complete_fields,
/// trailing_partial_bytes)`. Does not yet send `client_id` -- the caller
/// does that only after confirming compatibility, matching spec section 4.4
/// step ordering.
fn handshake<S: Read + Write>(
    stream: &mut S,
    client_id: i32,
) -> Result<(i32, String, Vec<String>, Vec<u8>), IbkrError> {
    stream.write_all(&encode_field(&Field::Int(CLIENT_VERSION)))?;

    let mut buf = vec![0u8; 4096];
    let n = stream.read(&mut buf)?;
    let (fields, tail) = decode(&buf[..n]);
    if fields.len() < 2 {
        return Err(IbkrError::ProtocolError(
            "handshake reply missing server version/connection time".to_string(),
        ));
    }
    let server_version: i32 = fields[0]
        .parse()
        .map_err(|_| IbkrError::ProtocolError(format!("bad server version: {}", fields[0])))?;
    let connection_time = fields[1].clone();

    if server_version >= MIN_SERVER_VERSION {
        stream.write_all(&encode_field(&Field::Int(client_id)))?;
    }

    Ok((server_version, connection_time, fields[2..].to_vec(), tail))
}

/// Drives the parser stage (C5) until a `Stop` event is produced, whether
/// from a negative message id, a fatal protocol error, or the field queue
/// closing out from under it.
fn run_parser(field_rx: Receiver<String>, event_tx: Sender<Event>) {
    debug!("parser stage starting");
    let mut decoder = Decoder::new();
    loop {
        match decoder.poll_one(&field_rx, PARSER_POLL_INTERVAL) {
            Ok(None) => continue,
            Ok(Some(events)) => {
                let saw_stop = events.iter().any(|e| *e == Event::Stop);
                for event in events {
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
                if saw_stop {
                    debug!("parser stage: stop sentinel, exiting");
                    return;
                }
            }
            Err(err) => {
                error!("parser stage: fatal error: {}", err);
                let _ = event_tx.send(Event::Stop);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A minimal in-memory duplex: reads come from a fixed canned buffer,
    /// writes are captured for assertions. Enough to drive `handshake`
    /// without a real socket.
    struct MockDuplex {
        incoming: Cursor<Vec<u8>>,
        outgoing: Vec<u8>,
    }

    impl MockDuplex {
        fn new(incoming: &[u8]) -> Self {
            MockDuplex { incoming: Cursor::new(incoming.to_vec()), outgoing: Vec::new() }
        }
    }

    impl Read for MockDuplex {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.incoming.read(buf)
        }
    }

    impl Write for MockDuplex {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.outgoing.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn s4_handshake_succeeds_and_sends_client_id() {
        let mut duplex = MockDuplex::new(b"66\x0020240101 10:00:00\x00");
        let (server_version, connection_time, extra, tail) = handshake(&mut duplex, 7).unwrap();
        assert_eq!(server_version, 66);
        assert_eq!(connection_time, "20240101 10:00:00");
        assert!(extra.is_empty());
        assert!(tail.is_empty());
        // "60\0" (CLIENT_VERSION) then "7\0" (client_id).
        assert_eq!(duplex.outgoing, b"60\x007\x00".to_vec());
    }

    #[test]
    fn s5_handshake_rejects_server_below_minimum_and_does_not_send_client_id() {
        let mut duplex = MockDuplex::new(b"65\x0020240101 10:00:00\x00");
        let (server_version, _, _, _) = handshake(&mut duplex, 7).unwrap();
        assert_eq!(server_version, 65);
        assert!(server_version < MIN_SERVER_VERSION);
        // Only the initial CLIENT_VERSION field was written; client_id is
        // withheld because the caller rejects before reaching that point.
        assert_eq!(duplex.outgoing, b"60\x00".to_vec());
    }

    #[test]
    fn extra_coalesced_fields_are_preserved_for_replay() {
        let mut duplex =
            MockDuplex::new(b"66\x0020240101 10:00:00\x009\x001\x00123\x00");
        let (_, _, extra, tail) = handshake(&mut duplex, 0).unwrap();
        assert_eq!(extra, vec!["9".to_string(), "1".to_string(), "123".to_string()]);
        assert!(tail.is_empty());
    }
}
