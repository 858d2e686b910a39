//! Byte-reader stage: owns the receive half of the socket. Uses a bounded
//! read timeout as a liveness probe, reads up to `buffer_size` bytes per
//! iteration, decodes as many whole fields as the rolling buffer holds, and
//! enqueues each field for the parser stage. The trailing partial field is
//! retained for the next iteration.
use std::io::{ErrorKind, Read};
use std::sync::mpsc::Sender;
use std::time::Duration;

use log::{debug, error, info};

use crate::core::messages::decode;
use crate::core::streamer::Streamer;

pub struct Reader {
    stream: Box<dyn Streamer>,
    field_tx: Sender<String>,
    buffer_size: usize,
    read_timeout: Duration,
    seeded: Vec<u8>,
}

impl Reader {
    pub fn new(
        stream: Box<dyn Streamer>,
        field_tx: Sender<String>,
        buffer_size: usize,
        read_timeout: Duration,
    ) -> Self {
        Reader { stream, field_tx, buffer_size, read_timeout, seeded: Vec::new() }
    }

    /// Primes the rolling buffer with bytes the handshake read off the wire
    /// but didn't consume (a partial field trailing the handshake reply).
    /// Must be called before `run` so those bytes aren't lost.
    pub fn seed(&mut self, bytes: Vec<u8>) {
        self.seeded = bytes;
    }

    /// Runs until EOF, an unrecoverable socket error, or the outbound field
    /// channel is dropped. Always posts the `-1` shutdown sentinel before
    /// returning, so the parser stage's loop exits even if the socket died
    /// on its own rather than through an explicit `disconnect`.
    pub fn run(mut self) {
        debug!("byte-reader stage starting");
        if let Err(err) = self.stream.set_read_timeout(Some(self.read_timeout)) {
            error!("byte-reader stage: failed to set read timeout: {}", err);
        }

        let mut pending: Vec<u8> = std::mem::take(&mut self.seeded);
        let mut chunk = vec![0u8; self.buffer_size];

        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => {
                    info!("byte-reader stage: socket EOF, shutting down");
                    break;
                }
                Ok(n) => {
                    pending.extend_from_slice(&chunk[..n]);
                    let (fields, tail) = decode(&pending);
                    pending = tail;
                    let mut channel_closed = false;
                    for field in fields {
                        if self.field_tx.send(field).is_err() {
                            channel_closed = true;
                            break;
                        }
                    }
                    if channel_closed {
                        debug!("byte-reader stage: field queue closed, exiting");
                        return;
                    }
                }
                Err(err)
                    if err.kind() == ErrorKind::WouldBlock || err.kind() == ErrorKind::TimedOut =>
                {
                    // Liveness probe only; loop again.
                    continue;
                }
                Err(err) if is_closed_descriptor(&err) => {
                    debug!("byte-reader stage: descriptor closed, shutting down cleanly");
                    break;
                }
                Err(err) => {
                    error!("byte-reader stage: fatal socket error: {}", err);
                    break;
                }
            }
        }
        let _ = self.field_tx.send("-1".to_string());
    }
}

/// Best-effort classification of "the socket was closed out from under us"
/// (EBADF and friends), distinct from a genuinely unexpected IO failure.
fn is_closed_descriptor(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotConnected
            | ErrorKind::ConnectionAborted
            | ErrorKind::ConnectionReset
            | ErrorKind::BrokenPipe
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::streamer::TestStreamer;
    use std::sync::mpsc;

    #[test]
    fn reassembles_fields_and_posts_sentinel_on_eof() {
        let mut stream = TestStreamer::new();
        stream.feed(b"9\x001\x00123\x00");
        let (tx, rx) = mpsc::channel();
        let reader = Reader::new(Box::new(stream), tx, 4096, Duration::from_millis(20));
        reader.run();

        let received: Vec<String> = rx.try_iter().collect();
        assert_eq!(received, vec!["9", "1", "123", "-1"]);
    }

    #[test]
    fn empty_stream_posts_only_the_shutdown_sentinel() {
        let stream = TestStreamer::new();
        let (tx, rx) = mpsc::channel();
        let reader = Reader::new(Box::new(stream), tx, 4096, Duration::from_millis(20));
        reader.run();
        assert_eq!(rx.recv().unwrap(), "-1");
    }
}
