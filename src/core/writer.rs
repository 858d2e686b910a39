//! Writer stage (C6): owns the send half of the socket. Blocks on the
//! outbound queue; on dequeuing `Stop` it returns, otherwise it writes one
//! already-encoded message to the wire. `send` is atomic per-field -- the
//! encoder hands the writer a fully framed buffer, so there is no
//! suspension point mid-field (spec section 5).
use std::io::Write;
use std::sync::mpsc::Receiver;

use log::{debug, error};

use crate::core::streamer::Streamer;

/// An item on the outbound queue: either an encoded request or the shutdown
/// sentinel `disconnect` posts to unblock the writer loop.
pub enum OutboundMessage {
    Data(Vec<u8>),
    Stop,
}

pub struct Writer {
    stream: Box<dyn Streamer>,
    rx: Receiver<OutboundMessage>,
}

impl Writer {
    pub fn new(stream: Box<dyn Streamer>, rx: Receiver<OutboundMessage>) -> Self {
        Writer { stream, rx }
    }

    pub fn run(mut self) {
        debug!("writer stage starting");
        loop {
            match self.rx.recv() {
                Ok(OutboundMessage::Stop) => {
                    debug!("writer stage got stop sentinel, exiting");
                    return;
                }
                Ok(OutboundMessage::Data(bytes)) => {
                    if let Err(err) = self.stream.write_all(&bytes) {
                        error!("writer stage: socket write failed: {}", err);
                        return;
                    }
                }
                Err(_) => {
                    debug!("writer stage: outbound queue closed, exiting");
                    return;
                }
            }
        }
    }
}
