//! Error kinds signaled by the codec, encoder, decoder, and network handler.
use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::sync::mpsc::{RecvError, RecvTimeoutError, SendError};

/// A TWS business error delivered to the consumer as an `error` event rather
/// than raised as a Rust error (spec section 7: ServerErrors are delivered
/// as data, not raised).
#[derive(Clone, Debug)]
pub struct ServerError {
    pub req_id: i32,
    pub code: i32,
    pub message: String,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "req_id={} code={} message={}",
            self.req_id, self.code, self.message
        )
    }
}

/// The closed set of error kinds.
#[derive(Debug)]
pub enum IbkrError {
    /// Operation recognized but intentionally not implemented.
    NotSupported(&'static str),
    /// Peer version below `MIN_SERVER_VERSION`.
    IncompatibleServer { server_version: i32, min_required: i32 },
    /// Handler received an unexpected version or a bad field. Fatal.
    ProtocolError(String),
    /// Inbound message id not in the dispatch table. Fatal.
    UnsupportedMessageId(i32),
    /// Socket read/write/wait failed with an unrecoverable code. Fatal.
    Io(io::Error),
    /// Ordinary business error, kept so it can flow through `?` in code
    /// paths that build it before publishing it as an event.
    ServerError(ServerError),
    ParseInt(ParseIntError),
    ParseFloat(ParseFloatError),
    RecvError(RecvError),
    RecvTimeoutError(RecvTimeoutError),
}

impl fmt::Display for IbkrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IbkrError::NotSupported(op) => write!(f, "operation not supported: {}", op),
            IbkrError::IncompatibleServer { server_version, min_required } => write!(
                f,
                "server version {} is below the minimum required {}",
                server_version, min_required
            ),
            IbkrError::ProtocolError(msg) => write!(f, "protocol error: {}", msg),
            IbkrError::UnsupportedMessageId(id) => write!(f, "unsupported message id: {}", id),
            IbkrError::Io(err) => write!(f, "io error: {}", err),
            IbkrError::ServerError(err) => write!(f, "server error: {}", err),
            IbkrError::ParseInt(err) => write!(f, "parse error: {}", err),
            IbkrError::ParseFloat(err) => write!(f, "parse error: {}", err),
            IbkrError::RecvError(err) => write!(f, "receive error: {}", err),
            IbkrError::RecvTimeoutError(err) => write!(f, "receive timeout: {}", err),
        }
    }
}

impl std::error::Error for IbkrError {}

impl From<io::Error> for IbkrError {
    fn from(err: io::Error) -> Self {
        IbkrError::Io(err)
    }
}

impl From<ParseIntError> for IbkrError {
    fn from(err: ParseIntError) -> Self {
        IbkrError::ParseInt(err)
    }
}

impl From<ParseFloatError> for IbkrError {
    fn from(err: ParseFloatError) -> Self {
        IbkrError::ParseFloat(err)
    }
}

impl From<RecvError> for IbkrError {
    fn from(err: RecvError) -> Self {
        IbkrError::RecvError(err)
    }
}

impl From<RecvTimeoutError> for IbkrError {
    fn from(err: RecvTimeoutError) -> Self {
        IbkrError::RecvTimeoutError(err)
    }
}

impl<T> From<SendError<T>> for IbkrError {
    fn from(err: SendError<T>) -> Self {
        IbkrError::ProtocolError(format!("send on a closed queue: {}", err))
    }
}

impl From<ServerError> for IbkrError {
    fn from(err: ServerError) -> Self {
        IbkrError::ServerError(err)
    }
}
