use bytebuffer::ByteBuffer;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use std::{
    io::{self, Read, Write},
    net::Shutdown,
};

/// Socket abstraction the network handler (C6) reads and writes through.
/// Generalized from the teacher's `Streamer` trait with a read-timeout knob
/// so the byte-reader stage can do a bounded readiness wait (spec section 5)
/// instead of blocking forever on `read`. `TestStreamer` backs integration
/// tests with an in-memory buffer instead of a real socket.
pub trait Streamer: Read + Write + Send {
    fn shutdown(&mut self, how: Shutdown) -> io::Result<()>;
    /// `None` disables the timeout (blocks indefinitely); `TestStreamer`
    /// treats this as a no-op since there's no real socket to configure.
    fn set_read_timeout(&mut self, dur: Option<Duration>) -> io::Result<()>;
}

#[derive(Debug)]
pub struct TcpStreamer {
    pub(crate) stream: TcpStream,
}

impl TcpStreamer {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Opens a TCP connection to `addr`. Unlike a listening socket,
    /// `SO_REUSEADDR` has no observable effect on an outbound client
    /// connection under the standard library's `TcpStream`, which does not
    /// expose the option; this is a deliberate simplification noted in
    /// DESIGN.md rather than a new dependency pulled in for one socket flag.
    pub fn connect(addr: &SocketAddr) -> io::Result<Self> {
        Ok(TcpStreamer::new(TcpStream::connect(addr)?))
    }
}

impl Streamer for TcpStreamer {
    fn shutdown(&mut self, how: Shutdown) -> io::Result<()> {
        self.stream.shutdown(how)
    }

    fn set_read_timeout(&mut self, dur: Option<Duration>) -> io::Result<()> {
        self.stream.set_read_timeout(dur)
    }
}

impl Clone for TcpStreamer {
    fn clone(&self) -> Self {
        TcpStreamer::new(self.stream.try_clone().unwrap())
    }
}

impl Read for TcpStreamer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for TcpStreamer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

pub struct TestStreamer {
    stream: ByteBuffer,
}

impl TestStreamer {
    pub fn new() -> Self {
        TestStreamer {
            stream: ByteBuffer::new(),
        }
    }

    /// Test helper: appends bytes as if the peer had sent them, so a
    /// subsequent `read` drains them back out.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.stream.write_all(bytes).expect("in-memory buffer write cannot fail");
    }
}

impl Default for TestStreamer {
    fn default() -> Self {
        Self::new()
    }
}

impl Streamer for TestStreamer {
    fn shutdown(&mut self, _how: Shutdown) -> io::Result<()> {
        Ok(())
    }

    fn set_read_timeout(&mut self, _dur: Option<Duration>) -> io::Result<()> {
        Ok(())
    }
}

impl Read for TestStreamer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for TestStreamer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
