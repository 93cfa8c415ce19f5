use std;
use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use core::packet::ArpFrame;
use Result as CrateResult;

#[derive(Debug)]
pub enum Error {
    /// Indicates a generic IO error.
    IO(std::io::Error),
    /// Indicates an interface that does not exist on the host.
    NoSuchInterface(String),
    /// Indicates a frame that was only partially written to the link.
    Truncated { sent: usize, expected: usize },
    /// Indicates a miscellaneous error with a message.
    Unknown(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Error::IO(ref err) => write!(f, "{}", err),
            Error::NoSuchInterface(ref name) => write!(f, "no such interface '{}'", name),
            Error::Truncated { sent, expected } => {
                write!(f, "sent {} of {} bytes", sent, expected)
            }
            Error::Unknown(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A low level interface for putting frames on a link.
pub trait Link {
    /// Sends a complete frame across the link.
    ///
    /// Implementations must either send the whole frame or return an error.
    fn send(&mut self, buffer: &[u8]) -> Result<()>;
}

/// Serializes a frame and sends it across a link, returning the bytes that
/// were sent.
///
/// Transmission errors are not retried.
pub fn send_frame<L: Link + ?Sized>(
    link: &mut L,
    frame: &ArpFrame,
) -> CrateResult<[u8; ArpFrame::LEN]> {
    let buffer = frame.serialize();

    debug!(
        "Sending ARP {} from {} ({}) to {} ({}).",
        frame.arp.op,
        frame.arp.source_proto_addr,
        frame.src_addr,
        frame.arp.target_proto_addr,
        frame.dst_addr,
    );

    link.send(&buffer[..])?;

    Ok(buffer)
}
