#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate byteorder;
#[cfg(target_os = "linux")]
extern crate get_if_addrs;
extern crate libc;
#[macro_use]
extern crate log;

use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

pub mod core;

#[cfg(target_os = "linux")]
pub mod linux;

use core::link::Error as LinkError;

#[derive(Debug)]
pub enum Error {
    /// Indicates a MAC or IPv4 address that could not be parsed.
    MalformedAddress(String),
    /// Indicates a non-address field, such as the ARP operation, that could not
    /// be parsed.
    MalformedField(String),
    /// Indicates a configuration key that does not name an overridable field.
    UnknownField(String),
    /// Indicates an error where a buffer is too small to hold a frame.
    Exhausted,
    /// Indicates an error where a frame is not an Ethernet/IPv4 ARP frame.
    Malformed,
    /// Indicates an error raised while putting a frame on the link.
    Transmission(LinkError),
}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        Error::Transmission(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Error::MalformedAddress(ref addr) => write!(f, "malformed address '{}'", addr),
            Error::MalformedField(ref field) => write!(f, "malformed field '{}'", field),
            Error::UnknownField(ref key) => write!(f, "unknown field '{}'", key),
            Error::Exhausted => write!(f, "buffer too small for an ARP frame"),
            Error::Malformed => write!(f, "not an Ethernet/IPv4 ARP frame"),
            Error::Transmission(ref err) => write!(f, "transmission failed: {}", err),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
