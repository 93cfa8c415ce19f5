//! Linux link layer access.

pub mod libc;
pub mod link;

pub use self::link::RawSocket;
