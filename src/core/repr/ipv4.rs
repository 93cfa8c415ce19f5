use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use std::net::Ipv4Addr;
use std::str::FromStr;

use {
    Error,
    Result,
};

/// [IPv4 address](https://en.wikipedia.org/wiki/IPv4) in network byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 4]);

impl Address {
    pub const BROADCAST: Address = Address([0xFF; 4]);

    pub const UNSPECIFIED: Address = Address([0x00; 4]);

    /// Creates an IPv4 address from a network byte order buffer.
    pub fn new(addr: [u8; 4]) -> Address {
        Address(addr)
    }

    /// Tries to create an IPv4 address from a network byte order slice.
    pub fn try_new(addr: &[u8]) -> Result<Address> {
        if addr.len() != 4 {
            return Err(Error::Exhausted);
        }

        let mut _addr: [u8; 4] = [0; 4];
        _addr.copy_from_slice(addr);
        Ok(Address(_addr))
    }

    /// Returns a reference to the network byte order representation of the
    /// address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address(addr.octets())
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}.{}.{}.{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses an IPv4 address from an A.B.C.D style string where each segment
    /// is a decimal octet.
    fn from_str(addr: &str) -> Result<Address> {
        let mut ipv4: [u8; 4] = [0; 4];
        let mut segments = 0;

        for (i, token) in addr.split('.').enumerate() {
            if i >= ipv4.len() {
                return Err(Error::MalformedAddress(addr.to_string()));
            }
            ipv4[i] = token
                .parse::<u8>()
                .map_err(|_| Error::MalformedAddress(addr.to_string()))?;
            segments += 1;
        }

        if segments != ipv4.len() {
            return Err(Error::MalformedAddress(addr.to_string()));
        }

        Ok(Address::new(ipv4))
    }
}
