use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use std::str::FromStr;

use byteorder::{
    ByteOrder,
    NetworkEndian,
};

use {
    Error,
    Result,
};

/// [MAC address](https://en.wikipedia.org/wiki/MAC_address) in network byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 6]);

impl Address {
    pub const BROADCAST: Address = Address([0xFF; 6]);

    pub const UNSPECIFIED: Address = Address([0x00; 6]);

    /// Creates a MAC address from a network byte order buffer.
    pub fn new(addr: [u8; 6]) -> Address {
        Address(addr)
    }

    /// Tries to create a MAC address from a network byte order slice.
    pub fn try_new(addr: &[u8]) -> Result<Address> {
        if addr.len() != 6 {
            return Err(Error::Exhausted);
        }

        let mut _addr: [u8; 6] = [0; 6];
        _addr.copy_from_slice(addr);
        Ok(Address(_addr))
    }

    /// Returns a reference to the network byte order representation of the
    /// address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Checks if this is a broadcast address.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; 6]
    }

    /// Checks if this is the all zeros address.
    pub fn is_unspecified(&self) -> bool {
        self.0 == [0x00; 6]
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        )
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses a MAC address from an A:B:C:D:E:F style string where each
    /// segment is a hexadecimal octet.
    fn from_str(addr: &str) -> Result<Address> {
        let mut mac: [u8; 6] = [0; 6];
        let mut segments = 0;

        for (i, token) in addr.split(':').enumerate() {
            if i >= mac.len() {
                return Err(Error::MalformedAddress(addr.to_string()));
            }
            mac[i] = u8::from_str_radix(token, 16)
                .map_err(|_| Error::MalformedAddress(addr.to_string()))?;
            segments += 1;
        }

        if segments != mac.len() {
            return Err(Error::MalformedAddress(addr.to_string()));
        }

        Ok(Address::new(mac))
    }
}

/// [https://en.wikipedia.org/wiki/EtherType](https://en.wikipedia.org/wiki/EtherType)
pub mod eth_types {
    pub const ARP: u16 = 0x0806;
}

mod fields {
    use std::ops::{
        Range,
        RangeFrom,
    };

    pub const DST_ADDR: Range<usize> = 0 .. 6;

    pub const SRC_ADDR: Range<usize> = 6 .. 12;

    pub const PAYLOAD_TYPE: Range<usize> = 12 .. 14;

    pub const PAYLOAD: RangeFrom<usize> = 14 ..;
}

/// View of a byte buffer as an Ethernet frame.
///
/// The frame check sequence is not part of the view, it is appended by the
/// link layer.
#[derive(Debug)]
pub struct Frame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AsRef<[u8]> for Frame<T> {
    fn as_ref(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}

impl<T: AsRef<[u8]>> Frame<T> {
    pub const HEADER_LEN: usize = 14;

    /// Tries to create an Ethernet frame view over a byte buffer.
    pub fn try_new(buffer: T) -> Result<Frame<T>> {
        if buffer.as_ref().len() < Self::HEADER_LEN {
            Err(Error::Exhausted)
        } else {
            Ok(Frame { buffer })
        }
    }

    /// Returns the length of an Ethernet frame with the specified payload size.
    pub fn buffer_len(payload_len: usize) -> usize {
        Self::HEADER_LEN + payload_len
    }

    pub fn dst_addr(&self) -> Address {
        let mut addr = [0; 6];
        addr.copy_from_slice(&self.buffer.as_ref()[fields::DST_ADDR]);
        Address::new(addr)
    }

    pub fn src_addr(&self) -> Address {
        let mut addr = [0; 6];
        addr.copy_from_slice(&self.buffer.as_ref()[fields::SRC_ADDR]);
        Address::new(addr)
    }

    pub fn payload_type(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[fields::PAYLOAD_TYPE])
    }

    pub fn payload(&self) -> &[u8] {
        &self.buffer.as_ref()[fields::PAYLOAD]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Frame<T> {
    pub fn set_dst_addr(&mut self, addr: Address) {
        self.buffer.as_mut()[fields::DST_ADDR].copy_from_slice(addr.as_bytes());
    }

    pub fn set_src_addr(&mut self, addr: Address) {
        self.buffer.as_mut()[fields::SRC_ADDR].copy_from_slice(addr.as_bytes());
    }

    pub fn set_payload_type(&mut self, payload_type: u16) {
        NetworkEndian::write_u16(
            &mut self.buffer.as_mut()[fields::PAYLOAD_TYPE],
            payload_type,
        );
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[fields::PAYLOAD]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let addr: Address = "02:A1:a2:A3:A4:A5".parse().unwrap();
        assert_eq!(addr, Address::new([0x02, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]));
        assert_eq!(addr.to_string(), "02:a1:a2:a3:a4:a5");
    }

    #[test]
    fn test_parse_address_too_few_segments() {
        assert_matches!(
            "02:A1:A2".parse::<Address>(),
            Err(Error::MalformedAddress(_))
        );
    }

    #[test]
    fn test_parse_address_too_many_segments() {
        assert_matches!(
            "02:A1:A2:A3:A4:A5:A6".parse::<Address>(),
            Err(Error::MalformedAddress(_))
        );
    }

    #[test]
    fn test_parse_address_bad_octet() {
        assert_matches!(
            "02:A1:A2:A3:A4:G5".parse::<Address>(),
            Err(Error::MalformedAddress(_))
        );
        assert_matches!(
            "02:A1:A2:A3:A4:100".parse::<Address>(),
            Err(Error::MalformedAddress(_))
        );
        assert_matches!(
            "02:A1::A3:A4:A5".parse::<Address>(),
            Err(Error::MalformedAddress(_))
        );
    }

    #[test]
    fn test_is_broadcast() {
        assert!(Address::BROADCAST.is_broadcast());
        assert!(!Address::UNSPECIFIED.is_broadcast());
        assert!(Address::UNSPECIFIED.is_unspecified());
    }

    #[test]
    fn test_frame_buffer_too_small() {
        let buffer: [u8; 13] = [0; 13];
        assert_matches!(Frame::try_new(&buffer[..]), Err(Error::Exhausted));
    }

    #[test]
    fn test_frame_setters() {
        let mut buffer: [u8; 16] = [0; 16];
        {
            let mut frame = Frame::try_new(&mut buffer[..]).unwrap();
            frame.set_dst_addr(Address::BROADCAST);
            frame.set_src_addr(Address::new([1, 2, 3, 4, 5, 6]));
            frame.set_payload_type(eth_types::ARP);
            frame.payload_mut().copy_from_slice(&[0xAB, 0xCD]);
        }

        let frame = Frame::try_new(&buffer[..]).unwrap();
        assert_eq!(frame.dst_addr(), Address::BROADCAST);
        assert_eq!(frame.src_addr(), Address::new([1, 2, 3, 4, 5, 6]));
        assert_eq!(frame.payload_type(), 0x0806);
        assert_eq!(frame.payload(), [0xAB, 0xCD]);
        assert_eq!(&buffer[12 .. 14], [0x08, 0x06]);
    }
}
