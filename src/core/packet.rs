//! A complete ARP frame, an Ethernet header immediately followed by an ARP
//! message.

use core::repr::{
    eth_types,
    Arp,
    EthernetAddress,
    EthernetFrame,
};
use {
    Error,
    Result,
};

/// Ethernet/IPv4 ARP frame ready to be put on a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArpFrame {
    pub dst_addr: EthernetAddress,
    pub src_addr: EthernetAddress,
    pub arp: Arp,
}

impl ArpFrame {
    /// Size of a serialized frame. No padding and no frame check sequence.
    pub const LEN: usize = 42;

    /// Serializes the frame into a fresh buffer.
    pub fn serialize(&self) -> [u8; ArpFrame::LEN] {
        let mut buffer = [0; ArpFrame::LEN];
        // The buffer is sized for the header and message, neither write can fail.
        let _ = self.serialize_into(&mut buffer[..]);
        buffer
    }

    /// Serializes the frame into the head of a buffer, returning the number of
    /// bytes written.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize> {
        if buffer.len() < Self::LEN {
            return Err(Error::Exhausted);
        }

        let mut eth_frame = EthernetFrame::try_new(&mut buffer[.. Self::LEN])?;
        eth_frame.set_dst_addr(self.dst_addr);
        eth_frame.set_src_addr(self.src_addr);
        eth_frame.set_payload_type(eth_types::ARP);
        self.arp.serialize(eth_frame.payload_mut())?;

        Ok(Self::LEN)
    }

    /// Attempts to deserialize a buffer into an ARP frame.
    ///
    /// Bytes past the ARP message, such as link layer padding, are ignored.
    pub fn deserialize(buffer: &[u8]) -> Result<ArpFrame> {
        let eth_frame = EthernetFrame::try_new(buffer)?;

        if eth_frame.payload_type() != eth_types::ARP {
            return Err(Error::Malformed);
        }

        Ok(ArpFrame {
            dst_addr: eth_frame.dst_addr(),
            src_addr: eth_frame.src_addr(),
            arp: Arp::deserialize(eth_frame.payload())?,
        })
    }
}
