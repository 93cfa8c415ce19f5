//! Serialization and deserialization of Ethernet frames and ARP messages.
//!
//! The `repr` module provides the address types and the byte level layouts
//! of the Ethernet header and the ARP payload.

pub mod arp;
pub mod ethernet;
pub mod ipv4;

pub use self::arp::{
    hw_types as arp_hw_types,
    proto_types as arp_proto_types,
    Arp,
    Op as ArpOp,
};
pub use self::ethernet::{
    eth_types,
    Address as EthernetAddress,
    Frame as EthernetFrame,
};
pub use self::ipv4::Address as Ipv4Address;
