//! Field values of the frame to generate.
//!
//! A `Config` starts out with the defaults of a broadcast ARP request and is
//! updated from textual key/value overrides. Only the fields below can be
//! overridden, the hardware/protocol types and lengths and the ether-type are
//! fixed for Ethernet and IPv4.

use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use core::packet::ArpFrame;
use core::repr::{
    Arp,
    ArpOp,
    EthernetAddress,
    Ipv4Address,
};
use {
    Error,
    Result,
};

/// Interface frames are sent out of unless told otherwise.
pub const DEFAULT_INTERFACE: &str = "eth0";

/// Names of the overridable fields.
pub mod keys {
    pub const INTERFACE: &str = "interface";

    pub const MAC_SRC: &str = "mac-src";

    pub const MAC_DST: &str = "mac-dst";

    pub const OPERATION: &str = "operation";

    pub const ARP_SHA: &str = "arp-sha";

    pub const ARP_SPA: &str = "arp-spa";

    pub const ARP_THA: &str = "arp-tha";

    pub const ARP_TPA: &str = "arp-tpa";

    pub const ALL: [&str; 8] = [
        INTERFACE, MAC_SRC, MAC_DST, OPERATION, ARP_SHA, ARP_SPA, ARP_THA, ARP_TPA,
    ];
}

/// Parses a MAC address from six colon separated hexadecimal octets.
pub fn parse_mac(value: &str) -> Result<EthernetAddress> {
    value.parse()
}

/// Parses an IPv4 address from four dot separated decimal octets.
pub fn parse_ipv4(value: &str) -> Result<Ipv4Address> {
    value.parse()
}

/// Parses an ARP operation from a decimal integer.
///
/// Codes other than request (1) and reply (2) are accepted as long as they fit
/// the 16 bit operation field.
pub fn parse_op(value: &str) -> Result<ArpOp> {
    value
        .parse::<u16>()
        .map(ArpOp)
        .map_err(|_| Error::MalformedField(value.to_string()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the interface to send the frame out of.
    pub interface: String,
    /// Ethernet destination address.
    pub mac_dst: EthernetAddress,
    /// Ethernet source address.
    pub mac_src: EthernetAddress,
    pub operation: ArpOp,
    /// Sender hardware address.
    pub arp_sha: EthernetAddress,
    /// Sender protocol address.
    pub arp_spa: Ipv4Address,
    /// Target hardware address.
    pub arp_tha: EthernetAddress,
    /// Target protocol address.
    pub arp_tpa: Ipv4Address,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            interface: DEFAULT_INTERFACE.to_string(),
            mac_dst: EthernetAddress::BROADCAST,
            mac_src: EthernetAddress::UNSPECIFIED,
            operation: ArpOp::REQUEST,
            arp_sha: EthernetAddress::UNSPECIFIED,
            arp_spa: Ipv4Address::UNSPECIFIED,
            arp_tha: EthernetAddress::BROADCAST,
            arp_tpa: Ipv4Address::BROADCAST,
        }
    }
}

impl Config {
    /// Creates a configuration from the defaults and a sequence of overrides.
    ///
    /// Stops at the first override that fails to parse.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();

        for (key, value) in pairs {
            config.set(key.as_ref(), value.as_ref())?;
        }

        Ok(config)
    }

    /// Overrides a single field by key.
    ///
    /// On error the configuration is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            keys::INTERFACE => self.interface = value.to_string(),
            keys::MAC_SRC => self.mac_src = parse_mac(value)?,
            keys::MAC_DST => self.mac_dst = parse_mac(value)?,
            keys::OPERATION => self.operation = parse_op(value)?,
            keys::ARP_SHA => self.arp_sha = parse_mac(value)?,
            keys::ARP_SPA => self.arp_spa = parse_ipv4(value)?,
            keys::ARP_THA => self.arp_tha = parse_mac(value)?,
            keys::ARP_TPA => self.arp_tpa = parse_ipv4(value)?,
            _ => return Err(Error::UnknownField(key.to_string())),
        };

        debug!("Set {} to {}.", key, value);

        Ok(())
    }

    /// Returns the frame described by the configuration.
    pub fn frame(&self) -> ArpFrame {
        ArpFrame {
            dst_addr: self.mac_dst,
            src_addr: self.mac_src,
            arp: Arp {
                op: self.operation,
                source_hw_addr: self.arp_sha,
                source_proto_addr: self.arp_spa,
                target_hw_addr: self.arp_tha,
                target_proto_addr: self.arp_tpa,
            },
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "{} {} -> {}, ARP {} ({} {}) -> ({} {})",
            self.interface,
            self.mac_src,
            self.mac_dst,
            self.operation,
            self.arp_sha,
            self.arp_spa,
            self.arp_tha,
            self.arp_tpa,
        )
    }
}
