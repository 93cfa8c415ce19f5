extern crate arpgen;
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate lazy_static;

use arpgen::core::config::{
    keys,
    Config,
};
use arpgen::core::link::{
    send_frame,
    Error as LinkError,
    Link,
    Result as LinkResult,
};
use arpgen::core::packet::ArpFrame;
use arpgen::core::repr::{
    ArpOp,
    EthernetAddress,
    Ipv4Address,
};
use arpgen::Error;

lazy_static! {
    /// Overrides of a request for 192.168.2.224 from 192.168.2.1.
    static ref OVERRIDES: Vec<(&'static str, &'static str)> = vec![
        (keys::INTERFACE, "eth0"),
        (keys::MAC_SRC, "02:A1:A2:A3:A4:A5"),
        (keys::MAC_DST, "FF:FF:FF:FF:FF:FF"),
        (keys::OPERATION, "1"),
        (keys::ARP_SHA, "02:A1:A2:A3:A4:A5"),
        (keys::ARP_SPA, "192.168.2.1"),
        (keys::ARP_THA, "00:00:00:00:00:00"),
        (keys::ARP_TPA, "192.168.2.224"),
    ];

    static ref DEFAULT_FRAME: Vec<u8> = {
        let mut frame = vec![];
        frame.extend_from_slice(&[0xFF; 6]);
        frame.extend_from_slice(&[0x00; 6]);
        frame.extend_from_slice(&[0x08, 0x06]);
        frame.extend_from_slice(&[0x00, 0x01, 0x08, 0x00, 0x06, 0x04, 0x00, 0x01]);
        frame.extend_from_slice(&[0x00; 6]);
        frame.extend_from_slice(&[0x00; 4]);
        frame.extend_from_slice(&[0xFF; 6]);
        frame.extend_from_slice(&[0xFF; 4]);
        frame
    };
}

/// A link that keeps every frame sent across it.
struct Capture {
    frames: Vec<Vec<u8>>,
}

impl Link for Capture {
    fn send(&mut self, buffer: &[u8]) -> LinkResult<()> {
        self.frames.push(buffer.to_vec());
        Ok(())
    }
}

/// A link that is never up.
struct Unplugged;

impl Link for Unplugged {
    fn send(&mut self, _: &[u8]) -> LinkResult<()> {
        Err(LinkError::Unknown("unplugged"))
    }
}

fn configs() -> Vec<Config> {
    vec![
        Config::default(),
        Config::from_pairs(OVERRIDES.iter().cloned()).unwrap(),
        Config::from_pairs(vec![
            (keys::OPERATION, "2"),
            (keys::ARP_SHA, "00:11:22:33:44:55"),
            (keys::ARP_TPA, "10.0.0.1"),
        ]).unwrap(),
        Config::from_pairs(vec![(keys::OPERATION, "65535")]).unwrap(),
    ]
}

#[test]
fn default_frame_bytes() {
    let buffer = Config::default().frame().serialize();
    assert_eq!(&buffer[..], &DEFAULT_FRAME[..]);
}

#[test]
fn frames_are_42_bytes() {
    for config in configs() {
        assert_eq!(config.frame().serialize().len(), 42);
    }
}

#[test]
fn serialize_is_deterministic() {
    for config in configs() {
        assert_eq!(
            &config.frame().serialize()[..],
            &config.frame().serialize()[..]
        );
    }
}

#[test]
fn deserialize_recovers_fields() {
    for config in configs() {
        let buffer = config.frame().serialize();
        let frame = ArpFrame::deserialize(&buffer[..]).unwrap();
        assert_eq!(frame, config.frame());
        assert_eq!(frame.dst_addr, config.mac_dst);
        assert_eq!(frame.src_addr, config.mac_src);
        assert_eq!(frame.arp.op, config.operation);
        assert_eq!(frame.arp.source_hw_addr, config.arp_sha);
        assert_eq!(frame.arp.source_proto_addr, config.arp_spa);
        assert_eq!(frame.arp.target_hw_addr, config.arp_tha);
        assert_eq!(frame.arp.target_proto_addr, config.arp_tpa);
    }
}

#[test]
fn request_for_neighbour() {
    let config = Config::from_pairs(OVERRIDES.iter().cloned()).unwrap();
    assert_eq!(config.mac_src, EthernetAddress::new([0x02, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]));
    assert_eq!(config.arp_tpa, Ipv4Address::new([192, 168, 2, 224]));

    let buffer = config.frame().serialize();
    assert_eq!(&buffer[0 .. 6], [0xFF; 6]);
    assert_eq!(&buffer[6 .. 12], [0x02, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    assert_eq!(&buffer[20 .. 22], [0x00, 0x01]);
    assert_eq!(&buffer[22 .. 28], [0x02, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    assert_eq!(&buffer[28 .. 32], [0xC0, 0xA8, 0x02, 0x01]);
    assert_eq!(&buffer[32 .. 38], [0x00; 6]);
    assert_eq!(&buffer[38 .. 42], [0xC0, 0xA8, 0x02, 0xE0]);
}

#[test]
fn reply_operation() {
    let config = Config::from_pairs(vec![(keys::OPERATION, "2")]).unwrap();
    assert_eq!(config.operation, ArpOp::REPLY);
    assert_eq!(&config.frame().serialize()[20 .. 22], [0x00, 0x02]);
}

#[test]
fn malformed_mac_src() {
    assert_matches!(
        Config::from_pairs(vec![(keys::MAC_SRC, "02:A1:A2")]),
        Err(Error::MalformedAddress(_))
    );
}

#[test]
fn malformed_arp_spa() {
    assert_matches!(
        Config::from_pairs(vec![(keys::ARP_SPA, "192.168.2.999")]),
        Err(Error::MalformedAddress(_))
    );
}

#[test]
fn malformed_operation() {
    assert_matches!(
        Config::from_pairs(vec![(keys::OPERATION, "abc")]),
        Err(Error::MalformedField(_))
    );
}

#[test]
fn malformed_override_sends_nothing() {
    let mut link = Capture { frames: vec![] };

    let result = Config::from_pairs(vec![
        (keys::MAC_SRC, "02:A1:A2:A3:A4:A5"),
        (keys::ARP_TPA, "10.0.0"),
    ]).and_then(|config| send_frame(&mut link, &config.frame()));

    assert_matches!(result, Err(Error::MalformedAddress(_)));
    assert!(link.frames.is_empty());
}

#[test]
fn send_hands_off_serialized_frame() {
    let mut link = Capture { frames: vec![] };
    let config = Config::from_pairs(OVERRIDES.iter().cloned()).unwrap();

    let sent = send_frame(&mut link, &config.frame()).unwrap();

    assert_eq!(link.frames.len(), 1);
    assert_eq!(&link.frames[0][..], &sent[..]);
    assert_eq!(&sent[..], &config.frame().serialize()[..]);
}

#[test]
fn transmission_error_is_reported() {
    assert_matches!(
        send_frame(&mut Unplugged, &Config::default().frame()),
        Err(Error::Transmission(LinkError::Unknown("unplugged")))
    );
}
