#![allow(non_camel_case_types)]

use libc;

pub const SIOCGIFINDEX: libc::c_ulong = 0x8933;

#[repr(C)]
#[derive(Clone, Copy)]
pub union c_ifru {
    pub ifr_ifindex: libc::c_int,
    _pad: [u8; 24],
}

#[repr(C)]
#[derive(Clone, Copy)]
/// [https://linux.die.net/man/7/netdevice](https://linux.die.net/man/7/netdevice)
pub struct c_ifreq {
    pub ifr_name: [libc::c_char; libc::IF_NAMESIZE],
    pub ifr_ifru: c_ifru,
}

impl c_ifreq {
    /// Creates a zeroed request for an interface, or None if the name can't be
    /// represented as a NUL terminated interface name.
    pub fn with_name(ifr_name: &str) -> Option<c_ifreq> {
        if ifr_name.is_empty() || ifr_name.len() >= libc::IF_NAMESIZE || ifr_name.contains('\0') {
            return None;
        }

        let mut ifreq = c_ifreq {
            ifr_name: [0; libc::IF_NAMESIZE],
            ifr_ifru: c_ifru { _pad: [0; 24] },
        };

        for (i, c) in ifr_name.as_bytes().iter().enumerate() {
            ifreq.ifr_name[i] = *c as libc::c_char;
        }

        Some(ifreq)
    }
}
