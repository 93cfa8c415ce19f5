use std;
use std::mem;

use get_if_addrs;
use libc;

use core::link::{
    Error,
    Link,
    Result,
};
use linux::libc as _libc;

/// Raw [packet socket](http://man7.org/linux/man-pages/man7/packet.7.html)
/// bound to a single interface for sending complete Ethernet frames.
///
/// The socket is opened with protocol 0 so it never receives frames.
pub struct RawSocket {
    fd: libc::c_int,
    ifr_name: String,
    ifindex: libc::c_int,
}

impl RawSocket {
    /// Opens a raw socket and binds it to the interface with the specified
    /// name. Usually requires CAP_NET_RAW.
    pub fn bind(ifr_name: &str) -> Result<RawSocket> {
        let fd = unsafe { libc::socket(libc::AF_PACKET, libc::SOCK_RAW, 0) };

        if fd == -1 {
            return Err(Error::IO(std::io::Error::last_os_error()));
        }

        // Owning the fd from here on closes it on every early return.
        let mut socket = RawSocket {
            fd,
            ifr_name: ifr_name.to_string(),
            ifindex: 0,
        };

        socket.ifindex = socket.query_ifindex()?;

        unsafe {
            let mut addr: libc::sockaddr_ll = mem::zeroed();
            addr.sll_family = libc::AF_PACKET as libc::c_ushort;
            addr.sll_ifindex = socket.ifindex;

            if libc::bind(
                socket.fd,
                &addr as *const libc::sockaddr_ll as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            ) == -1
            {
                return Err(Error::IO(std::io::Error::last_os_error()));
            }
        }

        debug!(
            "Bound raw socket to {} (index {}).",
            socket.ifr_name, socket.ifindex
        );

        Ok(socket)
    }

    fn query_ifindex(&self) -> Result<libc::c_int> {
        let mut ifreq = match _libc::c_ifreq::with_name(&self.ifr_name) {
            Some(ifreq) => ifreq,
            None => return Err(no_such_interface(&self.ifr_name)),
        };

        unsafe {
            if libc::ioctl(
                self.fd,
                _libc::SIOCGIFINDEX,
                &mut ifreq as *mut _libc::c_ifreq,
            ) == -1
            {
                let err = std::io::Error::last_os_error();
                if err.raw_os_error() == Some(libc::ENODEV) {
                    return Err(no_such_interface(&self.ifr_name));
                }
                return Err(Error::IO(err));
            }

            Ok(ifreq.ifr_ifru.ifr_ifindex)
        }
    }
}

impl Link for RawSocket {
    fn send(&mut self, buffer: &[u8]) -> Result<()> {
        let sent = unsafe {
            libc::send(
                self.fd,
                buffer.as_ptr() as *const libc::c_void,
                buffer.len(),
                0,
            )
        };

        if sent < 0 {
            Err(Error::IO(std::io::Error::last_os_error()))
        } else if sent as usize != buffer.len() {
            Err(Error::Truncated {
                sent: sent as usize,
                expected: buffer.len(),
            })
        } else {
            info!("Sent {} bytes on {}.", sent, self.ifr_name);
            Ok(())
        }
    }
}

impl Drop for RawSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

/// Returns the sorted names of the interfaces with an address on the host.
pub fn interface_names() -> Vec<String> {
    let mut names: Vec<_> = match get_if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces.into_iter().map(|interface| interface.name).collect(),
        Err(_) => return vec![],
    };

    names.sort();
    names.dedup();
    names
}

fn no_such_interface(ifr_name: &str) -> Error {
    warn!(
        "Interface '{}' not found, known interfaces: {}.",
        ifr_name,
        interface_names().join(", ")
    );
    Error::NoSuchInterface(ifr_name.to_string())
}
