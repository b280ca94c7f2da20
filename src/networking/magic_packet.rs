use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

use log::trace;

use super::SendError;
use crate::utils::HardwareAddr;

pub const WAKE_ON_LAN_PORT: u16 = 9;

const SYNC_LENGTH: usize = 6;
const REPETITIONS: usize = 16;

/// Wake-on-LAN magic packet: 6 bytes of `0xFF` followed by the target's
/// hardware address repeated 16 times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicPacket {
    payload: [u8; MagicPacket::LENGTH],
}

impl MagicPacket {
    pub const LENGTH: usize = SYNC_LENGTH + REPETITIONS * HardwareAddr::LENGTH;

    pub fn new(mac: HardwareAddr) -> Self {
        let mut payload = [0xFF; Self::LENGTH];
        for chunk in payload[SYNC_LENGTH..].chunks_exact_mut(HardwareAddr::LENGTH) {
            chunk.copy_from_slice(mac.as_bytes());
        }

        Self { payload }
    }

    #[allow(dead_code)]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SendError> {
        let mac: [u8; HardwareAddr::LENGTH] = bytes
            .try_into()
            .map_err(|_| SendError::InvalidAddress(bytes.len()))?;

        Ok(Self::new(HardwareAddr::from(mac)))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.payload
    }

    pub fn broadcast_address() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::BROADCAST, WAKE_ON_LAN_PORT))
    }

    #[allow(dead_code)]
    pub fn broadcast(&self) -> Result<(), SendError> {
        self.broadcast_to(Self::broadcast_address())
    }

    pub fn broadcast_to(&self, destination: SocketAddr) -> Result<(), SendError> {
        let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)))?;
        socket.set_broadcast(true)?;

        trace!("sending {} bytes to {}", self.payload.len(), destination);
        let sent = socket.send_to(&self.payload, destination)?;
        if sent != self.payload.len() {
            return Err(SendError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                format!("sent {} of {} bytes", sent, self.payload.len()),
            )));
        }

        Ok(())
    }
}

impl From<HardwareAddr> for MagicPacket {
    fn from(mac: HardwareAddr) -> Self {
        Self::new(mac)
    }
}
