use std::net::SocketAddr;

use log::{debug, warn};

use super::{MagicPacket, SendError, WakeupSender};
use crate::utils::HardwareAddr;

pub struct WakeOnLan {
    name: String,
    mac: HardwareAddr,
    destination: SocketAddr,
}

impl WakeOnLan {
    pub fn new(name: &str, mac: HardwareAddr) -> Self {
        Self {
            name: name.to_string(),
            mac,
            destination: MagicPacket::broadcast_address(),
        }
    }

    #[allow(dead_code)]
    pub fn with_destination(mut self, destination: SocketAddr) -> Self {
        self.destination = destination;
        self
    }
}

impl WakeupSender for WakeOnLan {
    fn wakeup(&self) -> Result<(), SendError> {
        debug!(
            "sending wake-on-lan request to {} [{}] via {}",
            self.name, self.mac, self.destination
        );
        MagicPacket::new(self.mac)
            .broadcast_to(self.destination)
            .map_err(|e| {
                warn!(
                    "failed to send wake-on-lan packet to {} [{}]: {}",
                    self.name, self.mac, e
                );
                e
            })
    }
}
