use std::fmt;

use super::super::configuration;
use super::super::utils::{AddressParseError, HardwareAddr};
use super::WakeMethod;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Wakeup {
    MagicPacket(HardwareAddr),
    Http(configuration::Http),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    pub name: String,
    pub ip: Option<String>,
    pub wakeup: Wakeup,
}

impl Machine {
    /// An unconfigured machine only known by its hardware address.
    pub fn from_mac(mac: HardwareAddr) -> Self {
        Self {
            name: mac.to_string(),
            ip: None,
            wakeup: Wakeup::MagicPacket(mac),
        }
    }
}

impl TryFrom<&configuration::Machine> for Machine {
    type Error = AddressParseError;

    // the MAC is only parsed if it is needed to wake the machine
    fn try_from(machine: &configuration::Machine) -> Result<Self, Self::Error> {
        let wakeup = match WakeMethod::select(machine) {
            WakeMethod::Udp => Wakeup::MagicPacket(machine.mac.parse()?),
            WakeMethod::Http(http) => Wakeup::Http(http),
        };

        Ok(Self {
            name: machine.name.clone(),
            ip: machine.ip.clone(),
            wakeup,
        })
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.wakeup {
            Wakeup::MagicPacket(mac) => write!(f, "{} [{}]", self.name, mac),
            Wakeup::Http(http) => write!(f, "{} [{}]", self.name, http.endpoint),
        }
    }
}
