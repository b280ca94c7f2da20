mod mac_addr;

pub use mac_addr::{AddressParseError, HardwareAddr};
