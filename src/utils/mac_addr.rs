use std::fmt;
use std::str::FromStr;

use macaddr::MacAddr6;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid MAC address {value:?}: {source}")]
pub struct AddressParseError {
    pub value: String,
    #[source]
    pub source: macaddr::ParseError,
}

// 6 byte hardware address, EUI-64 addresses are rejected
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct HardwareAddr(MacAddr6);

impl HardwareAddr {
    pub const LENGTH: usize = 6;

    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(MacAddr6::from(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[allow(dead_code)]
    pub fn into_array(self) -> [u8; Self::LENGTH] {
        self.0.into_array()
    }
}

impl FromStr for HardwareAddr {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MacAddr6::from_str(s.trim())
            .map(Self)
            .map_err(|source| AddressParseError {
                value: s.to_string(),
                source,
            })
    }
}

impl From<[u8; HardwareAddr::LENGTH]> for HardwareAddr {
    fn from(bytes: [u8; HardwareAddr::LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl Serialize for HardwareAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HardwareAddr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
