use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InvalidAddressFamily(pub String);

impl fmt::Display for InvalidAddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InvalidAddressFamily {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AddressFamily {
    #[default]
    #[serde(rename = "IPv4")]
    Ipv4,
    #[serde(rename = "IPv6")]
    Ipv6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4"),
            Self::Ipv6 => write!(f, "IPv6"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = InvalidAddressFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IPv4" => Ok(Self::Ipv4),
            "IPv6" => Ok(Self::Ipv6),
            _ => Err(InvalidAddressFamily(format!(
                "invalid address family: '{s}' (expected 'IPv4' or 'IPv6')"
            ))),
        }
    }
}

impl From<IpAddr> for AddressFamily {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::Ipv4,
            IpAddr::V6(_) => Self::Ipv6,
        }
    }
}

/// Which network an address, interface or network belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    Public,
    Private,
    Utility,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::Utility => write!(f, "utility"),
        }
    }
}

/// An IP address, either standalone (`GET /ip_address`) or nested in a
/// server's details, where only `access`, `address` and `family` are sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpAddress {
    pub address: IpAddr,
    pub access: NetworkType,
    pub family: AddressFamily,
    #[serde(default)]
    pub ptr_record: Option<String>,
    #[serde(default, with = "crate::parsed::option")]
    pub server: Option<Uuid>,
    #[serde(default, with = "crate::yesno")]
    pub floating: bool,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default, with = "crate::yesno::option")]
    pub part_of_plan: Option<bool>,
}
