use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirewallDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirewallAction {
    Accept,
    Reject,
    Drop,
}

#[derive(Debug, Clone)]
pub struct InvalidProtocol(pub String);

impl fmt::Display for InvalidProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InvalidProtocol {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
            Self::Icmp => write!(f, "icmp"),
        }
    }
}

impl FromStr for Protocol {
    type Err = InvalidProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "icmp" => Ok(Self::Icmp),
            _ => Err(InvalidProtocol(format!(
                "invalid protocol: '{s}' (expected 'tcp', 'udp' or 'icmp')"
            ))),
        }
    }
}

/// A server firewall rule.
///
/// The API returns every field as a string and uses `""` for unset ones; those
/// decode to `None`. `position` is assigned by the API and omitted when
/// creating a rule without an explicit position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRule {
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<u32>,
    pub direction: FirewallDirection,
    pub action: FirewallAction,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub family: Option<AddressFamily>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub protocol: Option<Protocol>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub icmp_type: Option<u8>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_address_start: Option<IpAddr>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_address_end: Option<IpAddr>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_port_start: Option<u16>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_port_end: Option<u16>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_address_start: Option<IpAddr>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_address_end: Option<IpAddr>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_port_start: Option<u16>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_port_end: Option<u16>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<String>,
}

impl FirewallRule {
    /// A rule matching all traffic in `direction`.
    #[must_use]
    pub const fn new(direction: FirewallDirection, action: FirewallAction) -> Self {
        Self {
            position: None,
            direction,
            action,
            family: None,
            protocol: None,
            icmp_type: None,
            source_address_start: None,
            source_address_end: None,
            source_port_start: None,
            source_port_end: None,
            destination_address_start: None,
            destination_address_end: None,
            destination_port_start: None,
            destination_port_end: None,
            comment: None,
        }
    }

    /// Inbound `protocol` traffic to a single destination port.
    #[must_use]
    pub const fn allow_port(family: AddressFamily, protocol: Protocol, port: u16) -> Self {
        let mut rule = Self::new(FirewallDirection::In, FirewallAction::Accept);
        rule.family = Some(family);
        rule.protocol = Some(protocol);
        rule.destination_port_start = Some(port);
        rule.destination_port_end = Some(port);
        rule
    }
}
