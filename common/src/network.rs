//! SDN networks and server network interfaces.

use std::net::IpAddr;

use ipnet::IpNet;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::{AddressFamily, NetworkType, wrapped};

/// An IP range of a network and its DHCP settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpNetwork {
    pub address: IpNet,
    pub family: AddressFamily,
    #[serde(with = "crate::yesno")]
    pub dhcp: bool,
    #[serde(default, with = "crate::yesno")]
    pub dhcp_default_route: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dhcp_dns: Vec<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp_bootfile_url: Option<String>,
    #[serde(
        default,
        with = "crate::parsed::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gateway: Option<IpAddr>,
}

impl IpNetwork {
    /// A DHCP-enabled range with no gateway or DNS servers.
    #[must_use]
    pub fn dhcp(address: IpNet) -> Self {
        Self {
            address,
            family: match address {
                IpNet::V4(_) => AddressFamily::Ipv4,
                IpNet::V6(_) => AddressFamily::Ipv6,
            },
            dhcp: true,
            dhcp_default_route: false,
            dhcp_dns: Vec::new(),
            dhcp_bootfile_url: None,
            gateway: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkServer {
    pub uuid: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    pub uuid: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NetworkType,
    pub zone: String,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub ip_networks: Vec<IpNetwork>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub servers: Vec<NetworkServer>,
    #[serde(default, with = "crate::parsed::option")]
    pub router: Option<Uuid>,
}

/// Body of `POST /network`.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkCreate {
    pub name: String,
    pub zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<Uuid>,
    #[serde(serialize_with = "ip_networks")]
    pub ip_networks: Vec<IpNetwork>,
}

/// Body of `PUT /network/{uuid}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "ip_networks")]
    pub ip_networks: Vec<IpNetwork>,
}

/// An address bound to a server interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfaceAddress {
    #[serde(default, with = "crate::parsed::option")]
    pub address: Option<IpAddr>,
    pub family: AddressFamily,
    #[serde(default, with = "crate::yesno")]
    pub floating: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Interface {
    pub index: u32,
    #[serde(rename = "type")]
    pub kind: NetworkType,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default, with = "crate::parsed::option")]
    pub network: Option<Uuid>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub ip_addresses: Vec<InterfaceAddress>,
    #[serde(default, with = "crate::yesno")]
    pub bootable: bool,
    #[serde(default, with = "crate::yesno")]
    pub source_ip_filtering: bool,
}

/// Requested address of a new interface; the API picks one when `address`
/// is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterfaceAddressCreate {
    pub family: AddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<IpAddr>,
}

/// Body of `POST /server/{uuid}/networking/interface`.
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceCreate {
    #[serde(rename = "type")]
    pub kind: NetworkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Uuid>,
    #[serde(serialize_with = "interface_addresses")]
    pub ip_addresses: Vec<InterfaceAddressCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub source_ip_filtering: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub bootable: Option<bool>,
}

impl InterfaceCreate {
    /// An interface with one dynamically assigned address of `family`.
    #[must_use]
    pub fn new(kind: NetworkType, family: AddressFamily) -> Self {
        Self {
            kind,
            network: None,
            ip_addresses: vec![InterfaceAddressCreate {
                family,
                address: None,
            }],
            index: None,
            source_ip_filtering: None,
            bootable: None,
        }
    }

    /// A private interface attached to `network`.
    #[must_use]
    pub fn private(network: Uuid, family: AddressFamily) -> Self {
        Self {
            network: Some(network),
            ..Self::new(NetworkType::Private, family)
        }
    }
}

/// Body of `PUT /server/{uuid}/networking/interface/{index}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterfaceModify {
    /// Moves the interface to a new index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "interface_addresses"
    )]
    pub ip_addresses: Vec<InterfaceAddressCreate>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub source_ip_filtering: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub bootable: Option<bool>,
}

fn ip_networks<S: Serializer>(items: &[IpNetwork], serializer: S) -> Result<S::Ok, S::Error> {
    wrapped::serialize("ip_network", items, serializer)
}

fn interface_addresses<S: Serializer>(
    items: &[InterfaceAddressCreate],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    wrapped::serialize("ip_address", items, serializer)
}
