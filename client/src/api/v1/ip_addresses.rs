use std::net::IpAddr;

use common::wrapped::Envelope;
use common::{AddressFamily, IpAddress};
use serde::Serialize;
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

#[derive(Debug, Serialize)]
struct IpAddressCreate<'a> {
    family: AddressFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    server: Option<&'a Uuid>,
    #[serde(
        skip_serializing_if = "std::ops::Not::not",
        serialize_with = "common::yesno::serialize"
    )]
    floating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mac: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct IpAddressModify<'a> {
    ptr_record: &'a str,
}

pub struct IpAddressesApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> IpAddressesApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<IpAddress>, UpCloudError> {
        self.client.get("/ip_address", "/ip_addresses/ip_address")
    }

    pub fn get(&self, ip: &IpAddr) -> Result<IpAddress, UpCloudError> {
        self.client.get(&format!("/ip_address/{ip}"), "/ip_address")
    }

    /// Adds a new public address of `family` to `server`.
    pub fn attach(&self, server: &Uuid, family: AddressFamily) -> Result<IpAddress, UpCloudError> {
        let body = IpAddressCreate {
            family,
            server: Some(server),
            floating: false,
            zone: None,
            mac: None,
        };
        self.client.post(
            "/ip_address",
            Some(&Envelope::new("ip_address", &body)),
            "/ip_address",
        )
    }

    pub fn modify_ptr(&self, ip: &IpAddr, ptr_record: &str) -> Result<IpAddress, UpCloudError> {
        self.client.put(
            &format!("/ip_address/{ip}"),
            &Envelope::new("ip_address", &IpAddressModify { ptr_record }),
            "/ip_address",
        )
    }

    pub fn release(&self, ip: &IpAddr) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/ip_address/{ip}"))
    }

    /// Creates a floating IPv4 address in `zone`. With `mac` set it is bound
    /// to that interface immediately, otherwise it stays detached.
    pub fn create_floating(&self, zone: &str, mac: Option<&str>) -> Result<IpAddress, UpCloudError> {
        let body = IpAddressCreate {
            family: AddressFamily::Ipv4,
            server: None,
            floating: true,
            zone: Some(zone),
            mac,
        };
        self.client.post(
            "/ip_address",
            Some(&Envelope::new("ip_address", &body)),
            "/ip_address",
        )
    }

    pub fn list_floating(&self) -> Result<Vec<IpAddress>, UpCloudError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|ip| ip.floating)
            .collect())
    }
}
