use common::wrapped::Envelope;
use common::{Interface, InterfaceCreate, InterfaceModify, Network, NetworkCreate, NetworkModify};
use url::form_urlencoded;
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

/// SDN networks and the interfaces servers use to reach them.
pub struct NetworksApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> NetworksApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    /// All networks, or only those in `zone`.
    pub fn list(&self, zone: Option<&str>) -> Result<Vec<Network>, UpCloudError> {
        let path = match zone {
            Some(zone) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("zone", zone)
                    .finish();
                format!("/network/?{query}")
            }
            None => "/network".to_string(),
        };
        self.client.get(&path, "/networks/network")
    }

    pub fn get(&self, uuid: &Uuid) -> Result<Network, UpCloudError> {
        self.client.get(&format!("/network/{uuid}"), "/network")
    }

    pub fn create(&self, network: &NetworkCreate) -> Result<Network, UpCloudError> {
        self.client
            .post("/network", Some(&Envelope::new("network", network)), "/network")
    }

    pub fn modify(&self, uuid: &Uuid, changes: &NetworkModify) -> Result<Network, UpCloudError> {
        self.client.put(
            &format!("/network/{uuid}"),
            &Envelope::new("network", changes),
            "/network",
        )
    }

    pub fn delete(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/network/{uuid}"))
    }

    pub fn server_networking(&self, server: &Uuid) -> Result<Vec<Interface>, UpCloudError> {
        self.client.get(
            &format!("/server/{server}/networking"),
            "/networking/interfaces/interface",
        )
    }

    pub fn create_interface(
        &self,
        server: &Uuid,
        interface: &InterfaceCreate,
    ) -> Result<Interface, UpCloudError> {
        self.client.post(
            &format!("/server/{server}/networking/interface"),
            Some(&Envelope::new("interface", interface)),
            "/interface",
        )
    }

    pub fn modify_interface(
        &self,
        server: &Uuid,
        index: u32,
        changes: &InterfaceModify,
    ) -> Result<Interface, UpCloudError> {
        self.client.put(
            &format!("/server/{server}/networking/interface/{index}"),
            &Envelope::new("interface", changes),
            "/interface",
        )
    }

    pub fn delete_interface(&self, server: &Uuid, index: u32) -> Result<(), UpCloudError> {
        self.client
            .delete(&format!("/server/{server}/networking/interface/{index}"))
    }
}
