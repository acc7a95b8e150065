use std::net::IpAddr;

use common::wrapped::Envelope;
use common::{
    IpAddress, RestartRequest, Server, ServerCreate, ServerModify, StopRequest, TagName,
};
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

pub struct ServersApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> ServersApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Server>, UpCloudError> {
        self.client.get("/server", "/servers/server")
    }

    /// Servers carrying every one of `tags`.
    pub fn list_tagged(&self, tags: &[TagName]) -> Result<Vec<Server>, UpCloudError> {
        if tags.is_empty() {
            return Err(UpCloudError::InvalidArgument(
                "at least one tag is required".to_string(),
            ));
        }
        self.client.get(
            &format!("/server/tag/{}", TagName::join(tags)),
            "/servers/server",
        )
    }

    pub fn get(&self, uuid: &Uuid) -> Result<Server, UpCloudError> {
        self.client.get(&format!("/server/{uuid}"), "/server")
    }

    /// Looks up which server holds `ip`, then fetches that server.
    pub fn get_by_ip(&self, ip: &IpAddr) -> Result<Server, UpCloudError> {
        let address: IpAddress = self
            .client
            .get(&format!("/ip_address/{ip}"), "/ip_address")?;
        let uuid = address
            .server
            .ok_or_else(|| UpCloudError::MissingField("/ip_address/server".to_string()))?;
        self.get(&uuid)
    }

    pub fn create(&self, server: &ServerCreate) -> Result<Server, UpCloudError> {
        self.client
            .post("/server", Some(&Envelope::new("server", server)), "/server")
    }

    pub fn modify(&self, uuid: &Uuid, changes: &ServerModify) -> Result<Server, UpCloudError> {
        self.client.put(
            &format!("/server/{uuid}"),
            &Envelope::new("server", changes),
            "/server",
        )
    }

    /// Deletes the server and leaves its storages in place.
    pub fn delete(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/server/{uuid}"))
    }

    pub fn delete_with_storages(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/server/{uuid}?storages=1"))
    }

    pub fn start(&self, uuid: &Uuid) -> Result<Server, UpCloudError> {
        self.client
            .post::<_, ()>(&format!("/server/{uuid}/start"), None, "/server")
    }

    pub fn stop(&self, uuid: &Uuid, request: &StopRequest) -> Result<Server, UpCloudError> {
        self.client.post(
            &format!("/server/{uuid}/stop"),
            Some(&Envelope::new("stop_server", request)),
            "/server",
        )
    }

    pub fn restart(&self, uuid: &Uuid, request: &RestartRequest) -> Result<Server, UpCloudError> {
        self.client.post(
            &format!("/server/{uuid}/restart"),
            Some(&Envelope::new("restart_server", request)),
            "/server",
        )
    }
}
