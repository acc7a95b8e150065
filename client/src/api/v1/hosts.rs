use common::Host;

use crate::{UpCloudClient, UpCloudError};

/// Private cloud hosts available to the account.
pub struct HostsApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> HostsApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    /// Hosts in the order the API returns them.
    pub fn list(&self) -> Result<Vec<Host>, UpCloudError> {
        self.client.get("/host", "/hosts/host")
    }

    pub fn get(&self, id: u64) -> Result<Host, UpCloudError> {
        self.client.get(&format!("/host/{id}"), "/host")
    }
}
