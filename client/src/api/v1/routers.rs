use common::Router;
use common::wrapped::Envelope;
use serde::Serialize;
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

#[derive(Debug, Serialize)]
struct RouterName<'a> {
    name: &'a str,
}

pub struct RoutersApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> RoutersApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Router>, UpCloudError> {
        self.client.get("/router", "/routers/router")
    }

    pub fn get(&self, uuid: &Uuid) -> Result<Router, UpCloudError> {
        self.client.get(&format!("/router/{uuid}"), "/router")
    }

    pub fn create(&self, name: &str) -> Result<Router, UpCloudError> {
        self.client.post(
            "/router",
            Some(&Envelope::new("router", &RouterName { name })),
            "/router",
        )
    }

    pub fn modify(&self, uuid: &Uuid, name: &str) -> Result<Router, UpCloudError> {
        self.client.put(
            &format!("/router/{uuid}"),
            &Envelope::new("router", &RouterName { name }),
            "/router",
        )
    }

    /// Fails while networks are still attached.
    pub fn delete(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/router/{uuid}"))
    }
}
