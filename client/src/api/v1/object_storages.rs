use common::wrapped::Envelope;
use common::{ObjectStorage, ObjectStorageCreate, ObjectStorageModify};
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

/// S3-compatible object storage instances.
pub struct ObjectStoragesApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> ObjectStoragesApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<ObjectStorage>, UpCloudError> {
        self.client
            .get("/object-storage", "/object_storages/object_storage")
    }

    pub fn get(&self, uuid: &Uuid) -> Result<ObjectStorage, UpCloudError> {
        self.client
            .get(&format!("/object-storage/{uuid}"), "/object_storage")
    }

    pub fn create(&self, request: &ObjectStorageCreate) -> Result<ObjectStorage, UpCloudError> {
        self.client.post(
            "/object-storage",
            Some(&Envelope::new("object_storage", request)),
            "/object_storage",
        )
    }

    pub fn modify(
        &self,
        uuid: &Uuid,
        changes: &ObjectStorageModify,
    ) -> Result<ObjectStorage, UpCloudError> {
        self.client.patch(
            &format!("/object-storage/{uuid}"),
            &Envelope::new("object_storage", changes),
            "/object_storage",
        )
    }

    pub fn delete(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/object-storage/{uuid}"))
    }
}
