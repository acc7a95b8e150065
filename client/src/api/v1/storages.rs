use common::wrapped::Envelope;
use common::{
    Server, Storage, StorageAttach, StorageClone, StorageCreate, StorageImport,
    StorageImportCreate, StorageKind, StorageModify,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{UpCloudClient, UpCloudError};

#[derive(Debug, Serialize)]
struct Titled<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct DeviceAddress<'a> {
    address: &'a str,
}

#[derive(Debug, Serialize)]
struct CdromLoad<'a> {
    storage: &'a Uuid,
}

/// Disks, CD-ROMs, templates and backups, plus their attachment to servers.
pub struct StoragesApi<'a> {
    client: &'a UpCloudClient,
}

impl<'a> StoragesApi<'a> {
    pub(crate) const fn new(client: &'a UpCloudClient) -> Self {
        Self { client }
    }

    pub fn list(&self, kind: StorageKind) -> Result<Vec<Storage>, UpCloudError> {
        self.client
            .get(&format!("/storage/{kind}"), "/storages/storage")
    }

    pub fn get(&self, uuid: &Uuid) -> Result<Storage, UpCloudError> {
        self.client.get(&format!("/storage/{uuid}"), "/storage")
    }

    pub fn create(&self, storage: &StorageCreate) -> Result<Storage, UpCloudError> {
        self.client
            .post("/storage", Some(&Envelope::new("storage", storage)), "/storage")
    }

    pub fn modify(&self, uuid: &Uuid, changes: &StorageModify) -> Result<Storage, UpCloudError> {
        self.client.put(
            &format!("/storage/{uuid}"),
            &Envelope::new("storage", changes),
            "/storage",
        )
    }

    pub fn delete(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.delete(&format!("/storage/{uuid}"))
    }

    pub fn clone(&self, uuid: &Uuid, request: &StorageClone) -> Result<Storage, UpCloudError> {
        self.client.post(
            &format!("/storage/{uuid}/clone"),
            Some(&Envelope::new("storage", request)),
            "/storage",
        )
    }

    /// Cancels a running clone or backup.
    pub fn cancel_operation(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.post_empty(&format!("/storage/{uuid}/cancel"))
    }

    pub fn backup(&self, uuid: &Uuid, title: &str) -> Result<Storage, UpCloudError> {
        self.client.post(
            &format!("/storage/{uuid}/backup"),
            Some(&Envelope::new("storage", &Titled { title })),
            "/storage",
        )
    }

    /// Restores the backup `uuid` over the storage it was taken from.
    pub fn restore_backup(&self, uuid: &Uuid) -> Result<(), UpCloudError> {
        self.client.post_empty(&format!("/storage/{uuid}/restore"))
    }

    pub fn templatize(&self, uuid: &Uuid, title: &str) -> Result<Storage, UpCloudError> {
        self.client.post(
            &format!("/storage/{uuid}/templatize"),
            Some(&Envelope::new("storage", &Titled { title })),
            "/storage",
        )
    }

    pub fn attach(&self, server: &Uuid, device: &StorageAttach) -> Result<Server, UpCloudError> {
        self.client.post(
            &format!("/server/{server}/storage/attach"),
            Some(&Envelope::new("storage_device", device)),
            "/server",
        )
    }

    /// Detaches whatever sits at bus `address` (`virtio:1`).
    pub fn detach(&self, server: &Uuid, address: &str) -> Result<Server, UpCloudError> {
        self.client.post(
            &format!("/server/{server}/storage/detach"),
            Some(&Envelope::new("storage_device", &DeviceAddress { address })),
            "/server",
        )
    }

    pub fn load_cdrom(&self, server: &Uuid, storage: &Uuid) -> Result<Server, UpCloudError> {
        self.client.post(
            &format!("/server/{server}/cdrom/load"),
            Some(&Envelope::new("storage_device", &CdromLoad { storage })),
            "/server",
        )
    }

    pub fn eject_cdrom(&self, server: &Uuid) -> Result<Server, UpCloudError> {
        self.client
            .post::<_, ()>(&format!("/server/{server}/cdrom/eject"), None, "/server")
    }

    pub fn create_import(
        &self,
        uuid: &Uuid,
        request: &StorageImportCreate,
    ) -> Result<StorageImport, UpCloudError> {
        self.client.post(
            &format!("/storage/{uuid}/import"),
            Some(&Envelope::new("storage_import", request)),
            "/storage_import",
        )
    }

    pub fn import_details(&self, uuid: &Uuid) -> Result<StorageImport, UpCloudError> {
        self.client
            .get(&format!("/storage/{uuid}/import"), "/storage_import")
    }

    pub fn cancel_import(&self, uuid: &Uuid) -> Result<StorageImport, UpCloudError> {
        self.client.post::<_, ()>(
            &format!("/storage/{uuid}/import/cancel"),
            None,
            "/storage_import",
        )
    }
}
