//! Storages, backups and storage imports.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::StorageDeviceType;

/// Filter accepted by `GET /storage/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageKind {
    #[default]
    Normal,
    Public,
    Private,
    Template,
    Backup,
    Cdrom,
    Favorite,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::Template => write!(f, "template"),
            Self::Backup => write!(f, "backup"),
            Self::Cdrom => write!(f, "cdrom"),
            Self::Favorite => write!(f, "favorite"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Normal,
    Backup,
    Cdrom,
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageAccess {
    Public,
    Private,
}

/// Automatic backup schedule of a storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRule {
    /// `daily` or a weekday (`mon` .. `sun`).
    pub interval: String,
    /// `hhmm`, UTC.
    pub time: String,
    /// Days
    #[serde(with = "crate::parsed")]
    pub retention: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Storage {
    pub uuid: Uuid,
    pub title: String,
    /// GiB
    #[serde(with = "crate::parsed")]
    pub size: u64,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: StorageType,
    pub access: StorageAccess,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub license: Option<f64>,
    #[serde(default, with = "crate::yesno::option")]
    pub encrypted: Option<bool>,
    #[serde(default)]
    pub backup_rule: Option<BackupRule>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub backups: Vec<Uuid>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub servers: Vec<Uuid>,
    /// Source storage of a backup.
    #[serde(default)]
    pub origin: Option<Uuid>,
}

impl Storage {
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.servers.is_empty()
    }
}

/// Body of `POST /storage`.
#[derive(Debug, Clone, Serialize)]
pub struct StorageCreate {
    pub zone: String,
    pub title: String,
    /// GiB
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub encrypted: Option<bool>,
}

impl StorageCreate {
    #[must_use]
    pub fn new(zone: impl Into<String>, title: impl Into<String>, size: u64) -> Self {
        Self {
            zone: zone.into(),
            title: title.into(),
            size,
            tier: None,
            backup_rule: None,
            encrypted: None,
        }
    }
}

/// Body of `PUT /storage/{uuid}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_rule: Option<BackupRule>,
}

/// Body of `POST /storage/{uuid}/clone`.
#[derive(Debug, Clone, Serialize)]
pub struct StorageClone {
    pub zone: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Body of `POST /server/{uuid}/storage/attach`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageAttach {
    #[serde(rename = "type")]
    pub kind: StorageDeviceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Uuid>,
    /// Bus address such as `virtio:1`; picked by the API when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageImportSource {
    HttpImport,
    DirectUpload,
}

/// Body of `POST /storage/{uuid}/import`.
#[derive(Debug, Clone, Serialize)]
pub struct StorageImportCreate {
    pub source: StorageImportSource,
    /// URL for `http_import`; unused for `direct_upload`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
}

/// Progress of a storage import.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageImport {
    pub uuid: Uuid,
    pub state: String,
    pub source: StorageImportSource,
    #[serde(default, with = "crate::parsed::option")]
    pub source_location: Option<String>,
    #[serde(default)]
    pub read_bytes: u64,
    #[serde(default)]
    pub written_bytes: u64,
    #[serde(default, with = "crate::parsed::option")]
    pub error_code: Option<String>,
    #[serde(default, with = "crate::parsed::option")]
    pub error_message: Option<String>,
    #[serde(default, with = "crate::parsed::option")]
    pub sha256sum: Option<String>,
}
