//! Servers and the bodies of server operations.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::network::InterfaceCreate;
use crate::{IpAddress, TagName, wrapped};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerState {
    Started,
    Stopped,
    Maintenance,
    Error,
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Stopped => write!(f, "stopped"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A server as returned by the list and details endpoints.
///
/// The list endpoint omits `ip_addresses` and `storage_devices`; they decode
/// to empty lists there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Server {
    pub uuid: Uuid,
    pub title: String,
    pub hostname: String,
    pub zone: String,
    pub state: ServerState,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(with = "crate::parsed")]
    pub core_number: u32,
    /// MiB
    #[serde(with = "crate::parsed")]
    pub memory_amount: u64,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub host: Option<u64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, with = "crate::yesno::option")]
    pub metadata: Option<bool>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub ip_addresses: Vec<IpAddress>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub storage_devices: Vec<StorageDevice>,
}

impl Server {
    #[must_use]
    pub fn has_tag(&self, tag: &TagName) -> bool {
        self.tags.iter().any(|t| t == tag.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageDeviceType {
    #[default]
    Disk,
    Cdrom,
}

/// A storage attached to a server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageDevice {
    pub address: String,
    pub storage: Uuid,
    #[serde(with = "crate::parsed")]
    pub storage_size: u64,
    pub storage_title: String,
    #[serde(rename = "type")]
    pub kind: StorageDeviceType,
    #[serde(default, with = "crate::yesno::option")]
    pub part_of_plan: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageAction {
    #[default]
    Create,
    Clone,
    Attach,
}

/// A storage to create, clone or attach while creating a server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageDeviceCreate {
    pub action: StorageAction,
    /// Source storage for `clone` and `attach`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// GiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StorageDeviceType>,
}

impl StorageDeviceCreate {
    /// Clones `template` into a new disk of `size` GiB.
    #[must_use]
    pub fn from_template(template: Uuid, title: impl Into<String>, size: u64) -> Self {
        Self {
            action: StorageAction::Clone,
            storage: Some(template),
            title: Some(title.into()),
            size: Some(size),
            ..Self::default()
        }
    }

    /// Creates an empty disk of `size` GiB.
    #[must_use]
    pub fn empty(title: impl Into<String>, size: u64) -> Self {
        Self {
            action: StorageAction::Create,
            title: Some(title.into()),
            size: Some(size),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginUser {
    pub username: String,
    #[serde(serialize_with = "ssh_keys")]
    pub ssh_keys: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub create_password: Option<bool>,
}

/// Body of `POST /server`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerCreate {
    pub zone: String,
    pub title: String,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::parsed::option::serialize"
    )]
    pub core_number: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::parsed::option::serialize"
    )]
    pub memory_amount: Option<u64>,
    #[serde(serialize_with = "storage_devices")]
    pub storage_devices: Vec<StorageDeviceCreate>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "interfaces")]
    pub networking: Vec<InterfaceCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_user: Option<LoginUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub metadata: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "tags")]
    pub tags: Vec<TagName>,
}

impl ServerCreate {
    #[must_use]
    pub fn new(
        zone: impl Into<String>,
        title: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            title: title.into(),
            hostname: hostname.into(),
            ..Self::default()
        }
    }
}

/// Body of `PUT /server/{uuid}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::parsed::option::serialize"
    )]
    pub core_number: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::parsed::option::serialize"
    )]
    pub memory_amount: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::yesno::option::serialize"
    )]
    pub metadata: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopType {
    #[default]
    Soft,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutAction {
    #[default]
    Destroy,
    Ignore,
}

/// Body of `POST /server/{uuid}/stop`, sent as `{"stop_server": {..}}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StopRequest {
    pub stop_type: StopType,
    /// Seconds to wait for a soft stop before forcing it.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::parsed::option::serialize"
    )]
    pub timeout: Option<u64>,
}

/// Body of `POST /server/{uuid}/restart`, sent as `{"restart_server": {..}}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RestartRequest {
    pub stop_type: StopType,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::parsed::option::serialize"
    )]
    pub timeout: Option<u64>,
    pub timeout_action: TimeoutAction,
}

fn storage_devices<S: Serializer>(
    items: &[StorageDeviceCreate],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    wrapped::serialize("storage_device", items, serializer)
}

fn interfaces<S: Serializer>(items: &[InterfaceCreate], serializer: S) -> Result<S::Ok, S::Error> {
    let interfaces = wrapped::Envelope::new("interface", items);
    wrapped::Envelope::new("interfaces", &interfaces).serialize(serializer)
}

fn ssh_keys<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    wrapped::serialize("ssh_key", items, serializer)
}

fn tags<S: Serializer>(items: &[TagName], serializer: S) -> Result<S::Ok, S::Error> {
    wrapped::serialize("tag", items, serializer)
}
