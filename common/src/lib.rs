//! Typed records and request bodies for the UpCloud management API.
//!
//! Responses wrap their payload in envelope fields (`{"hosts": {"host": [..]}}`)
//! and encode booleans and many integers as strings. The helpers in
//! [`yesno`], [`parsed`] and [`wrapped`] absorb those quirks so every record
//! here decodes with plain serde derives.

pub mod account;
pub mod constants;
pub mod error;
pub mod firewall;
pub mod host;
pub mod ip_address;
pub mod network;
pub mod object_storage;
pub mod parsed;
pub mod plan;
pub mod price;
pub mod router;
pub mod server;
pub mod storage;
pub mod tag;
pub mod wrapped;
pub mod yesno;
pub mod zone;

pub use account::{Account, ResourceLimits};
pub use constants::*;
pub use error::{ApiErrorBody, ApiErrorDetail};
pub use firewall::{FirewallAction, FirewallDirection, FirewallRule, Protocol};
pub use host::{Host, HostStat};
pub use ip_address::{AddressFamily, IpAddress, NetworkType};
pub use network::{
    Interface, InterfaceAddress, InterfaceAddressCreate, InterfaceCreate, InterfaceModify,
    IpNetwork, Network, NetworkCreate, NetworkModify, NetworkServer,
};
pub use object_storage::{ObjectStorage, ObjectStorageCreate, ObjectStorageModify};
pub use plan::{Plan, ServerSize};
pub use price::{PriceItem, PriceZone};
pub use router::{AttachedNetwork, Router};
pub use server::{
    LoginUser, RestartRequest, Server, ServerCreate, ServerModify, ServerState, StopRequest,
    StopType, StorageAction, StorageDevice, StorageDeviceCreate, StorageDeviceType, TimeoutAction,
};
pub use storage::{
    BackupRule, Storage, StorageAccess, StorageAttach, StorageClone, StorageCreate, StorageImport,
    StorageImportCreate, StorageImportSource, StorageKind, StorageModify, StorageType,
};
pub use tag::{InvalidTagName, Tag, TagCreate, TagModify, TagName};
pub use zone::{Timezone, Zone};
