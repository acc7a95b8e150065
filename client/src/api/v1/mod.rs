mod account;
mod firewall;
mod hosts;
mod ip_addresses;
mod networks;
mod object_storages;
mod routers;
mod servers;
mod storages;
mod tags;

pub use firewall::FirewallApi;
pub use hosts::HostsApi;
pub use ip_addresses::IpAddressesApi;
pub use networks::NetworksApi;
pub use object_storages::ObjectStoragesApi;
pub use routers::RoutersApi;
pub use servers::ServersApi;
pub use storages::StoragesApi;
pub use tags::TagsApi;
