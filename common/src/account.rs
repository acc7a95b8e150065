use serde::Deserialize;

/// Account information returned by `GET /account`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub username: String,
    pub credits: f64,
    pub resource_limits: ResourceLimits,
}

/// Per-account quotas. Memory is in MiB, storage in GiB.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceLimits {
    pub cores: u64,
    pub memory: u64,
    pub networks: u64,
    pub public_ipv4: u64,
    pub public_ipv6: u64,
    pub storage_hdd: u64,
    pub storage_ssd: u64,
    #[serde(default)]
    pub storage_maxiops: Option<u64>,
    #[serde(default)]
    pub detached_floating_ips: Option<u64>,
}
