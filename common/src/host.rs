use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A private cloud host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Host {
    pub id: u64,
    pub description: String,
    pub zone: String,
    #[serde(with = "crate::yesno")]
    pub windows_enabled: bool,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub stats: Vec<HostStat>,
}

impl Host {
    /// Latest value of the named statistic (`cpu_idle`, `memory_free`).
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<&HostStat> {
        self.stats
            .iter()
            .filter(|s| s.name == name)
            .max_by_key(|s| s.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostStat {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}
