use serde::Deserialize;

/// A core/memory combination accepted by `POST /server`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ServerSize {
    #[serde(with = "crate::parsed")]
    pub core_number: u32,
    /// MiB
    #[serde(with = "crate::parsed")]
    pub memory_amount: u64,
}

/// A preconfigured server plan (`1xCPU-1GB`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Plan {
    pub name: String,
    #[serde(with = "crate::parsed")]
    pub core_number: u32,
    #[serde(with = "crate::parsed")]
    pub memory_amount: u64,
    /// GiB
    #[serde(with = "crate::parsed")]
    pub storage_size: u64,
    pub storage_tier: String,
    /// MiB of outbound public traffic included per month.
    #[serde(default, with = "crate::parsed::option")]
    pub public_traffic_out: Option<u64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_server_size_decode_strings() {
        let sizes: Vec<ServerSize> = serde_json::from_str(
            r#"[{"core_number": "1", "memory_amount": "512"}, {"core_number": "2", "memory_amount": "2048"}]"#,
        )
        .unwrap();
        assert_eq!(
            sizes[1],
            ServerSize {
                core_number: 2,
                memory_amount: 2048
            }
        );
    }

    #[test]
    fn test_plan_decode() {
        let plan: Plan = serde_json::from_str(
            r#"{"core_number": 1, "memory_amount": 1024, "name": "1xCPU-1GB",
                "public_traffic_out": 1024, "storage_size": 25, "storage_tier": "maxiops"}"#,
        )
        .unwrap();
        assert_eq!(plan.name, "1xCPU-1GB");
        assert_eq!(plan.storage_size, 25);
        assert_eq!(plan.public_traffic_out, Some(1024));
    }
}
