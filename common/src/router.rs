use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AttachedNetwork {
    pub uuid: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Router {
    pub uuid: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub attached_networks: Vec<AttachedNetwork>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_router_decode() {
        let router: Router = serde_json::from_str(
            r#"{
                "attached_networks": {"network": [{"uuid": "036df3d0-8629-4549-984e-dc86fc3fa1b0"}]},
                "name": "Example router",
                "type": "normal",
                "uuid": "04c0df35-2658-4b0c-8ad7-0a2d2c6b1ad8"
            }"#,
        )
        .unwrap();
        assert_eq!(router.name, "Example router");
        assert_eq!(router.attached_networks.len(), 1);
    }

    #[test]
    fn test_router_without_networks() {
        let router: Router = serde_json::from_str(
            r#"{"attached_networks": {"network": []}, "name": "r", "type": "normal",
                "uuid": "04c0df35-2658-4b0c-8ad7-0a2d2c6b1ad8"}"#,
        )
        .unwrap();
        assert!(router.attached_networks.is_empty());
    }
}
