use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectStorage {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub zone: String,
    /// GiB
    pub size: u64,
    pub state: String,
    pub url: String,
    /// MiB
    #[serde(default)]
    pub used_space: u64,
    pub created: DateTime<Utc>,
}

/// Body of `POST /object-storage`.
#[derive(Clone, Serialize)]
pub struct ObjectStorageCreate {
    pub name: String,
    pub zone: String,
    /// GiB
    pub size: u64,
    pub access_key: String,
    pub secret_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Debug for ObjectStorageCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectStorageCreate")
            .field("name", &self.name)
            .field("zone", &self.zone)
            .field("size", &self.size)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("description", &self.description)
            .finish()
    }
}

/// Body of `PATCH /object-storage/{uuid}`. Unset fields are left unchanged.
#[derive(Clone, Default, Serialize)]
pub struct ObjectStorageModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl fmt::Debug for ObjectStorageModify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectStorageModify")
            .field("description", &self.description)
            .field("size", &self.size)
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_storage_decode() {
        let storage: ObjectStorage = serde_json::from_str(
            r#"{
                "created": "2020-07-10T12:00:00Z",
                "description": "Example object storage",
                "name": "example-storage",
                "size": 250,
                "state": "started",
                "url": "https://example-storage.fi-hel2.upcloudobjects.com/",
                "used_space": 12,
                "uuid": "06832a75-be7b-4d23-be05-130dc3dfd9e7",
                "zone": "fi-hel2"
            }"#,
        )
        .unwrap();
        assert_eq!(storage.name, "example-storage");
        assert_eq!(storage.size, 250);
        assert_eq!(storage.used_space, 12);
        assert_eq!(storage.created.to_rfc3339(), "2020-07-10T12:00:00+00:00");
    }

    #[test]
    fn test_object_storage_bad_timestamp() {
        let result: Result<ObjectStorage, _> = serde_json::from_str(
            r#"{"created": "yesterday", "name": "n", "size": 250, "state": "started",
                "url": "https://n/", "uuid": "06832a75-be7b-4d23-be05-130dc3dfd9e7", "zone": "z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_object_storage_secrets_redacted() {
        let create = ObjectStorageCreate {
            name: "n".to_string(),
            zone: "fi-hel2".to_string(),
            size: 250,
            access_key: "access".to_string(),
            secret_key: "super-secret".to_string(),
            description: None,
        };
        assert!(!format!("{create:?}").contains("super-secret"));
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({
                "name": "n",
                "zone": "fi-hel2",
                "size": 250,
                "access_key": "access",
                "secret_key": "super-secret"
            })
        );

        let modify = ObjectStorageModify {
            secret_key: Some("rotated".to_string()),
            ..ObjectStorageModify::default()
        };
        assert!(!format!("{modify:?}").contains("rotated"));
    }
}
