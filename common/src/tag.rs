use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::{MAX_TAG_NAME_LENGTH, TAG_SEPARATOR, wrapped};

#[derive(Debug, Clone)]
pub struct InvalidTagName(pub String);

impl fmt::Display for InvalidTagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for InvalidTagName {}

/// A tag name. Tag names are embedded in request paths and joined with
/// [`TAG_SEPARATOR`], so only ASCII alphanumerics, hyphens and underscores
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagName(String);

impl TagName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins `tags` into the `t1,t2` form used by the tag endpoints.
    #[must_use]
    pub fn join(tags: &[Self]) -> String {
        tags.iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(TAG_SEPARATOR)
    }
}

impl TryFrom<String> for TagName {
    type Error = InvalidTagName;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        if tag.is_empty() {
            return Err(InvalidTagName("Tag name cannot be empty".to_string()));
        }

        if tag.len() > MAX_TAG_NAME_LENGTH {
            return Err(InvalidTagName(format!(
                "Tag name must be at most {MAX_TAG_NAME_LENGTH} characters"
            )));
        }

        if !tag
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(InvalidTagName(
                "Tag name can only contain alphanumeric characters, hyphens, and underscores"
                    .to_string(),
            ));
        }

        Ok(Self(tag))
    }
}

impl TryFrom<&str> for TagName {
    type Error = InvalidTagName;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        Self::try_from(tag.to_string())
    }
}

impl FromStr for TagName {
    type Err = InvalidTagName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TagName> for String {
    fn from(tag: TagName) -> Self {
        tag.0
    }
}

impl Serialize for TagName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagNameVisitor;

        impl Visitor<'_> for TagNameVisitor {
            type Value = TagName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid tag name")
            }

            fn visit_str<E>(self, value: &str) -> Result<TagName, E>
            where
                E: de::Error,
            {
                TagName::try_from(value).map_err(|e| de::Error::custom(e.0))
            }
        }

        deserializer.deserialize_str(TagNameVisitor)
    }
}

/// A tag and the servers carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: TagName,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
    pub servers: Vec<Uuid>,
}

/// Body of `POST /tag`.
#[derive(Debug, Clone, Serialize)]
pub struct TagCreate {
    pub name: TagName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "servers")]
    pub servers: Vec<Uuid>,
}

impl TagCreate {
    #[must_use]
    pub const fn new(name: TagName) -> Self {
        Self {
            name,
            description: None,
            servers: Vec::new(),
        }
    }
}

/// Body of `PUT /tag/{name}`. Setting `name` renames the tag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagModify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<TagName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replaces the tagged servers when non-empty.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "servers")]
    pub servers: Vec<Uuid>,
}

fn servers<S: Serializer>(items: &[Uuid], serializer: S) -> Result<S::Ok, S::Error> {
    wrapped::serialize("server", items, serializer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_tag_name_valid() {
        let tag = TagName::try_from("valid-tag_123").unwrap();
        assert_eq!(tag.as_str(), "valid-tag_123");
    }

    #[test]
    fn test_tag_name_empty() {
        let result = TagName::try_from("");
        assert!(result.is_err());
        assert!(result.unwrap_err().0.contains("empty"));
    }

    #[test]
    fn test_tag_name_too_long() {
        let long_tag = "a".repeat(MAX_TAG_NAME_LENGTH + 1);
        let result = TagName::try_from(long_tag);
        assert!(result.is_err());
        assert!(result.unwrap_err().0.contains("32"));
    }

    #[test]
    fn test_tag_name_invalid_characters() {
        for tag in ["with,comma", "with/slash", "with space"] {
            let result = TagName::try_from(tag);
            assert!(result.is_err(), "{tag} should be rejected");
            assert!(result.unwrap_err().0.contains("alphanumeric"));
        }
    }

    #[test]
    fn test_tag_name_join() {
        let tags = vec![
            TagName::try_from("PROD").unwrap(),
            TagName::try_from("web").unwrap(),
        ];
        assert_eq!(TagName::join(&tags), "PROD,web");
        assert_eq!(TagName::join(&[]), "");
    }

    #[test]
    fn test_tag_name_serde_roundtrip() {
        let tag = TagName::try_from("serde-test").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"serde-test\"");
        let deserialized: TagName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, tag);
    }

    #[test]
    fn test_tag_name_serde_invalid() {
        let result: Result<TagName, _> = serde_json::from_str("\"invalid@tag\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_tag_decode() {
        let tag: Tag = serde_json::from_str(
            r#"{"description": "Development servers", "name": "DEV",
                "servers": {"server": ["0077fa3d-32db-4b09-9f5f-30d9e9afb565"]}}"#,
        )
        .unwrap();
        assert_eq!(tag.name.as_str(), "DEV");
        assert_eq!(tag.servers.len(), 1);
    }

    #[test]
    fn test_tag_create_body() {
        let mut create = TagCreate::new(TagName::try_from("DEV").unwrap());
        create.description = Some("Development".to_string());
        create.servers = vec!["0077fa3d-32db-4b09-9f5f-30d9e9afb565".parse().unwrap()];
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({
                "name": "DEV",
                "description": "Development",
                "servers": {"server": ["0077fa3d-32db-4b09-9f5f-30d9e9afb565"]}
            })
        );
    }

    #[test]
    fn test_tag_modify_body_renames() {
        let modify = TagModify {
            name: Some(TagName::try_from("STAGING").unwrap()),
            ..TagModify::default()
        };
        assert_eq!(
            serde_json::to_value(&modify).unwrap(),
            json!({"name": "STAGING"})
        );
    }
}
