use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub id: String,
    pub description: String,
    /// Absent for older API responses.
    #[serde(default, with = "crate::yesno::option")]
    pub public: Option<bool>,
    #[serde(default)]
    pub parent_zone: Option<String>,
}

/// An IANA timezone name as listed by `GET /timezone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Timezone(String);

impl Timezone {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Timezone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_decode() {
        let zones: Vec<Zone> = serde_json::from_str(
            r#"[
                {"id": "fi-hel1", "description": "Helsinki #1", "public": "yes"},
                {"id": "private-1", "description": "Private", "public": "no", "parent_zone": "fi-hel1"},
                {"id": "de-fra1", "description": "Frankfurt #1"}
            ]"#,
        )
        .unwrap();
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0].public, Some(true));
        assert_eq!(zones[1].parent_zone.as_deref(), Some("fi-hel1"));
        assert_eq!(zones[2].public, None);
    }

    #[test]
    fn test_timezone_transparent() {
        let tz: Vec<Timezone> = serde_json::from_str(r#"["Europe/Helsinki", "UTC"]"#).unwrap();
        assert_eq!(tz[0].as_str(), "Europe/Helsinki");
        assert_eq!(tz[1].to_string(), "UTC");
    }
}
