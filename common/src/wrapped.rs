//! Single-key collection wrappers.
//!
//! The API never sends a bare array inside a record: server tags arrive as
//! `{"tags": {"tag": ["a", "b"]}}` and storage devices as
//! `{"storage_devices": {"storage_device": [..]}}`. [`deserialize`] unwraps
//! the inner array; [`Envelope`] writes the same shape for request bodies.

use std::collections::BTreeMap;

use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value nested under a single key: `{ key: value }`.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a, T: ?Sized> {
    key: &'static str,
    value: &'a T,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    #[must_use]
    pub const fn new(key: &'static str, value: &'a T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize + ?Sized> Serialize for Envelope<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

/// Writes `items` as `{ key: [items..] }`.
pub fn serialize<T, S>(key: &'static str, items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    Envelope::new(key, items).serialize(serializer)
}

/// Reads `{ key: [items..] }`. `null` and `{}` decode to an empty list; an
/// object with more than one key is rejected.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let wrapper = Option::<BTreeMap<String, Vec<T>>>::deserialize(deserializer)?.unwrap_or_default();
    if wrapper.len() > 1 {
        let keys: Vec<&str> = wrapper.keys().map(String::as_str).collect();
        return Err(de::Error::custom(format_args!(
            "expected a single-key list wrapper, found keys {keys:?}"
        )));
    }
    Ok(wrapper.into_values().next().unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::Envelope;

    #[derive(Debug, Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "crate::wrapped::deserialize")]
        tags: Vec<String>,
    }

    #[derive(Serialize)]
    struct Request {
        #[serde(serialize_with = "tags")]
        tags: Vec<String>,
    }

    fn tags<S: serde::Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        crate::wrapped::serialize("tag", items, serializer)
    }

    #[test]
    fn test_unwraps_inner_list() {
        let tagged: Tagged = serde_json::from_str(r#"{"tags": {"tag": ["PROD", "web"]}}"#).unwrap();
        assert_eq!(tagged.tags, vec!["PROD", "web"]);
    }

    #[test]
    fn test_missing_null_and_empty_are_empty_lists() {
        for json in [r"{}", r#"{"tags": null}"#, r#"{"tags": {}}"#, r#"{"tags": {"tag": []}}"#] {
            let tagged: Tagged = serde_json::from_str(json).unwrap();
            assert!(tagged.tags.is_empty(), "{json} should decode to no tags");
        }
    }

    #[test]
    fn test_rejects_multiple_keys() {
        let result: Result<Tagged, _> =
            serde_json::from_str(r#"{"tags": {"tag": ["a"], "other": ["b"]}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bare_array() {
        let result: Result<Tagged, _> = serde_json::from_str(r#"{"tags": ["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_wrapped_list() {
        let request = Request {
            tags: vec!["db".to_string()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"tags":{"tag":["db"]}}"#);
    }

    #[test]
    fn test_envelope() {
        let title = "backup";
        let json = serde_json::to_string(&Envelope::new("storage", &title)).unwrap();
        assert_eq!(json, r#"{"storage":"backup"}"#);
    }
}
