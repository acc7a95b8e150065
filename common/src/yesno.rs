//! Booleans encoded as `"yes"` / `"no"`.
//!
//! Use with `#[serde(with = "crate::yesno")]`, or [`option`] for optional
//! fields. Decoding also accepts JSON booleans.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use crate::{NO, YES};

#[must_use]
pub const fn as_str(value: bool) -> &'static str {
    if value { YES } else { NO }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(as_str(*value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(YesNoVisitor)
}

struct YesNoVisitor;

impl Visitor<'_> for YesNoVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("\"yes\", \"no\" or a boolean")
    }

    fn visit_bool<E>(self, value: bool) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_str<E>(self, value: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        match value {
            YES => Ok(true),
            NO => Ok(false),
            _ => Err(de::Error::unknown_variant(value, &[YES, NO])),
        }
    }
}

pub mod option {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(super::as_str(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionVisitor)
    }

    struct OptionVisitor;

    impl<'de> Visitor<'de> for OptionVisitor {
        type Value = Option<bool>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional \"yes\" / \"no\"")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            super::deserialize(deserializer).map(Some)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    struct Flags {
        #[serde(with = "crate::yesno")]
        enabled: bool,
        #[serde(
            default,
            with = "crate::yesno::option",
            skip_serializing_if = "Option::is_none"
        )]
        optional: Option<bool>,
    }

    #[test]
    fn test_decode_yes_no() {
        let flags: Flags = serde_json::from_str(r#"{"enabled": "yes", "optional": "no"}"#).unwrap();
        assert!(flags.enabled);
        assert_eq!(flags.optional, Some(false));
    }

    #[test]
    fn test_decode_native_bool() {
        let flags: Flags = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!flags.enabled);
        assert_eq!(flags.optional, None);
    }

    #[test]
    fn test_decode_null_optional() {
        let flags: Flags = serde_json::from_str(r#"{"enabled": "no", "optional": null}"#).unwrap();
        assert_eq!(flags.optional, None);
    }

    #[test]
    fn test_decode_rejects_other_strings() {
        let result: Result<Flags, _> = serde_json::from_str(r#"{"enabled": "maybe"}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maybe"));
    }

    #[test]
    fn test_encode_as_strings() {
        let flags = Flags {
            enabled: true,
            optional: Some(false),
        };
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"{"enabled":"yes","optional":"no"}"#);
    }
}
