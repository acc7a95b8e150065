//! Values the API sends as JSON strings.
//!
//! Core counts, memory amounts, firewall positions and ports arrive as
//! `"1"`, `"1024"`, `"80"`. Decoding accepts either a string or a native JSON
//! number and parses it with [`FromStr`]; encoding always writes a string.
//! [`option`] additionally maps `null` and `""` to `None`.

use std::fmt::Display;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(serde_json::Number),
    Text(String),
}

impl Raw {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

fn parse<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: de::Error,
{
    text.trim()
        .parse()
        .map_err(|e| E::custom(format_args!("invalid value {text:?}: {e}")))
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    parse(&Raw::deserialize(deserializer)?.into_text())
}

pub mod option {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::Raw;

    #[allow(clippy::ref_option)]
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => {
                let text = raw.into_text();
                if text.trim().is_empty() {
                    Ok(None)
                } else {
                    super::parse(&text).map(Some)
                }
            }
        }
    }
}
