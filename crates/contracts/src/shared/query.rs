//! Разбор параметров строки запроса.

use std::fmt::Display;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer};

/// Пустой параметр (`?store=`) считается невыбранным.
///
/// Значение принимается строкой (строка запроса) или числом (JSON).
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrValue<T> {
        Text(String),
        Value(T),
    }

    match Option::<TextOrValue<T>>::deserialize(deserializer)? {
        Some(TextOrValue::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<T>().map(Some).map_err(de::Error::custom)
            }
        }
        Some(TextOrValue::Value(v)) => Ok(Some(v)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "blank_as_none")]
        store: Option<i64>,
        #[serde(default, deserialize_with = "blank_as_none")]
        state: Option<String>,
    }

    fn parse(json: &str) -> Params {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_blank_values_are_unselected() {
        let params = parse(r#"{"store": "", "state": "  "}"#);
        assert_eq!(params.store, None);
        assert_eq!(params.state, None);

        let params = parse("{}");
        assert_eq!(params.store, None);
        assert_eq!(params.state, None);
    }

    #[test]
    fn test_text_and_numbers_are_parsed() {
        assert_eq!(parse(r#"{"store": "44"}"#).store, Some(44));
        assert_eq!(parse(r#"{"store": 44}"#).store, Some(44));
        assert_eq!(parse(r#"{"state": "Guayas"}"#).state.as_deref(), Some("Guayas"));
        assert!(serde_json::from_str::<Params>(r#"{"store": "abc"}"#).is_err());
    }
}
