//! Deserializers for values typed into browser forms, where an untouched
//! input arrives as an empty string.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldInput {
    Bool(bool),
    Text(String),
    Other(IgnoredAny),
}

/// `""` is absent; any other value must be a `YYYY-MM-DD` date.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Never fails: anything that is not a `YYYY-MM-DD` date becomes `None`.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<FieldInput> = Option::deserialize(deserializer)?;
    let Some(FieldInput::Text(value)) = raw else {
        return Ok(None);
    };

    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Ok(Some(date)),
        Err(e) => {
            tracing::debug!(value, "Ignoring unparseable date: {}", e);
            Ok(None)
        }
    }
}

/// Never fails: accepts booleans and the usual checkbox spellings, anything else is `None`.
pub fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<FieldInput> = Option::deserialize(deserializer)?;
    let flag = match raw {
        Some(FieldInput::Bool(flag)) => Some(flag),
        Some(FieldInput::Text(value)) => match value.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "true" | "1" | "on" | "yes" => Some(true),
            "false" | "0" | "off" | "no" => Some(false),
            other => {
                tracing::debug!(value = other, "Ignoring unrecognised flag");
                None
            }
        },
        Some(FieldInput::Other(_)) | None => None,
    };

    Ok(flag)
}
