//! Validation helpers for applying JSON changesets to authentication options.

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};
use crate::model::AuthSettings;

const SECTION: &str = "auth";

/// Apply a JSON object changeset to `settings` in place.
///
/// Unknown fields and type mismatches are rejected without partially
/// applying the changeset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPayload`] when `changes` is not an
/// object, [`ConfigError::UnknownField`] for unrecognised keys, and
/// [`ConfigError::InvalidField`] for type mismatches.
pub fn apply_changes(settings: &mut AuthSettings, changes: &Value) -> ConfigResult<()> {
    let map = changes.as_object().ok_or(ConfigError::InvalidPayload)?;

    let mut staged = settings.clone();
    for (field, value) in map {
        match field.as_str() {
            "http_auth_challenge" => staged.http_auth_challenge = parse_bool(value, field)?,
            "no_netrc" => staged.no_netrc = parse_bool(value, field)?,
            "http_user" => staged.http_user = parse_optional_string(value, field)?,
            "http_passwd" => staged.http_passwd = parse_optional_string(value, field)?,
            "ftp_user" => staged.ftp_user = parse_optional_string(value, field)?,
            "ftp_passwd" => staged.ftp_passwd = parse_optional_string(value, field)?,
            _ => {
                return Err(ConfigError::UnknownField {
                    section: SECTION.to_string(),
                    field: field.clone(),
                });
            }
        }
    }

    *settings = staged;
    Ok(())
}

fn parse_bool(value: &Value, field: &str) -> ConfigResult<bool> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidField {
        section: SECTION.to_string(),
        field: field.to_string(),
        reason: "must be a boolean",
    })
}

fn parse_optional_string(value: &Value, field: &str) -> ConfigResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(ConfigError::InvalidField {
            section: SECTION.to_string(),
            field: field.to_string(),
            reason: "must be a string or null",
        }),
    }
}
