//! Round trips between serialized settings documents and changesets.

use grapnel_config::{AuthSettings, apply_changes};
use serde_json::json;

#[test]
fn settings_deserialize_with_defaults_filled_in() -> anyhow::Result<()> {
    let settings: AuthSettings = serde_json::from_value(json!({
        "http_user": "alice",
        "http_passwd": "pw",
    }))?;
    assert!(!settings.http_auth_challenge);
    assert!(!settings.no_netrc);
    assert_eq!(
        settings.http_credentials(),
        Some(("alice".into(), "pw".into()))
    );
    Ok(())
}

#[test]
fn unknown_keys_are_rejected_at_deserialization_time() {
    let result: Result<AuthSettings, _> = serde_json::from_value(json!({
        "proxy_user": "x",
    }));
    assert!(result.is_err());
}

#[test]
fn changesets_layer_over_deserialized_settings() -> anyhow::Result<()> {
    let mut settings: AuthSettings = serde_json::from_value(json!({
        "ftp_user": "alice",
        "ftp_passwd": "pw",
    }))?;
    apply_changes(
        &mut settings,
        &json!({ "no_netrc": true, "ftp_passwd": "rotated" }),
    )?;
    assert!(settings.no_netrc);
    assert_eq!(
        settings.ftp_credentials(),
        Some(("alice".into(), "rotated".into()))
    );
    Ok(())
}
