//! Typed authentication option models.
//!
//! # Design
//! - Pure data carrier; the engine reads it, never writes it.
//! - Optional user/passwd pairs mirror the command-line options of the
//!   download client (`--http-user`, `--ftp-passwd`, ...).

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Authentication options consumed by the credential engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthSettings {
    /// Defer HTTP authentication until the server issues a challenge.
    pub http_auth_challenge: bool,
    /// Never consult the netrc collaborator.
    pub no_netrc: bool,
    /// Statically configured HTTP user.
    pub http_user: Option<String>,
    /// Statically configured HTTP password.
    pub http_passwd: Option<String>,
    /// Statically configured FTP user.
    pub ftp_user: Option<String>,
    /// Statically configured FTP password.
    pub ftp_passwd: Option<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            http_auth_challenge: defaults::HTTP_AUTH_CHALLENGE,
            no_netrc: defaults::NO_NETRC,
            http_user: None,
            http_passwd: None,
            ftp_user: None,
            ftp_passwd: None,
        }
    }
}

impl AuthSettings {
    /// Configured HTTP credential pair, when an HTTP user is set.
    ///
    /// A missing password degrades to the empty string, matching the
    /// behaviour of passing `--http-user` without `--http-passwd`.
    #[must_use]
    pub fn http_credentials(&self) -> Option<(String, String)> {
        let user = self.http_user.clone().filter(|user| !user.is_empty())?;
        Some((user, self.http_passwd.clone().unwrap_or_default()))
    }

    /// Configured FTP credential pair, when an FTP user is set.
    #[must_use]
    pub fn ftp_credentials(&self) -> Option<(String, String)> {
        let user = self.ftp_user.clone().filter(|user| !user.is_empty())?;
        Some((user, self.ftp_passwd.clone().unwrap_or_default()))
    }

    /// Configured FTP password, or the empty string when unset.
    #[must_use]
    pub fn ftp_passwd_or_empty(&self) -> String {
        self.ftp_passwd.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_netrc_and_skip_challenge_mode() {
        let settings = AuthSettings::default();
        assert!(!settings.http_auth_challenge);
        assert!(!settings.no_netrc);
        assert_eq!(settings.http_credentials(), None);
        assert_eq!(settings.ftp_credentials(), None);
    }

    #[test]
    fn missing_password_degrades_to_empty_string() {
        let settings = AuthSettings {
            http_user: Some("alice".into()),
            ..AuthSettings::default()
        };
        assert_eq!(
            settings.http_credentials(),
            Some(("alice".into(), String::new()))
        );
    }

    #[test]
    fn empty_user_counts_as_unset() {
        let settings = AuthSettings {
            ftp_user: Some(String::new()),
            ftp_passwd: Some("pw".into()),
            ..AuthSettings::default()
        };
        assert_eq!(settings.ftp_credentials(), None);
        assert_eq!(settings.ftp_passwd_or_empty(), "pw");
    }
}
