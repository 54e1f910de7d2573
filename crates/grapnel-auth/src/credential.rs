//! Rendered credentials handed back to the network layer.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::info;

use crate::digest::{DigestChallenge, format_authorization};

/// A resolved credential, immutable once constructed.
///
/// A `Digest` credential is only ever built from a server challenge; the
/// engine never initiates the digest scheme on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// HTTP Basic pair.
    Basic {
        /// Login sent to the server.
        user: String,
        /// Password sent (base64-wrapped) to the server.
        password: String,
    },
    /// RFC 2617 Digest response, pre-rendered at construction time.
    Digest {
        /// Login the response was computed for.
        user: String,
        /// Password the response was computed for.
        password: String,
        /// Rendered field list, minus the `Digest ` scheme prefix.
        header: String,
    },
}

impl Credential {
    /// Build a Basic credential, declining when the user is empty.
    #[must_use]
    pub fn basic(user: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let user = user.into();
        if user.is_empty() {
            return None;
        }
        Some(Self::Basic {
            user,
            password: password.into(),
        })
    }

    /// Build a Digest credential from a parsed challenge, declining when
    /// the user is empty. `uri` is the request's dir+file path and
    /// `method` its HTTP method.
    #[must_use]
    pub fn digest(
        user: impl Into<String>,
        password: impl Into<String>,
        uri: &str,
        method: &str,
        challenge: &DigestChallenge,
    ) -> Option<Self> {
        let user = user.into();
        if user.is_empty() {
            return None;
        }
        let password = password.into();
        let header = format_authorization(&user, &password, method, uri, challenge);
        info!(realm = %challenge.realm, uri, "created HTTP digest response");
        Some(Self::Digest {
            user,
            password,
            header,
        })
    }

    /// Login this credential carries.
    #[must_use]
    pub const fn user(&self) -> &str {
        match self {
            Self::Basic { user, .. } | Self::Digest { user, .. } => user.as_str(),
        }
    }

    /// Password this credential carries.
    #[must_use]
    pub const fn password(&self) -> &str {
        match self {
            Self::Basic { password, .. } | Self::Digest { password, .. } => password.as_str(),
        }
    }

    /// Render the literal value of an HTTP `Authorization` header.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        match self {
            Self::Basic { user, password } => {
                let encoded = STANDARD.encode(format!("{user}:{password}"));
                format!("Basic {encoded}")
            }
            Self::Digest { header, .. } => format!("Digest {header}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_rendering_base64_wraps_the_pair() {
        let cred = Credential::basic("bob", "secret").expect("non-empty user");
        assert_eq!(cred.authorization_value(), "Basic Ym9iOnNlY3JldA==");
        assert_eq!(cred.user(), "bob");
        assert_eq!(cred.password(), "secret");
    }

    #[test]
    fn empty_user_declines() {
        assert_eq!(Credential::basic("", "secret"), None);
        let challenge = DigestChallenge {
            realm: "r".into(),
            server_nonce: "n".into(),
            qop: "auth".into(),
            algorithm: "MD5".into(),
        };
        assert_eq!(Credential::digest("", "pw", "/", "GET", &challenge), None);
    }

    #[test]
    fn digest_rendering_carries_the_scheme_prefix() {
        let challenge = DigestChallenge {
            realm: "testrealm@host.com".into(),
            server_nonce: "dcd98b7102dd2f0e8b11d0f600bfb0c093".into(),
            qop: "auth".into(),
            algorithm: "MD5".into(),
        };
        let cred = Credential::digest(
            "Mufasa",
            "Circle Of Life",
            "/dir/index.html",
            "GET",
            &challenge,
        )
        .expect("non-empty user");
        let value = cred.authorization_value();
        assert!(value.starts_with("Digest username=\"Mufasa\""));
        assert!(value.contains("response=\"6629fae49393a05397450978507c4ef1\""));
    }
}
