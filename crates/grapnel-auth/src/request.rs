//! Read-only request surface consumed by the resolution cascade.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Protocols the engine authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    Https,
    /// Plain FTP.
    Ftp,
    /// FTP over SSH.
    Sftp,
}

impl Scheme {
    /// Render the scheme as its lowercase string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Ftp => "ftp",
            Self::Sftp => "sftp",
        }
    }

    /// Whether the HTTP decision tree applies.
    #[must_use]
    pub const fn is_http(self) -> bool {
        matches!(self, Self::Http | Self::Https)
    }

    /// Whether the FTP decision tree applies.
    #[must_use]
    pub const fn is_ftp(self) -> bool {
        matches!(self, Self::Ftp | Self::Sftp)
    }
}

impl FromStr for Scheme {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            "ftp" => Ok(Self::Ftp),
            "sftp" => Ok(Self::Sftp),
            other => Err(AuthError::UnsupportedScheme {
                value: other.to_string(),
            }),
        }
    }
}

/// Read-only view of one outbound request, as the download pipeline hands
/// it to the engine. `dir` carries its trailing slash so `dir + file` is
/// the full request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Request protocol.
    pub scheme: Scheme,
    /// Target host.
    pub host: String,
    /// Target port.
    pub port: u16,
    /// Directory component of the request path, trailing slash included.
    pub dir: String,
    /// File component of the request path.
    pub file: String,
    /// HTTP method.
    pub method: String,
    /// Username embedded in the request URL, when present.
    pub username: Option<String>,
    /// Password embedded in the request URL, when present.
    pub password: Option<String>,
}

impl RequestContext {
    /// Username embedded in the URL; empty strings count as absent.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|user| !user.is_empty())
    }

    /// Whether the URL carried a password component (possibly empty).
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Password embedded in the URL, or the empty string.
    #[must_use]
    pub fn password_or_empty(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    /// Full request path, directory and file concatenated.
    #[must_use]
    pub fn request_uri(&self) -> String {
        format!("{}{}", self.dir, self.file)
    }
}
