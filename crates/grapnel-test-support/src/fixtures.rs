//! Request fixtures for exercising the resolution cascade.

use grapnel_auth::{RequestContext, Scheme};

/// Builder producing [`RequestContext`] values with sensible defaults:
/// the scheme's well-known port, the root path, and the `GET` method.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    inner: RequestContext,
}

impl RequestBuilder {
    /// Start building a request for `scheme://host/`.
    #[must_use]
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        let port = match scheme {
            Scheme::Http => 80,
            Scheme::Https => 443,
            Scheme::Ftp => 21,
            Scheme::Sftp => 22,
        };
        Self {
            inner: RequestContext {
                scheme,
                host: host.into(),
                port,
                dir: "/".to_string(),
                file: String::new(),
                method: "GET".to_string(),
                username: None,
                password: None,
            },
        }
    }

    /// Override the port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.inner.port = port;
        self
    }

    /// Set the directory (trailing slash included) and file components.
    #[must_use]
    pub fn path(mut self, dir: impl Into<String>, file: impl Into<String>) -> Self {
        self.inner.dir = dir.into();
        self.inner.file = file.into();
        self
    }

    /// Override the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.inner.method = method.into();
        self
    }

    /// Embed a username in the request URL.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.inner.username = Some(user.into());
        self
    }

    /// Embed a password in the request URL.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = Some(password.into());
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> RequestContext {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_track_the_scheme() {
        let request = RequestBuilder::new(Scheme::Https, "example.com").build();
        assert_eq!(request.port, 443);
        assert_eq!(request.request_uri(), "/");
        assert_eq!(request.method, "GET");
        assert!(request.username().is_none());
        assert!(!request.has_password());
    }

    #[test]
    fn overrides_apply() {
        let request = RequestBuilder::new(Scheme::Ftp, "ftp.example.com")
            .port(2121)
            .path("/pub/", "file.iso")
            .user("alice")
            .password("pw")
            .build();
        assert_eq!(request.port, 2121);
        assert_eq!(request.request_uri(), "/pub/file.iso");
        assert_eq!(request.username(), Some("alice"));
        assert!(request.has_password());
    }
}
