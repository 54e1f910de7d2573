//! Built-in identities and flag defaults for authentication options.
//!
//! # Design
//! - Centralize the anonymous FTP identity so resolver and tests agree.
//! - Keep flag defaults explicit rather than relying on `bool::default()`
//!   at every call site.

/// Login used for anonymous FTP when nothing else is configured.
pub const FTP_DEFAULT_USER: &str = "anonymous";
/// Password reported alongside the anonymous FTP login.
pub const FTP_DEFAULT_PASSWD: &str = "GRAPNEL@";

/// Default for the HTTP challenge-driven authentication flag.
pub(crate) const HTTP_AUTH_CHALLENGE: bool = false;
/// Default for the netrc opt-out flag.
pub(crate) const NO_NETRC: bool = false;
