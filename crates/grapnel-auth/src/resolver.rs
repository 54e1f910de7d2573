//! Pluggable lookup-by-host credential strategies.
//!
//! The netrc file itself is an external collaborator; the engine only
//! consumes it through [`NetrcLookup`]. Strategies are built fresh per
//! resolution, borrowing the collaborator from the factory.

use tracing::debug;

use crate::credential::Credential;

/// One netrc machine entry as surfaced by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetrcEntry {
    /// Login recorded for the machine.
    pub login: String,
    /// Password recorded for the machine.
    pub password: String,
    /// Whether the entry came from the wildcard `default` machine rather
    /// than an exact host match.
    pub wildcard: bool,
}

/// Lookup-by-host capability backed by a netrc file.
pub trait NetrcLookup: Send + Sync {
    /// Find the entry covering `host`, exact matches preferred over the
    /// wildcard default.
    fn lookup(&self, host: &str) -> Option<NetrcEntry>;
}

/// Polymorphic lookup-by-host producing a credential or nothing.
pub trait AuthResolver {
    /// Resolve a credential for `host`.
    fn resolve(&self, host: &str) -> Option<Credential>;
}

/// Resolver backed by the netrc collaborator, falling back to a
/// statically configured credential when netrc yields nothing.
pub struct NetrcAuthResolver<'a> {
    netrc: Option<&'a dyn NetrcLookup>,
    ignore_default: bool,
    user_defined: Option<(String, String)>,
    default_cred: Option<(String, String)>,
}

impl<'a> NetrcAuthResolver<'a> {
    /// Create a resolver borrowing the netrc collaborator, when present.
    #[must_use]
    pub const fn new(netrc: Option<&'a dyn NetrcLookup>) -> Self {
        Self {
            netrc,
            ignore_default: false,
            user_defined: None,
            default_cred: None,
        }
    }

    /// Install the built-in default identity used when neither netrc nor
    /// configuration yields anything. FTP resolution installs the
    /// anonymous identity here, HTTP installs nothing.
    #[must_use]
    pub fn with_default_cred(
        mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.default_cred = Some((user.into(), password.into()));
        self
    }

    /// Exclude wildcard `default` entries from lookups; only exact host
    /// matches count. HTTP resolution uses this, FTP does not.
    #[must_use]
    pub const fn ignore_default(mut self) -> Self {
        self.ignore_default = true;
        self
    }

    /// Set the statically configured fallback credential.
    #[must_use]
    pub fn with_user_defined(mut self, cred: Option<(String, String)>) -> Self {
        self.user_defined = cred;
        self
    }
}

impl AuthResolver for NetrcAuthResolver<'_> {
    fn resolve(&self, host: &str) -> Option<Credential> {
        if let Some(netrc) = self.netrc
            && let Some(entry) = netrc.lookup(host)
            && !(self.ignore_default && entry.wildcard)
        {
            debug!(host, wildcard = entry.wildcard, "resolved credential from netrc");
            return Credential::basic(entry.login, entry.password);
        }
        let (user, password) = self.user_defined.as_ref().or(self.default_cred.as_ref())?;
        debug!(host, "resolved user-defined credential");
        Credential::basic(user.clone(), password.clone())
    }
}

/// Resolver returning the statically configured credential, or a built-in
/// default identity when one is installed (anonymous FTP).
#[derive(Debug, Default)]
pub struct DefaultAuthResolver {
    user_defined: Option<(String, String)>,
    default_cred: Option<(String, String)>,
}

impl DefaultAuthResolver {
    /// Create a resolver with neither a configured nor a default identity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            user_defined: None,
            default_cred: None,
        }
    }

    /// Set the statically configured credential.
    #[must_use]
    pub fn with_user_defined(mut self, cred: Option<(String, String)>) -> Self {
        self.user_defined = cred;
        self
    }

    /// Install the built-in default identity used when nothing is
    /// configured.
    #[must_use]
    pub fn with_default_cred(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.default_cred = Some((user.into(), password.into()));
        self
    }
}

impl AuthResolver for DefaultAuthResolver {
    fn resolve(&self, host: &str) -> Option<Credential> {
        let (user, password) = self.user_defined.as_ref().or(self.default_cred.as_ref())?;
        debug!(host, user = %user, "resolved configured/default credential");
        Credential::basic(user.clone(), password.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneEntry(NetrcEntry);

    impl NetrcLookup for OneEntry {
        fn lookup(&self, _host: &str) -> Option<NetrcEntry> {
            Some(self.0.clone())
        }
    }

    fn exact_entry() -> NetrcEntry {
        NetrcEntry {
            login: "nlogin".into(),
            password: "npass".into(),
            wildcard: false,
        }
    }

    #[test]
    fn netrc_exact_match_wins_over_user_defined() {
        let netrc = OneEntry(exact_entry());
        let resolver = NetrcAuthResolver::new(Some(&netrc))
            .with_user_defined(Some(("cfg".into(), "cfgpw".into())));
        let cred = resolver.resolve("example.com").expect("netrc entry");
        assert_eq!(cred.user(), "nlogin");
    }

    #[test]
    fn wildcard_entries_are_skipped_when_ignored() {
        let netrc = OneEntry(NetrcEntry {
            wildcard: true,
            ..exact_entry()
        });
        let resolver = NetrcAuthResolver::new(Some(&netrc))
            .ignore_default()
            .with_user_defined(Some(("cfg".into(), "cfgpw".into())));
        let cred = resolver.resolve("example.com").expect("fallback");
        assert_eq!(cred.user(), "cfg");

        let bare = NetrcAuthResolver::new(Some(&netrc)).ignore_default();
        assert_eq!(bare.resolve("example.com"), None);
    }

    #[test]
    fn wildcard_entries_count_when_not_ignored() {
        let netrc = OneEntry(NetrcEntry {
            wildcard: true,
            ..exact_entry()
        });
        let resolver = NetrcAuthResolver::new(Some(&netrc));
        let cred = resolver.resolve("example.com").expect("wildcard entry");
        assert_eq!(cred.user(), "nlogin");
    }

    #[test]
    fn default_resolver_prefers_user_defined() {
        let resolver = DefaultAuthResolver::new()
            .with_user_defined(Some(("cfg".into(), "cfgpw".into())))
            .with_default_cred("anonymous", "GRAPNEL@");
        assert_eq!(resolver.resolve("h").expect("configured").user(), "cfg");

        let anon = DefaultAuthResolver::new().with_default_cred("anonymous", "GRAPNEL@");
        assert_eq!(anon.resolve("h").expect("default").user(), "anonymous");

        assert_eq!(DefaultAuthResolver::new().resolve("h"), None);
    }
}
