//! Path-aware credential index with longest-prefix matching.
//!
//! Records are keyed by `(host, port, path prefix)` with the prefix
//! ordered *descending*. A forward range scan from the probe key then
//! visits longer, more specific prefixes before shorter ones for the same
//! host and port, so the first plain `starts_with` hit is the most
//! specific applicable record. This replaces a prefix trie with an
//! ordered map.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::digest::DigestChallenge;

/// A URL path prefix, normalized to always end with `/`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PathPrefix(String);

impl PathPrefix {
    /// Normalize `path`: the empty path becomes `/`, and a missing
    /// trailing slash is appended.
    #[must_use]
    pub fn new(path: &str) -> Self {
        if path.ends_with('/') {
            Self(path.to_string())
        } else {
            Self(format!("{path}/"))
        }
    }

    /// The normalized prefix string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Identity of one credential binding: the same `(host, port, prefix)`
/// always refers to the same record, regardless of its user/password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredKey {
    /// Host the binding applies to.
    pub host: String,
    /// Port the binding applies to.
    pub port: u16,
    /// Normalized path prefix the binding covers.
    pub prefix: PathPrefix,
}

impl CredKey {
    /// Build a key, normalizing `path` into a prefix.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, path: &str) -> Self {
        Self {
            host: host.into(),
            port,
            prefix: PathPrefix::new(path),
        }
    }
}

impl Ord for CredKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Host and port ascending, prefix descending: the descending leg
        // is what makes the forward scan longest-prefix-first.
        self.host
            .cmp(&other.host)
            .then_with(|| self.port.cmp(&other.port))
            .then_with(|| other.prefix.cmp(&self.prefix))
    }
}

impl PartialOrd for CredKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One known credential binding, mutated in place when re-activated or
/// upgraded from Basic to Digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCred {
    /// Login for the binding.
    pub user: String,
    /// Password for the binding.
    pub password: String,
    activated: bool,
    digest: Option<DigestChallenge>,
}

impl AuthCred {
    /// Create a record; `activated` is pre-set for credentials that were
    /// embedded directly in a request URL.
    #[must_use]
    pub fn new(user: impl Into<String>, password: impl Into<String>, activated: bool) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            activated,
            digest: None,
        }
    }

    /// Mark the record usable for pre-emptive authentication. Idempotent.
    pub fn activate(&mut self) {
        self.activated = true;
    }

    /// Whether the record has been activated.
    #[must_use]
    pub const fn is_activated(&self) -> bool {
        self.activated
    }

    /// Attach (or replace) the server challenge parameters, keeping the
    /// user/password untouched. Params are never removed again.
    pub fn upgrade_to_digest(&mut self, challenge: DigestChallenge) {
        self.digest = Some(challenge);
    }

    /// Challenge parameters, when the record has been upgraded.
    #[must_use]
    pub const fn digest(&self) -> Option<&DigestChallenge> {
        self.digest.as_ref()
    }

    /// Whether the record carries Digest challenge parameters.
    #[must_use]
    pub const fn is_digest(&self) -> bool {
        self.digest.is_some()
    }
}

/// Ordered set of credential bindings, scoped to one resolver instance
/// for the process lifetime. Records are never evicted.
#[derive(Debug, Default)]
pub struct CredIndex {
    creds: BTreeMap<CredKey, AuthCred>,
}

impl CredIndex {
    /// Create an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            creds: BTreeMap::new(),
        }
    }

    /// Locate the most specific record whose prefix covers `path` for the
    /// given host and port.
    pub fn find_match(&mut self, host: &str, port: u16, path: &str) -> Option<&mut AuthCred> {
        let probe = CredKey::new(host, port, path);
        let target = probe.prefix.clone();
        self.creds
            .range_mut(probe..)
            .take_while(|(key, _)| key.host == host && key.port == port)
            .find(|(key, _)| target.as_str().starts_with(key.prefix.as_str()))
            .map(|(_, cred)| cred)
    }

    /// Locate the most specific *activated* record whose prefix covers
    /// `path` for the given host and port.
    ///
    /// Non-activated records are skipped, not shadowing: a dormant
    /// specific binding never hides an activated broader one.
    pub fn find_activated_match(
        &mut self,
        host: &str,
        port: u16,
        path: &str,
    ) -> Option<&mut AuthCred> {
        let probe = CredKey::new(host, port, path);
        let target = probe.prefix.clone();
        self.creds
            .range_mut(probe..)
            .take_while(|(key, _)| key.host == host && key.port == port)
            .find(|(key, cred)| {
                cred.is_activated() && target.as_str().starts_with(key.prefix.as_str())
            })
            .map(|(_, cred)| cred)
    }

    /// Insert a record, or replace the fields of an existing record with
    /// the same `(host, port, prefix)` binding in place.
    pub fn upsert(&mut self, key: CredKey, cred: AuthCred) {
        self.creds.insert(key, cred);
    }

    /// Number of bindings currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creds.len()
    }

    /// Whether the index holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creds.is_empty()
    }
}
