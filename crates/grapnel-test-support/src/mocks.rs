//! In-memory doubles for the engine's external collaborators.

use std::collections::HashMap;

use grapnel_auth::{NetrcEntry, NetrcLookup};

/// Netrc collaborator backed by a static machine table, with an optional
/// wildcard default entry.
#[derive(Debug, Default)]
pub struct StaticNetrc {
    machines: HashMap<String, (String, String)>,
    default: Option<(String, String)>,
}

impl StaticNetrc {
    /// Create an empty netrc double.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-host machine entry.
    #[must_use]
    pub fn with_machine(
        mut self,
        host: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.machines
            .insert(host.into(), (login.into(), password.into()));
        self
    }

    /// Set the wildcard `default` entry.
    #[must_use]
    pub fn with_default(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.default = Some((login.into(), password.into()));
        self
    }
}

impl NetrcLookup for StaticNetrc {
    fn lookup(&self, host: &str) -> Option<NetrcEntry> {
        if let Some((login, password)) = self.machines.get(host) {
            return Some(NetrcEntry {
                login: login.clone(),
                password: password.clone(),
                wildcard: false,
            });
        }
        let (login, password) = self.default.as_ref()?;
        Some(NetrcEntry {
            login: login.clone(),
            password: password.clone(),
            wildcard: true,
        })
    }
}
