//! Per-request resolution cascade over the credential index.
//!
//! One factory instance owns the process-wide index and the netrc
//! collaborator. Construct-inject it wherever it is needed; lookups and
//! upserts are not internally synchronized, so multi-threaded hosts must
//! serialize access themselves.

use grapnel_config::{AuthSettings, FTP_DEFAULT_PASSWD, FTP_DEFAULT_USER};
use tracing::debug;

use crate::credential::Credential;
use crate::digest::DigestChallenge;
use crate::index::{AuthCred, CredIndex, CredKey};
use crate::request::{RequestContext, Scheme};
use crate::resolver::{AuthResolver, DefaultAuthResolver, NetrcAuthResolver, NetrcLookup};

/// Resolves a credential per request, caching request-embedded and
/// challenge-activated credentials for reuse within the process.
#[derive(Default)]
pub struct AuthConfigFactory {
    creds: CredIndex,
    netrc: Option<Box<dyn NetrcLookup>>,
}

impl AuthConfigFactory {
    /// Create a factory with an empty index and no netrc collaborator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the netrc collaborator consulted by the resolver
    /// strategies.
    pub fn set_netrc(&mut self, netrc: Box<dyn NetrcLookup>) {
        self.netrc = Some(netrc);
    }

    /// Resolve a credential for `request`, or decline so the caller
    /// proceeds unauthenticated.
    pub fn create_auth_config(
        &mut self,
        request: &RequestContext,
        settings: &AuthSettings,
    ) -> Option<Credential> {
        match request.scheme {
            Scheme::Http | Scheme::Https => self.create_http_auth_config(request, settings),
            Scheme::Ftp | Scheme::Sftp => self.create_ftp_auth_config(request, settings),
        }
    }

    fn create_http_auth_config(
        &mut self,
        request: &RequestContext,
        settings: &AuthSettings,
    ) -> Option<Credential> {
        if settings.http_auth_challenge {
            if let Some(cred) =
                self.creds
                    .find_activated_match(&request.host, request.port, &request.dir)
            {
                debug!(
                    host = %request.host,
                    port = request.port,
                    digest = cred.is_digest(),
                    "using activated credential from index"
                );
                return if let Some(challenge) = cred.digest() {
                    Credential::digest(
                        cred.user.clone(),
                        cred.password.clone(),
                        &request.request_uri(),
                        &request.method,
                        challenge,
                    )
                } else {
                    Credential::basic(cred.user.clone(), cred.password.clone())
                };
            }
            if let Some(user) = request.username() {
                return self.register_request_credential(request, user);
            }
            debug!(host = %request.host, "deferring until the server challenges");
            None
        } else if let Some(user) = request.username() {
            self.register_request_credential(request, user)
        } else {
            self.http_resolver(settings).resolve(&request.host)
        }
    }

    fn create_ftp_auth_config(
        &self,
        request: &RequestContext,
        settings: &AuthSettings,
    ) -> Option<Credential> {
        if let Some(user) = request.username() {
            if request.has_password() {
                // URL-embedded FTP credentials are used directly, never
                // cached for later requests.
                return Credential::basic(user, request.password_or_empty());
            }
            // The URL names a user but no password; a netrc entry for the
            // host counts only when its login matches.
            if !settings.no_netrc
                && let Some(cred) =
                    NetrcAuthResolver::new(self.netrc.as_deref()).resolve(&request.host)
                && cred.user() == user
            {
                return Some(cred);
            }
            return Credential::basic(user, settings.ftp_passwd_or_empty());
        }
        self.ftp_resolver(settings).resolve(&request.host)
    }

    /// Register an activated record for the request's directory and hand
    /// the credential back.
    fn register_request_credential(
        &mut self,
        request: &RequestContext,
        user: &str,
    ) -> Option<Credential> {
        let password = request.password_or_empty();
        self.creds.upsert(
            CredKey::new(request.host.clone(), request.port, &request.dir),
            AuthCred::new(user, password, true),
        );
        debug!(
            host = %request.host,
            dir = %request.dir,
            "registered request-embedded credential"
        );
        Credential::basic(user, password)
    }

    /// Activate the record covering `(host, port, path)` after an
    /// out-of-band server challenge, upgrading it to Digest when
    /// challenge parameters are supplied.
    ///
    /// Returns `false` when no record matches and the HTTP resolver
    /// cannot produce a credential either; nothing is inserted then.
    pub fn activate_auth_cred(
        &mut self,
        host: &str,
        port: u16,
        path: &str,
        settings: &AuthSettings,
        challenge: Option<DigestChallenge>,
    ) -> bool {
        if let Some(cred) = self.creds.find_match(host, port, path) {
            cred.activate();
            if let Some(challenge) = challenge {
                cred.upgrade_to_digest(challenge);
            }
            return true;
        }
        let Some(resolved) = self.http_resolver(settings).resolve(host) else {
            debug!(host, port, "no credential resolvable for activation");
            return false;
        };
        let mut cred = AuthCred::new(resolved.user(), resolved.password(), true);
        if let Some(challenge) = challenge {
            cred.upgrade_to_digest(challenge);
        }
        self.creds.upsert(CredKey::new(host, port, path), cred);
        true
    }

    /// Insert or replace a record directly. Exposed primarily so tests
    /// can seed the index.
    pub fn update_auth_cred(&mut self, key: CredKey, cred: AuthCred) {
        self.creds.upsert(key, cred);
    }

    /// Locate the most specific record covering `(host, port, path)`.
    pub fn find_auth_cred(&mut self, host: &str, port: u16, path: &str) -> Option<&mut AuthCred> {
        self.creds.find_match(host, port, path)
    }

    fn http_resolver(&self, settings: &AuthSettings) -> Box<dyn AuthResolver + '_> {
        if settings.no_netrc {
            Box::new(DefaultAuthResolver::new().with_user_defined(settings.http_credentials()))
        } else {
            Box::new(
                NetrcAuthResolver::new(self.netrc.as_deref())
                    .ignore_default()
                    .with_user_defined(settings.http_credentials()),
            )
        }
    }

    fn ftp_resolver(&self, settings: &AuthSettings) -> Box<dyn AuthResolver + '_> {
        if settings.no_netrc {
            Box::new(
                DefaultAuthResolver::new()
                    .with_user_defined(settings.ftp_credentials())
                    .with_default_cred(FTP_DEFAULT_USER, FTP_DEFAULT_PASSWD),
            )
        } else {
            Box::new(
                NetrcAuthResolver::new(self.netrc.as_deref())
                    .with_user_defined(settings.ftp_credentials())
                    .with_default_cred(FTP_DEFAULT_USER, FTP_DEFAULT_PASSWD),
            )
        }
    }
}

impl std::fmt::Debug for AuthConfigFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfigFactory")
            .field("creds", &self.creds)
            .field("netrc", &self.netrc.is_some())
            .finish()
    }
}
