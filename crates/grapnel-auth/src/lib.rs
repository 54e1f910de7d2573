#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

//! Credential resolution engine for outbound download requests.
//!
//! The engine decides, per HTTP(S)/FTP/SFTP request, which credential to
//! send: explicit request credentials, a previously activated record from
//! the path-aware index, a netrc-derived pair, or a configured default.
//! It renders the winner as a protocol-correct `Authorization` value
//! (Basic, or RFC 2617 Digest once a server challenge has been observed).
//!
//! Layout: `digest.rs` (RFC 2617 response computation), `credential.rs`
//! (rendered credentials), `index.rs` (longest-prefix credential index),
//! `resolver.rs` (netrc/default lookup strategies), `factory.rs` (the
//! per-request resolution cascade), `request.rs` (read-only request
//! surface).

pub mod credential;
pub mod digest;
pub mod error;
pub mod factory;
pub mod index;
pub mod request;
pub mod resolver;

pub use credential::Credential;
pub use digest::{CLIENT_NONCE, DigestChallenge, NONCE_COUNT, compute_response};
pub use error::{AuthError, AuthResult};
pub use factory::AuthConfigFactory;
pub use index::{AuthCred, CredIndex, CredKey, PathPrefix};
pub use request::{RequestContext, Scheme};
pub use resolver::{
    AuthResolver, DefaultAuthResolver, NetrcAuthResolver, NetrcEntry, NetrcLookup,
};
