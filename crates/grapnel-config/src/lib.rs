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

//! Typed authentication options consumed read-only by the credential engine.
//!
//! Layout: `model.rs` (the `AuthSettings` carrier), `validate.rs`
//! (JSON changeset application), `defaults.rs` (built-in identities and
//! flag defaults), `error.rs` (`ConfigError`).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use defaults::{FTP_DEFAULT_PASSWD, FTP_DEFAULT_USER};
pub use error::{ConfigError, ConfigResult};
pub use model::AuthSettings;
pub use validate::apply_changes;
