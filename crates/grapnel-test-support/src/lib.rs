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

//! Shared test helpers used across the credential engine suites.
//! Layout: fixtures.rs (request builders), mocks.rs (in-memory netrc doubles).

pub mod fixtures;
pub mod mocks;

pub use fixtures::RequestBuilder;
pub use mocks::StaticNetrc;
