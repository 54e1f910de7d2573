//! RFC 2617 Digest response computation.
//!
//! Challenge parsing is the caller's job; this module consumes
//! already-parsed parameters and produces the response hex plus the
//! formatted `Authorization` field list. Each intermediate hash is
//! rendered to lowercase hex before feeding the next step, which is what
//! RFC 2617 servers expect; hashing raw digest bytes instead would break
//! interoperability.

use md5::{Digest as _, Md5};
use serde::{Deserialize, Serialize};

/// Nonce count sent with every response.
///
/// Fixed rather than incremented per request; servers that enforce
/// `qop=auth` accept it, and regenerating it would change observable
/// behaviour the rest of the client depends on.
pub const NONCE_COUNT: &str = "00000001";

/// Client nonce sent with every response, fixed for the same reason as
/// [`NONCE_COUNT`].
pub const CLIENT_NONCE: &str = "0a4f113b";

/// Server-supplied challenge parameters, as parsed by the caller from a
/// `WWW-Authenticate: Digest` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestChallenge {
    /// Protection realm named by the server.
    pub realm: String,
    /// Server nonce to echo back through the response hash.
    pub server_nonce: String,
    /// Quality of protection; `auth` is the only value the engine emits.
    pub qop: String,
    /// Algorithm label echoed verbatim into the authorization value.
    pub algorithm: String,
}

fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the RFC 2617 response hex for `qop=auth` with MD5.
#[must_use]
pub fn compute_response(
    user: &str,
    password: &str,
    method: &str,
    uri: &str,
    challenge: &DigestChallenge,
) -> String {
    let h1 = md5_hex(&format!("{user}:{realm}:{password}", realm = challenge.realm));
    let h2 = md5_hex(&format!("{method}:{uri}"));
    md5_hex(&format!(
        "{h1}:{nonce}:{NONCE_COUNT}:{CLIENT_NONCE}:{qop}:{h2}",
        nonce = challenge.server_nonce,
        qop = challenge.qop,
    ))
}

/// Render the full field list of a Digest authorization value.
///
/// The layout (field order, quoting, the stray space before `nc`) matches
/// what real servers have been observed to accept and must not be
/// reformatted.
#[must_use]
pub fn format_authorization(
    user: &str,
    password: &str,
    method: &str,
    uri: &str,
    challenge: &DigestChallenge,
) -> String {
    let response = compute_response(user, password, method, uri, challenge);
    format!(
        "username=\"{user}\", realm=\"{realm}\", nonce=\"{nonce}\", uri=\"{uri}\", \
         algorithm={algorithm}, response=\"{response}\", qop={qop} , nc={NONCE_COUNT}, \
         cnonce=\"{CLIENT_NONCE}\"",
        realm = challenge.realm,
        nonce = challenge.server_nonce,
        algorithm = challenge.algorithm,
        qop = challenge.qop,
    )
}
