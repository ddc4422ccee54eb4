use std::fmt;

/// Opaque signed-request token issued by the platform.
///
/// The token is two base64url-encoded parts joined by a `.`: a signature
/// followed by a JSON payload. Verification belongs to the game's backend,
/// which holds the app secret: split on `.`, base64url-decode both parts,
/// recompute HMAC-SHA256 over the decoded payload with the app secret,
/// compare against the decoded signature, and optionally check the freshness
/// timestamp embedded in the payload.
///
/// This crate never decodes, inspects, or verifies the token; doing so
/// client-side would require shipping the app secret with the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest(pub String);

impl SignedRequest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
