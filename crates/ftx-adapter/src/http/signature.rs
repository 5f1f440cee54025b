/*
[INPUT]:  API secret and canonical request payload
[OUTPUT]: Hex-encoded HMAC-SHA256 signature (FTX-SIGN header value)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs canonical request payloads for authenticated endpoints.
///
/// The exchange verifies the signature by reconstructing the exact same
/// payload server-side, so signing is pure: same secret + same payload
/// always yields the same hex digest.
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a canonical payload, returning the lowercase hex digest.
    pub fn sign(&self, payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }
}

// The secret must never reach logs, so Debug shows only the type name.
impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}
