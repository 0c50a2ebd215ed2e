//! Opaque session tokens

use rand::Rng;

/// 256 random bits, hex encoded.
pub fn generate_session_token() -> String {
    let token: [u8; 32] = rand::rng().random();
    hex::encode(token)
}
