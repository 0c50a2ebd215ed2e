//! Password hashing with SHA-256
//!
//! Stored credentials are lowercase hex SHA-256 digests of the UTF-8
//! password, so existing admin records keep working.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password too short: minimum {0} characters")]
    TooShort(usize),
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Constant-time comparison of `password`'s digest against `stored_hash`.
    pub fn verify(password: &str, stored_hash: &str) -> bool {
        let computed = Self::hash(password);
        computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
    }

    /// Length is counted in characters, not bytes.
    pub fn check_length(password: &str, min_length: usize) -> Result<(), PasswordError> {
        if password.chars().count() < min_length {
            return Err(PasswordError::TooShort(min_length));
        }
        Ok(())
    }
}
