// src/crypto.rs
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Hashing error: {0}")]
    Hash(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// One-way encode a plaintext password into an argon2 PHC string.
///
/// Salted and intentionally slow; call once per record, never in a tight
/// loop. The output can only be checked with [`verify_password`].
pub fn encode_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a plaintext against a stored PHC string.
///
/// A malformed stored hash reads as a mismatch rather than an error.
pub fn verify_password(plaintext: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Derive the lossy index key for a password: an MD5 digest over the first
/// third of its characters.
///
/// Deliberately NOT the authentication hash. Collisions are expected; the
/// key only narrows the candidate set before the expensive verify step.
/// Inputs shorter than three characters digest zero or one characters,
/// which is accepted behavior.
pub fn search_hash(text: &str) -> [u8; 16] {
    let cut = text.chars().count() / 3;
    let prefix: String = text.chars().take(cut).collect();
    md5::compute(prefix.as_bytes()).0
}
