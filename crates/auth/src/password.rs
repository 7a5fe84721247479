//! Password hashing with Argon2id (the recommended variant for password
//! hashing), stored as PHC-format strings.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use thiserror::Error;

/// Password-related errors.
#[derive(Debug, Error, Clone)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    HashingFailed(String),
    #[error("password verification failed")]
    VerificationFailed,
    #[error("invalid hash format")]
    InvalidHashFormat,
}

/// Argon2id password hasher.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Memory cost in KiB
    m_cost: u32,
    /// Time cost / iterations
    t_cost: u32,
    /// Parallelism factor
    p_cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        // OWASP recommended minimum parameters for Argon2id
        Self {
            m_cost: 19456, // 19 MiB
            t_cost: 2,
            p_cost: 1,
        }
    }
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(self.m_cost, self.t_cost, self.p_cost, None)
                .expect("valid argon2 params"),
        )
    }

    /// Hash a password, returning the PHC-format hash string.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC-format hash.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<(), PasswordError> {
        let parsed =
            PasswordHash::new(stored_hash).map_err(|_| PasswordError::InvalidHashFormat)?;

        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| PasswordError::VerificationFailed)
    }
}
