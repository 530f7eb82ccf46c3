//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use schoolhub_core::config::AuthConfig;
use schoolhub_core::config::auth::{MIN_PASSWORD_ITERATIONS, MIN_PASSWORD_MEMORY_KIB};
use schoolhub_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
///
/// The cost parameters never drop below the configured floor, whatever the
/// configuration says.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

impl PasswordHasher {
    /// Creates a hasher from auth configuration, clamping cost to the floor.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let memory_kib = config.password_memory_kib.max(MIN_PASSWORD_MEMORY_KIB);
        let iterations = config.password_iterations.max(MIN_PASSWORD_ITERATIONS);
        let parallelism = config.password_parallelism.max(1);

        if memory_kib != config.password_memory_kib || iterations != config.password_iterations {
            warn!(
                memory_kib,
                iterations, "Configured password cost below minimum; using the floor"
            );
        }

        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored PHC hash.
    ///
    /// Salt and parameters are read from the hash itself. A malformed hash is
    /// a mismatch, not an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
