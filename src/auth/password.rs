use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;
use tracing::error;

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_matches_original_credential() {
        let hash = hash_password("grandmas-gnocchi").expect("hash");
        assert!(verify_password("grandmas-gnocchi", &hash).expect("verify"));
    }

    #[test]
    fn mismatched_credential_fails_verification() {
        let hash = hash_password("grandmas-gnocchi").expect("hash");
        assert!(!verify_password("grandmas-ragu", &hash).expect("verify"));
    }

    #[test]
    fn stored_hash_never_contains_the_plaintext() {
        let hash = hash_password("sourdough-starter").expect("hash");
        assert!(!hash.contains("sourdough-starter"));
    }

    #[test]
    fn two_hashes_of_one_credential_differ_by_salt() {
        let first = hash_password("pw").expect("hash");
        let second = hash_password("pw").expect("hash");
        assert_ne!(first, second);
        assert!(verify_password("pw", &second).expect("verify"));
    }

    #[test]
    fn malformed_stored_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("pw", "definitely-not-phc-format").is_err());
    }
}
