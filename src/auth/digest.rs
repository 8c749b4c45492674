//! Password digests
//!
//! One-way transforms of cleartext passwords. A digest is either computed
//! from a cleartext password, which is only borrowed for the duration of the
//! call, or wraps a value previously read from storage. Equality is defined
//! on the digest string alone.
//!
//! The legacy scheme is an unsalted MD5 and is kept so that digests stored by
//! older deployments keep comparing equal. New deployments should configure
//! the Argon2id scheme.

use crate::error::DigestError;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use md5::{Digest, Md5};
use rand::Rng;
use serde::Deserialize;
use std::fmt;
use std::hash::{Hash, Hasher};

const ARGON2ID_PREFIX: &str = "$argon2id$";
const SALT_LENGTH: usize = 16;

/// Hash function used to produce a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestScheme {
    /// Unsalted MD5, lowercase hexadecimal.
    #[default]
    LegacyMd5,
    /// Salted Argon2id, PHC string format.
    Argon2id,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Argon2Params {
    /// Memory cost in KiB
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

impl Argon2Params {
    /// Checks that the costs are accepted by Argon2id.
    pub fn validate(&self) -> Result<(), DigestError> {
        self.hasher().map(|_| ())
    }

    fn hasher(&self) -> Result<Argon2<'static>, DigestError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, Some(32))
            .map_err(|e| DigestError::InvalidParams(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// A hashed password.
#[derive(Clone)]
pub struct PasswordDigest {
    digest: String,
}

impl PasswordDigest {
    /// Hashes a cleartext password with the legacy scheme.
    pub fn from_cleartext(raw: &str) -> Self {
        let hash = Md5::digest(raw.as_bytes());
        Self {
            digest: format!("{:x}", hash),
        }
    }

    /// Hashes a cleartext password with a fresh random salt.
    pub fn argon2id(raw: &str, params: &Argon2Params) -> Result<Self, DigestError> {
        let mut salt = [0u8; SALT_LENGTH];
        rand::rng().fill(&mut salt);
        let salt =
            SaltString::encode_b64(&salt).map_err(|e| DigestError::HashFailed(e.to_string()))?;

        let hash = params
            .hasher()?
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| match e {
                password_hash::Error::Password => DigestError::PasswordTooLong,
                e => DigestError::HashFailed(e.to_string()),
            })?;

        Ok(Self {
            digest: hash.to_string(),
        })
    }

    /// Hashes a cleartext password with the given scheme.
    pub fn compute(
        raw: &str,
        scheme: DigestScheme,
        params: &Argon2Params,
    ) -> Result<Self, DigestError> {
        match scheme {
            DigestScheme::LegacyMd5 => Ok(Self::from_cleartext(raw)),
            DigestScheme::Argon2id => Self::argon2id(raw, params),
        }
    }

    /// Wraps an already hashed value without transforming it.
    pub fn from_stored_digest(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
        }
    }

    /// Returns the digest string.
    pub fn as_str(&self) -> &str {
        &self.digest
    }

    /// Scheme that produced this digest, detected from its format.
    pub fn scheme(&self) -> DigestScheme {
        if self.digest.starts_with(ARGON2ID_PREFIX) {
            DigestScheme::Argon2id
        } else {
            DigestScheme::LegacyMd5
        }
    }

    /// Checks a cleartext password against this digest.
    ///
    /// Salted digests cannot be compared with `==` against a fresh hash, so
    /// this is the way to authenticate against an Argon2id digest.
    pub fn verify(&self, raw: &str) -> bool {
        match self.scheme() {
            DigestScheme::LegacyMd5 => Self::from_cleartext(raw) == *self,
            DigestScheme::Argon2id => match PasswordHash::new(&self.digest) {
                Ok(parsed) => Argon2::default()
                    .verify_password(raw.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
        }
    }
}

impl PartialEq for PasswordDigest {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl Eq for PasswordDigest {}

impl Hash for PasswordDigest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest.hash(state);
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordDigest").field(&self.digest).finish()
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD_OK: &str = "azerty";
    const MD5_ENCODED: &str = "ab4f63f9ac65152575886860dde480a1";

    fn cheap_params() -> Argon2Params {
        Argon2Params {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn empty_password_reference_digest() {
        let digest = PasswordDigest::from_cleartext("");
        assert_eq!(digest.to_string(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn known_password_digest() {
        assert_eq!(PasswordDigest::from_cleartext(PASSWORD_OK).as_str(), MD5_ENCODED);
    }

    #[test]
    fn computed_equals_stored() {
        let computed = PasswordDigest::from_cleartext(PASSWORD_OK);
        let stored = PasswordDigest::from_stored_digest(MD5_ENCODED);
        assert_eq!(computed, stored);
        assert_ne!(stored, PasswordDigest::from_stored_digest(format!("{MD5_ENCODED}a")));
    }

    #[test]
    fn equal_digests_hash_equally() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(PasswordDigest::from_cleartext(PASSWORD_OK));
        assert!(set.contains(&PasswordDigest::from_stored_digest(MD5_ENCODED)));
    }

    #[test]
    fn stored_digest_is_not_rehashed() {
        let stored = PasswordDigest::from_stored_digest("a");
        assert_eq!(stored.as_str(), "a");
        assert_eq!(stored.scheme(), DigestScheme::LegacyMd5);
    }

    #[test]
    fn legacy_verify() {
        let stored = PasswordDigest::from_stored_digest(MD5_ENCODED);
        assert!(stored.verify(PASSWORD_OK));
        assert!(!stored.verify("qwerty"));
    }

    #[test]
    fn argon2id_verifies_and_is_salted() {
        let params = cheap_params();
        let first = PasswordDigest::argon2id(PASSWORD_OK, &params).unwrap();
        let second = PasswordDigest::argon2id(PASSWORD_OK, &params).unwrap();

        assert_eq!(first.scheme(), DigestScheme::Argon2id);
        assert!(first.as_str().starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(first.verify(PASSWORD_OK));
        assert!(!first.verify("qwerty"));

        let reloaded = PasswordDigest::from_stored_digest(first.to_string());
        assert_eq!(reloaded, first);
        assert!(reloaded.verify(PASSWORD_OK));
    }

    #[test]
    fn hash_dispatches_on_scheme() {
        let params = cheap_params();
        let legacy =
            PasswordDigest::compute(PASSWORD_OK, DigestScheme::LegacyMd5, &params).unwrap();
        assert_eq!(legacy.as_str(), MD5_ENCODED);
        let salted =
            PasswordDigest::compute(PASSWORD_OK, DigestScheme::Argon2id, &params).unwrap();
        assert_eq!(salted.scheme(), DigestScheme::Argon2id);
    }

    #[test]
    fn invalid_params_are_reported() {
        let params = Argon2Params {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        let err = PasswordDigest::argon2id(PASSWORD_OK, &params).unwrap_err();
        assert!(matches!(err, DigestError::InvalidParams(_)));
    }

    #[test]
    fn params_validation() {
        assert!(cheap_params().validate().is_ok());
        assert!(Argon2Params::default().validate().is_ok());
        let zero_iterations = Argon2Params {
            iterations: 0,
            ..cheap_params()
        };
        assert!(zero_iterations.validate().is_err());
    }

    #[test]
    fn malformed_argon2_digest_never_verifies() {
        let stored = PasswordDigest::from_stored_digest("$argon2id$garbage");
        assert!(!stored.verify(PASSWORD_OK));
    }
}
