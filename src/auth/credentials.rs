//! Validated credentials
//!
//! A login paired with its password digest. Only the validator builds
//! these, so holding one means the login passed the configured rules.

use super::digest::PasswordDigest;

/// A validated login and password digest, ready for storage or comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credentials {
    login: String,
    digest: PasswordDigest,
}

impl Credentials {
    pub(crate) fn new(login: &str, digest: PasswordDigest) -> Self {
        Self {
            login: login.to_string(),
            digest,
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn digest(&self) -> &PasswordDigest {
        &self.digest
    }

    /// Splits into login and digest.
    pub fn into_parts(self) -> (String, PasswordDigest) {
        (self.login, self.digest)
    }
}
