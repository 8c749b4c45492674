//! Credential validator
//!
//! Checks untrusted login/password input against a `CredentialRules` set.
//! Every rule is evaluated and every violation is reported, so a caller can
//! give complete feedback in one round trip.

use super::credentials::Credentials;
use super::digest::{Argon2Params, DigestScheme, PasswordDigest};
use super::results::AuthenticationError;
use super::rules::CredentialRules;
use crate::error::{CredentialError, DigestError, IdentityError};
use log::{debug, warn};

/// Validates logins and passwords, producing `Credentials` on success.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    rules: CredentialRules,
    scheme: DigestScheme,
    params: Argon2Params,
}

impl CredentialValidator {
    /// Creates a validator hashing cleartext passwords with the legacy scheme.
    pub fn new(rules: CredentialRules) -> Self {
        Self {
            rules,
            scheme: DigestScheme::LegacyMd5,
            params: Argon2Params::default(),
        }
    }

    /// Selects the scheme used to hash cleartext passwords.
    ///
    /// Argon2id parameters are checked here, not on every call.
    pub fn with_scheme(
        mut self,
        scheme: DigestScheme,
        params: Argon2Params,
    ) -> Result<Self, DigestError> {
        if scheme == DigestScheme::Argon2id {
            params.validate()?;
        }
        self.scheme = scheme;
        self.params = params;
        Ok(self)
    }

    pub fn rules(&self) -> &CredentialRules {
        &self.rules
    }

    pub fn scheme(&self) -> DigestScheme {
        self.scheme
    }

    /// Checks a login and a cleartext password.
    ///
    /// On success the password is hashed and dropped; only the digest is
    /// kept in the returned credentials. Rule violations come back as
    /// `IdentityError::Credential`, hasher failures as `IdentityError::Digest`.
    pub fn check(&self, login: &str, password: &str) -> Result<Credentials, IdentityError> {
        let mut errors = Vec::new();
        self.check_login(login, &mut errors);
        self.check_password(password, &mut errors);
        if !errors.is_empty() {
            return Err(self.fail(login, &errors).into());
        }

        PasswordDigest::compute(password, self.scheme, &self.params)
            .map(|digest| Credentials::new(login, digest))
            .map_err(|e| self.hash_failure(login, e))
    }

    /// Checks a login paired with an already hashed password.
    ///
    /// The digest is not checked: its length and characters say nothing
    /// about the cleartext it came from.
    pub fn check_hashed(
        &self,
        login: &str,
        digest: PasswordDigest,
    ) -> Result<Credentials, CredentialError> {
        let mut errors = Vec::new();
        self.check_login(login, &mut errors);
        if errors.is_empty() {
            Ok(Credentials::new(login, digest))
        } else {
            Err(self.fail(login, &errors))
        }
    }

    fn check_login(&self, login: &str, errors: &mut Vec<AuthenticationError>) {
        let length = login.chars().count();
        if length < self.rules.login_min_length() {
            errors.push(AuthenticationError::LoginTooShort);
        } else if length > self.rules.login_max_length() {
            errors.push(AuthenticationError::LoginTooLong);
        }
        if !self.rules.login_matches(login) {
            errors.push(AuthenticationError::InvalidLoginChar);
        }
    }

    fn check_password(&self, password: &str, errors: &mut Vec<AuthenticationError>) {
        let length = password.chars().count();
        if length < self.rules.password_min_length() {
            errors.push(AuthenticationError::PassTooShort);
        } else if length > self.rules.password_max_length() {
            errors.push(AuthenticationError::PassTooLong);
        }
        if !self.rules.password_matches(password) {
            errors.push(AuthenticationError::InvalidPassChar);
        }
    }

    // A password over the hasher's input limit is still a length violation.
    fn hash_failure(&self, login: &str, error: DigestError) -> IdentityError {
        match error {
            DigestError::PasswordTooLong => {
                self.fail(login, &[AuthenticationError::PassTooLong]).into()
            }
            error => {
                warn!("Password hashing failed for login {login}: {error}");
                error.into()
            }
        }
    }

    fn fail(&self, login: &str, errors: &[AuthenticationError]) -> CredentialError {
        debug!(
            "Credential check failed for login {:?}: {} violation(s)",
            login,
            errors.len()
        );
        CredentialError::new(errors)
    }
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new(CredentialRules::default())
    }
}
