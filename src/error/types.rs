//! Error types
//!
//! Defines domain-specific error types for each module of the identity crate.

use std::fmt;

use crate::auth::AuthenticationError;

/// Credential validation errors
///
/// Carries every violation found by a single check, in the order the
/// validator recorded them. The list is copied on construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialError {
    errors: Vec<AuthenticationError>,
}

impl CredentialError {
    pub fn new(errors: &[AuthenticationError]) -> Self {
        Self {
            errors: errors.to_vec(),
        }
    }

    /// Returns the recorded violations in check order.
    pub fn errors(&self) -> &[AuthenticationError] {
        &self.errors
    }

    pub fn contains(&self, error: AuthenticationError) -> bool {
        self.errors.contains(&error)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid credentials: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for CredentialError {}

/// Rule configuration errors
#[derive(Debug)]
pub enum RulesError {
    LoginBounds { min: usize, max: usize },
    PasswordBounds { min: usize, max: usize },
    InvalidPattern(String, regex::Error),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::LoginBounds { min, max } => write!(
                f,
                "Login minimum length {} is greater than maximum length {}",
                min, max
            ),
            RulesError::PasswordBounds { min, max } => write!(
                f,
                "Password minimum length {} is greater than maximum length {}",
                min, max
            ),
            RulesError::InvalidPattern(p, e) => write!(f, "Invalid pattern {}: {}", p, e),
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::InvalidPattern(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Password digest errors
#[derive(Debug)]
pub enum DigestError {
    InvalidParams(String),
    /// The password exceeds the hasher's input limit.
    PasswordTooLong,
    HashFailed(String),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::InvalidParams(msg) => write!(f, "Invalid hash parameters: {}", msg),
            DigestError::PasswordTooLong => write!(f, "Password is too long to hash"),
            DigestError::HashFailed(msg) => write!(f, "Password hashing failed: {}", msg),
        }
    }
}

impl std::error::Error for DigestError {}

/// Token construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    NegativeTimestamp(i64),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::NegativeTimestamp(t) => {
                write!(f, "Authentication time cannot be negative: {}", t)
            }
        }
    }
}

impl std::error::Error for TokenError {}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum IdentityError {
    Credential(CredentialError),
    Rules(RulesError),
    Digest(DigestError),
    Token(TokenError),
    Config(config::ConfigError),
    Usage(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Credential(e) => write!(f, "Credential error: {}", e),
            IdentityError::Rules(e) => write!(f, "Rules error: {}", e),
            IdentityError::Digest(e) => write!(f, "Digest error: {}", e),
            IdentityError::Token(e) => write!(f, "Token error: {}", e),
            IdentityError::Config(e) => write!(f, "Configuration error: {}", e),
            IdentityError::Usage(e) => write!(f, "Usage error: {}", e),
        }
    }
}

impl std::error::Error for IdentityError {}

// Implement conversions from specific errors to IdentityError
impl From<CredentialError> for IdentityError {
    fn from(error: CredentialError) -> Self {
        IdentityError::Credential(error)
    }
}

impl From<RulesError> for IdentityError {
    fn from(error: RulesError) -> Self {
        IdentityError::Rules(error)
    }
}

impl From<DigestError> for IdentityError {
    fn from(error: DigestError) -> Self {
        IdentityError::Digest(error)
    }
}

impl From<TokenError> for IdentityError {
    fn from(error: TokenError) -> Self {
        IdentityError::Token(error)
    }
}

impl From<config::ConfigError> for IdentityError {
    fn from(error: config::ConfigError) -> Self {
        IdentityError::Config(error)
    }
}
