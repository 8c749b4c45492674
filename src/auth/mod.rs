//! Authentication system
//!
//! Handles credential rules, credential validation, password digests and
//! authentication tokens.

pub mod credentials;
pub mod digest;
pub mod results;
pub mod rules;
pub mod token;
pub mod validator;

pub use credentials::Credentials;
pub use digest::{Argon2Params, DigestScheme, PasswordDigest};
pub use results::AuthenticationError;
pub use rules::CredentialRules;
pub use token::{Token, TokenStatus};
pub use validator::CredentialValidator;

/// Alias naming a token by what it records.
pub type AuthenticationOutcome = Token;
