pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod utils;

pub use auth::{
    AuthenticationError, AuthenticationOutcome, CredentialRules, CredentialValidator, Credentials,
    PasswordDigest, Token, TokenStatus,
};
pub use error::{CredentialError, IdentityError};
pub use identity::{IdentityHandle, IdentityRegistry};
