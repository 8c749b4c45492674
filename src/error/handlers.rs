//! Error handlers
//!
//! Provides error reporting and exit code mapping for the command line tool.

use crate::error::types::IdentityError;
use log::error;

/// Report an error through the log facade
pub fn report(err: &IdentityError) {
    error!("rax-identity error: {}", err);
}

/// Convert error to a process exit code
pub fn exit_code(err: &IdentityError) -> u8 {
    match err {
        IdentityError::Credential(_) => 1,
        IdentityError::Rules(_) => 2,
        IdentityError::Digest(_) => 2,
        IdentityError::Token(_) => 2,
        IdentityError::Config(_) => 2,
        IdentityError::Usage(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthenticationError;
    use crate::error::CredentialError;

    #[test]
    fn violations_exit_with_one() {
        let err = IdentityError::from(CredentialError::new(&[AuthenticationError::LoginTooShort]));
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn usage_exits_with_two() {
        let err = IdentityError::Usage("missing password".into());
        assert_eq!(exit_code(&err), 2);
    }
}
