//! Authentication result types
//!
//! Defines the violation kinds reported by credential validation.

use std::fmt;

/// A single rule violation found while checking credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationError {
    /// The login contains invalid characters.
    InvalidLoginChar,
    /// The password contains invalid characters.
    InvalidPassChar,
    LoginTooLong,
    LoginTooShort,
    PassTooLong,
    PassTooShort,
}

impl AuthenticationError {
    /// Translation key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthenticationError::InvalidLoginChar => "connect.login.invalid",
            AuthenticationError::InvalidPassChar => "connect.pwd.invalid",
            AuthenticationError::LoginTooLong => "connect.login_long",
            AuthenticationError::LoginTooShort => "connect.login_short",
            AuthenticationError::PassTooLong => "connect.pwd_long",
            AuthenticationError::PassTooShort => "connect.pwd_short",
        }
    }

    /// Returns `true` for violations concerning the login.
    pub fn is_login_error(&self) -> bool {
        matches!(
            self,
            AuthenticationError::InvalidLoginChar
                | AuthenticationError::LoginTooLong
                | AuthenticationError::LoginTooShort
        )
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthenticationError::InvalidLoginChar => write!(f, "Login contains invalid characters"),
            AuthenticationError::InvalidPassChar => {
                write!(f, "Password contains invalid characters")
            }
            AuthenticationError::LoginTooLong => write!(f, "Login is too long"),
            AuthenticationError::LoginTooShort => write!(f, "Login is too short"),
            AuthenticationError::PassTooLong => write!(f, "Password is too long"),
            AuthenticationError::PassTooShort => write!(f, "Password is too short"),
        }
    }
}
