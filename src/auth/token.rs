//! Authentication tokens
//!
//! A `Token` is the outcome of one authentication attempt. Every outcome
//! other than a successful one carries the world identity, a zero timestamp
//! and a `-1` key, so a caller cannot tell from a failed token whether the
//! identity exists.

use crate::error::TokenError;
use crate::identity::IdentityHandle;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session key of every non-authenticated token.
pub const NO_SESSION_KEY: i32 = -1;

/// Authentication status of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStatus {
    /// The user is successfully authenticated.
    Authenticated,
    /// The user entered wrong credentials.
    NotAuthenticated,
    /// The user has been banned.
    Banned,
    /// The user is not found, or is reported as such to avoid leaking that it exists.
    NotFound,
}

/// Result of an authentication attempt.
///
/// Equality ignores the authentication time.
#[derive(Debug, Clone)]
pub struct Token {
    identity: IdentityHandle,
    authenticated_at: i64,
    session_key: i32,
    status: TokenStatus,
}

impl Token {
    /// Token for a successfully authenticated identity.
    ///
    /// `authenticated_at` is in milliseconds since the epoch and must not be negative.
    pub fn authenticated(
        identity: IdentityHandle,
        authenticated_at: i64,
        session_key: i32,
    ) -> Result<Self, TokenError> {
        if authenticated_at < 0 {
            return Err(TokenError::NegativeTimestamp(authenticated_at));
        }
        Ok(Self {
            identity,
            authenticated_at,
            session_key,
            status: TokenStatus::Authenticated,
        })
    }

    /// Authenticated token stamped with the current time and a random session key.
    pub fn issue(identity: IdentityHandle) -> Self {
        let authenticated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0);

        // Never hand out the sentinel as a live key.
        let mut session_key = rand::random::<i32>();
        while session_key == NO_SESSION_KEY {
            session_key = rand::random::<i32>();
        }

        Self {
            identity,
            authenticated_at,
            session_key,
            status: TokenStatus::Authenticated,
        }
    }

    pub fn authentication_failed() -> Self {
        Self::sentinel(TokenStatus::NotAuthenticated)
    }

    pub fn banned() -> Self {
        Self::sentinel(TokenStatus::Banned)
    }

    pub fn not_found() -> Self {
        Self::sentinel(TokenStatus::NotFound)
    }

    /// Token with an arbitrary status, for callers that already know it.
    pub fn any(identity: IdentityHandle, session_key: i32, status: TokenStatus) -> Self {
        Self {
            identity,
            authenticated_at: 0,
            session_key,
            status,
        }
    }

    fn sentinel(status: TokenStatus) -> Self {
        Self {
            identity: IdentityHandle::world(),
            authenticated_at: 0,
            session_key: NO_SESSION_KEY,
            status,
        }
    }

    pub fn identity(&self) -> &IdentityHandle {
        &self.identity
    }

    pub fn authenticated_at(&self) -> i64 {
        self.authenticated_at
    }

    pub fn session_key(&self) -> i32 {
        self.session_key
    }

    pub fn status(&self) -> TokenStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == TokenStatus::Authenticated
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
            && self.session_key == other.session_key
            && self.status == other.status
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
        self.session_key.hash(state);
        self.status.hash(state);
    }
}
