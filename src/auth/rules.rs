//! Credential rules
//!
//! Immutable length bounds and character patterns that logins and passwords
//! must satisfy. Rules are checked once at construction; an instance that
//! exists is always consistent.

use crate::config::RulesConfig;
use crate::error::RulesError;
use regex::Regex;
use std::sync::LazyLock;

/// Default login maximum length.
pub const DEFAULT_LOGIN_MAX_LENGTH: usize = 20;
/// Default password maximum length.
pub const DEFAULT_PASSWORD_MAX_LENGTH: usize = 20;
/// Default login minimum length.
pub const DEFAULT_LOGIN_MIN_LENGTH: usize = 3;
/// Default password minimum length.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 5;
/// Default accepted characters, for both login and password.
pub const DEFAULT_PATTERN: &str = "[a-zA-Z0-9]*";

static DEFAULT_RULES: LazyLock<CredentialRules> = LazyLock::new(|| {
    CredentialRules::new(
        DEFAULT_LOGIN_MAX_LENGTH,
        DEFAULT_PASSWORD_MAX_LENGTH,
        DEFAULT_LOGIN_MIN_LENGTH,
        DEFAULT_PASSWORD_MIN_LENGTH,
        DEFAULT_PATTERN,
        DEFAULT_PATTERN,
    )
    .expect("default credential rules are valid")
});

/// A character pattern that must match the whole input.
#[derive(Debug, Clone)]
struct FullMatch {
    source: String,
    regex: Regex,
}

impl FullMatch {
    fn compile(source: &str) -> Result<Self, RulesError> {
        let regex = Regex::new(&format!("^(?:{source})$"))
            .map_err(|e| RulesError::InvalidPattern(source.to_string(), e))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Validation rules for logins and passwords.
#[derive(Debug, Clone)]
pub struct CredentialRules {
    login_max_length: usize,
    password_max_length: usize,
    login_min_length: usize,
    password_min_length: usize,
    login_pattern: FullMatch,
    password_pattern: FullMatch,
}

impl CredentialRules {
    /// Builds a rule set. Maxima come first, then minima, then patterns.
    ///
    /// Fails if a minimum exceeds its maximum or a pattern does not compile.
    pub fn new(
        login_max_length: usize,
        password_max_length: usize,
        login_min_length: usize,
        password_min_length: usize,
        login_pattern: &str,
        password_pattern: &str,
    ) -> Result<Self, RulesError> {
        if login_min_length > login_max_length {
            return Err(RulesError::LoginBounds {
                min: login_min_length,
                max: login_max_length,
            });
        }
        if password_min_length > password_max_length {
            return Err(RulesError::PasswordBounds {
                min: password_min_length,
                max: password_max_length,
            });
        }

        Ok(Self {
            login_max_length,
            password_max_length,
            login_min_length,
            password_min_length,
            login_pattern: FullMatch::compile(login_pattern)?,
            password_pattern: FullMatch::compile(password_pattern)?,
        })
    }

    /// Builds a rule set from its configuration section.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RulesError> {
        Self::new(
            config.login_max_length,
            config.password_max_length,
            config.login_min_length,
            config.password_min_length,
            &config.login_pattern,
            &config.password_pattern,
        )
    }

    /// Shared default rules: login 3 to 20, password 5 to 20, alphanumeric only.
    pub fn default_rules() -> &'static CredentialRules {
        &DEFAULT_RULES
    }

    pub fn login_max_length(&self) -> usize {
        self.login_max_length
    }

    pub fn password_max_length(&self) -> usize {
        self.password_max_length
    }

    pub fn login_min_length(&self) -> usize {
        self.login_min_length
    }

    pub fn password_min_length(&self) -> usize {
        self.password_min_length
    }

    /// Source text of the login pattern.
    pub fn login_pattern(&self) -> &str {
        &self.login_pattern.source
    }

    /// Source text of the password pattern.
    pub fn password_pattern(&self) -> &str {
        &self.password_pattern.source
    }

    pub fn login_matches(&self, login: &str) -> bool {
        self.login_pattern.is_match(login)
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password_pattern.is_match(password)
    }
}

impl Default for CredentialRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = CredentialRules::default_rules();
        assert_eq!(rules.login_max_length(), 20);
        assert_eq!(rules.password_max_length(), 20);
        assert_eq!(rules.password_min_length(), 5);
        assert_eq!(rules.login_min_length(), 3);
        assert_eq!(rules.login_pattern(), "[a-zA-Z0-9]*");
        assert_eq!(rules.password_pattern(), "[a-zA-Z0-9]*");
    }

    #[test]
    fn custom_rules() {
        let rules = CredentialRules::new(10, 15, 3, 5, "[0-9]*", "[a-z]*").unwrap();
        assert_eq!(rules.login_max_length(), 10);
        assert_eq!(rules.password_max_length(), 15);
        assert_eq!(rules.password_min_length(), 5);
        assert_eq!(rules.login_min_length(), 3);
        assert_eq!(rules.login_pattern(), "[0-9]*");
        assert_eq!(rules.password_pattern(), "[a-z]*");
    }

    #[test]
    fn identical_arguments_give_identical_rules() {
        let a = CredentialRules::new(20, 20, 3, 5, DEFAULT_PATTERN, DEFAULT_PATTERN).unwrap();
        let b = CredentialRules::new(20, 20, 3, 5, DEFAULT_PATTERN, DEFAULT_PATTERN).unwrap();
        assert_eq!(a.login_max_length(), b.login_max_length());
        assert_eq!(a.password_max_length(), b.password_max_length());
        assert_eq!(a.login_min_length(), b.login_min_length());
        assert_eq!(a.password_min_length(), b.password_min_length());
        assert_eq!(a.login_pattern(), b.login_pattern());
        assert_eq!(a.password_pattern(), b.password_pattern());
    }

    #[test]
    fn login_max_smaller_than_min_fails() {
        let err = CredentialRules::new(2, 15, 3, 5, "[0-9]*", "[a-z]*").unwrap_err();
        assert!(matches!(err, RulesError::LoginBounds { min: 3, max: 2 }));
    }

    #[test]
    fn password_max_smaller_than_min_fails() {
        let err = CredentialRules::new(10, 2, 3, 5, "[0-9]*", "[a-z]*").unwrap_err();
        assert!(matches!(err, RulesError::PasswordBounds { min: 5, max: 2 }));
    }

    #[test]
    fn equal_bounds_are_allowed() {
        assert!(CredentialRules::new(4, 4, 4, 4, "a*", "b*").is_ok());
    }

    #[test]
    fn invalid_pattern_fails() {
        let err = CredentialRules::new(10, 15, 3, 5, "[0-9", "[a-z]*").unwrap_err();
        assert!(matches!(err, RulesError::InvalidPattern(ref p, _) if p == "[0-9"));
    }

    #[test]
    fn patterns_match_whole_input() {
        let rules = CredentialRules::new(10, 15, 3, 5, "[0-9]*", "abc|def").unwrap();
        assert!(rules.login_matches("123"));
        assert!(!rules.login_matches("12a3"));
        assert!(rules.password_matches("def"));
        assert!(!rules.password_matches("abcdef"));
    }

    #[test]
    fn default_impl_matches_shared_rules() {
        let rules = CredentialRules::default();
        assert_eq!(rules.login_min_length(), DEFAULT_LOGIN_MIN_LENGTH);
        assert_eq!(rules.password_max_length(), DEFAULT_PASSWORD_MAX_LENGTH);
    }
}
