//! Configuration management for rax-identity
//!
//! Loads credential rules and digest settings from `config.toml`, with
//! environment overrides such as `RAX_IDENTITY_RULES__LOGIN_MAX_LENGTH`.

use crate::auth::rules::{
    DEFAULT_LOGIN_MAX_LENGTH, DEFAULT_LOGIN_MIN_LENGTH, DEFAULT_PASSWORD_MAX_LENGTH,
    DEFAULT_PASSWORD_MIN_LENGTH, DEFAULT_PATTERN,
};
use crate::auth::{Argon2Params, CredentialRules, CredentialValidator, DigestScheme};
use crate::error::IdentityError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub digest: DigestConfig,
}

/// Credential rules section
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RulesConfig {
    pub login_min_length: usize,
    pub login_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
    pub login_pattern: String,
    pub password_pattern: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            login_min_length: DEFAULT_LOGIN_MIN_LENGTH,
            login_max_length: DEFAULT_LOGIN_MAX_LENGTH,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_max_length: DEFAULT_PASSWORD_MAX_LENGTH,
            login_pattern: DEFAULT_PATTERN.to_string(),
            password_pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Password digest section
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DigestConfig {
    #[serde(default)]
    pub scheme: DigestScheme,

    /// Argon2id costs, ignored by the legacy scheme
    #[serde(default)]
    pub argon2: Argon2Params,
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RAX_IDENTITY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file, without environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.rules.login_min_length > self.rules.login_max_length {
            return Err(config::ConfigError::Message(
                "login_min_length must not exceed login_max_length".into(),
            ));
        }

        if self.rules.password_min_length > self.rules.password_max_length {
            return Err(config::ConfigError::Message(
                "password_min_length must not exceed password_max_length".into(),
            ));
        }

        // Argon2 costs are ignored by the legacy scheme.
        if self.digest.scheme == DigestScheme::Argon2id {
            self.digest
                .argon2
                .validate()
                .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        }

        Ok(())
    }

    /// Build the validator described by this configuration
    pub fn validator(&self) -> Result<CredentialValidator, IdentityError> {
        let rules = CredentialRules::from_config(&self.rules)?;
        let validator =
            CredentialValidator::new(rules).with_scheme(self.digest.scheme, self.digest.argon2)?;
        Ok(validator)
    }
}
