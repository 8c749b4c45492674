//! rax-identity - Entry Point
//!
//! Checks a login/password pair against the configured credential rules and
//! prints the resulting digest, or every rule the pair violates.
//!
//! Usage: `rax-identity <login> <password>` or
//! `rax-identity --stored <login> <digest>`.

use log::info;
use rax_identity::auth::PasswordDigest;
use rax_identity::config::AppConfig;
use rax_identity::error::IdentityError;
use rax_identity::error::handlers::{exit_code, report};
use rax_identity::utils::logging::setup_logging;
use std::process::ExitCode;

fn run(args: &[String]) -> Result<String, IdentityError> {
    let config = AppConfig::load()?;
    let validator = config.validator()?;
    info!("Validating with scheme {:?}", validator.scheme());

    let credentials = match args {
        [flag, login, digest] if flag == "--stored" => {
            validator.check_hashed(login, PasswordDigest::from_stored_digest(digest.as_str()))?
        }
        [login, password] => validator.check(login, password)?,
        _ => {
            return Err(IdentityError::Usage(
                "expected <login> <password> or --stored <login> <digest>".into(),
            ));
        }
    };

    Ok(format!("{} {}", credentials.login(), credentials.digest()))
}

fn main() -> ExitCode {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let IdentityError::Credential(violations) = &err {
                for violation in violations.errors() {
                    println!("{}: {}", violation.message_key(), violation);
                }
            } else {
                report(&err);
                eprintln!("{err}");
            }
            ExitCode::from(exit_code(&err))
        }
    }
}
