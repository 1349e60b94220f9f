//! Authentication configuration loaded from the environment.
//!
//! Required variables: `AUTH_SECRET_KEY`, `AUTH_ISSUER`, `AUTH_AUDIENCE`.
//! Missing values do not abort startup; they leave the signing config
//! incomplete, which disables issuance and validation (fail closed at
//! request time).

use std::env;

use tracing::warn;

use crate::auth::identity::UserIdentity;
use crate::auth::verifier::{StaticCredentialVerifier, StaticUser};
use crate::state::security_config::SecurityConfig;

/// Build the signing configuration from the environment.
pub fn security_from_env() -> SecurityConfig {
    let secret = env::var("AUTH_SECRET_KEY").unwrap_or_default();
    let issuer = env::var("AUTH_ISSUER").unwrap_or_default();
    let audience = env::var("AUTH_AUDIENCE").unwrap_or_default();

    let config = SecurityConfig::new(secret.into_bytes(), issuer, audience);
    if !config.is_complete() {
        warn!(
            "AUTH_SECRET_KEY, AUTH_ISSUER or AUTH_AUDIENCE missing; \
             token issuance and validation are disabled"
        );
    }
    config
}

/// Build the bootstrap credential table from `AUTH_USERS`.
///
/// Format: `;`-separated entries of `id:userName:password:firstName:lastName`.
/// Malformed entries are skipped with a warning. With no usable entries the
/// verifier is empty and every login fails, which is the fail-closed default
/// until the integrator wires a real identity source.
pub fn bootstrap_verifier_from_env() -> StaticCredentialVerifier {
    let raw = env::var("AUTH_USERS").unwrap_or_default();
    let users = parse_bootstrap_users(&raw);
    if users.is_empty() {
        warn!("AUTH_USERS is empty or unset; all credential checks will fail");
    }
    StaticCredentialVerifier::new(users)
}

fn parse_bootstrap_users(raw: &str) -> Vec<StaticUser> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let fields: Vec<&str> = entry.split(':').collect();
            let [id, user_name, password, first_name, last_name] = fields[..] else {
                warn!(%entry, "skipping malformed AUTH_USERS entry");
                return None;
            };
            let Ok(id) = id.parse::<i64>() else {
                warn!(%entry, "skipping AUTH_USERS entry with non-numeric id");
                return None;
            };
            Some(StaticUser {
                password: password.to_string(),
                identity: UserIdentity {
                    id,
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    user_name: user_name.to_string(),
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_bootstrap_users;

    #[test]
    fn parses_well_formed_entries() {
        let users = parse_bootstrap_users("1:sammy:NAVA:Sammy:Nava;2:dizzy:FLORES:Dizzy:Flores");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].identity.id, 1);
        assert_eq!(users[0].identity.user_name, "sammy");
        assert_eq!(users[0].password, "NAVA");
        assert_eq!(users[1].identity.first_name, "Dizzy");
        assert_eq!(users[1].identity.last_name, "Flores");
    }

    #[test]
    fn skips_malformed_entries() {
        let users = parse_bootstrap_users("1:sammy:NAVA:Sammy:Nava;not-an-entry;x:u:p:F:L");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].identity.user_name, "sammy");
    }

    #[test]
    fn empty_input_yields_no_users() {
        assert!(parse_bootstrap_users("").is_empty());
        assert!(parse_bootstrap_users("  ;  ").is_empty());
    }
}
