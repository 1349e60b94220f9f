use async_trait::async_trait;

use crate::auth::identity::UserIdentity;

/// Credential check against an external identity source.
///
/// `None` covers every failure mode: unknown user, wrong password, or an
/// absent field. Callers must not be able to tell these apart.
/// Implementations must be side-effect free and safe to call concurrently.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, user_name: Option<&str>, password: Option<&str>)
        -> Option<UserIdentity>;
}

/// One entry of a static credential table.
#[derive(Debug, Clone)]
pub struct StaticUser {
    pub password: String,
    pub identity: UserIdentity,
}

/// Table-backed verifier for bootstrap wiring and tests.
///
/// Production deployments supply their own `CredentialVerifier` against a
/// real user directory; this one compares against an in-memory table with
/// an exact, case-sensitive match.
pub struct StaticCredentialVerifier {
    users: Vec<StaticUser>,
}

impl StaticCredentialVerifier {
    pub fn new(users: Vec<StaticUser>) -> Self {
        Self { users }
    }

    /// Verifier with no entries: every credential check fails.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(
        &self,
        user_name: Option<&str>,
        password: Option<&str>,
    ) -> Option<UserIdentity> {
        let user_name = user_name?;
        let password = password?;

        self.users
            .iter()
            .find(|entry| entry.identity.user_name == user_name && entry.password == password)
            .map(|entry| entry.identity.clone())
    }
}
