use std::sync::Arc;

use crate::auth::verifier::CredentialVerifier;
use crate::repos::todos::TodoData;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Everything here is read-only once the server starts, so clones can be
/// handed to worker threads without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Signing configuration for token issuance and validation.
    pub security: SecurityConfig,
    /// Credential check against the external identity source.
    pub verifier: Arc<dyn CredentialVerifier>,
    /// To-do data access.
    pub todos: Arc<dyn TodoData>,
}

impl AppState {
    pub fn new(
        security: SecurityConfig,
        verifier: Arc<dyn CredentialVerifier>,
        todos: Arc<dyn TodoData>,
    ) -> Self {
        Self {
            security,
            verifier,
            todos,
        }
    }
}
