use jsonwebtoken::Algorithm;

/// Process-wide signing configuration for access tokens.
///
/// Loaded once at startup and injected into the issuance and validation
/// paths; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing and verifying tokens.
    pub jwt_secret: Vec<u8>,
    pub issuer: String,
    pub audience: String,
    /// Signing algorithm, pinned to HS256.
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(
        jwt_secret: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Whether all three signing parameters are present.
    ///
    /// An incomplete config disables both issuance and validation; it never
    /// results in a token signed with an empty key.
    pub fn is_complete(&self) -> bool {
        !self.jwt_secret.is_empty() && !self.issuer.is_empty() && !self.audience.is_empty()
    }
}

impl Default for SecurityConfig {
    /// Empty configuration: the authentication subsystem is disabled and
    /// fails closed.
    fn default() -> Self {
        Self::new(Vec::new(), "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::SecurityConfig;

    #[test]
    fn complete_when_all_fields_present() {
        let config = SecurityConfig::new(b"secret".to_vec(), "iss", "aud");
        assert!(config.is_complete());
    }

    #[test]
    fn incomplete_when_any_field_empty() {
        assert!(!SecurityConfig::new(Vec::new(), "iss", "aud").is_complete());
        assert!(!SecurityConfig::new(b"secret".to_vec(), "", "aud").is_complete());
        assert!(!SecurityConfig::new(b"secret".to_vec(), "iss", "").is_complete());
    }

    #[test]
    fn default_is_disabled() {
        assert!(!SecurityConfig::default().is_complete());
    }
}
