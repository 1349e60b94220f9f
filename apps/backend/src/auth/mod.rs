pub mod claims;
pub mod identity;
pub mod jwt;
pub mod verifier;

pub use claims::AccessClaims;
pub use identity::UserIdentity;
pub use jwt::{mint_access_token, verify_access_token, TokenError};
pub use verifier::{CredentialVerifier, StaticCredentialVerifier, StaticUser};
