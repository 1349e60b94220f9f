//! Claim set embedded in backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// Field names are the registered JWT claim names as they appear on the
/// wire; tokens issued by earlier deployments of this API use exactly this
/// shape, so the names must not change.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Subject: the user id, rendered as a string.
    pub sub: String,
    /// The login user name.
    pub unique_name: String,
    pub given_name: String,
    pub family_name: String,
    pub iss: String,
    pub aud: String,
    /// Not-before (seconds since epoch), equal to issued-at.
    pub nbf: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
