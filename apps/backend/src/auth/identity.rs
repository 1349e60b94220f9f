use serde::{Deserialize, Serialize};

/// Identity record returned by a successful credential check.
///
/// Immutable once produced; it only lives for the duration of token
/// construction. All fields must be populated before claims are built
/// from it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}
