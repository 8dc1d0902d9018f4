//! Claims embedded in backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims set carried by an access token.
///
/// Every field is optional on the wire: decoding returns whatever the token
/// actually contains, and the session guard decides what a missing field
/// means. Issued tokens always populate all three.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: the user's unique name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Database id of the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Expiry (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
