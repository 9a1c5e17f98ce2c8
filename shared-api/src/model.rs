use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single anonymous message addressed to the signed-in user.
///
/// Owned by the server; the client holds an ephemeral ordered list that is
/// replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Identity attributes of the signed-in user, as reported by the session
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}
