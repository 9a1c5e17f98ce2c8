use serde::{Deserialize, Serialize};

use crate::model::{Message, SessionUser};

/// Response body for `GET /api/auth/session`.
///
/// `user` is `None` both when the field is `null` and when it is omitted
/// entirely; either way the caller is signed out.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Response body for `GET /api/acceptmessage`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AcceptanceResponse {
    #[serde(rename = "isAcceptingMessages")]
    pub is_accepting_messages: bool,
}

/// Response body for `POST /api/acceptmessage`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAcceptanceResponse {
    /// Human-readable confirmation, surfaced verbatim as the toast title.
    pub message: String,
}

/// Response body for `GET /api/get-messages`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    /// Omitting the field is not an error; it reads as an empty list.
    #[serde(default)]
    pub messages: Vec<Message>,
}
