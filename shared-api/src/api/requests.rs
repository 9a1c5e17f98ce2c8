use serde::{Deserialize, Serialize};

/// Request body for `POST /api/acceptmessage`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAcceptanceRequest {
    #[serde(rename = "acceptMessages")]
    pub accept_messages: bool,
}
