//! JSON envelopes for the backend endpoints. Domain types they carry
//! (`Attachment`, `Role`, `ConversationSummary`) live in `state`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::state::chat::{Attachment, Role};
use crate::state::conversations::ConversationSummary;

/// `GET /api/models`
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// `GET /api/conversations`
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<ConversationSummary>,
}

/// One entry of `GET /api/conversations/{id}`. Stored history carries no
/// attachment metadata; uploads are referenced inline in the content.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

/// `GET /api/conversations/{id}`
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<StoredMessage>,
}

/// `POST /api/conversations/{id}/delete`
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
}

/// `POST /api/new_chat`
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NewChatResponse {
    pub id: i64,
}

/// `POST /api/upload`
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub files: Vec<Attachment>,
}

/// `POST /api/chat` request body. `model` is omitted entirely while the
/// user has not picked one, leaving the default to the server.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// `POST /api/chat` response body.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ChatResponse {
    pub message: String,
}
