#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use uuid::Uuid;

/// State for the chat view: rendered messages, the pending-attachment
/// buffer, the typing indicator, and the tag of the newest in-flight
/// chat request.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub pending: Vec<Attachment>,
    /// `Some(n)` while the typing indicator is shown; `n` is the dot count.
    pub typing_dots: Option<u8>,
    /// Tag of the newest outstanding `/api/chat` request. Responses carrying
    /// any other tag are stale and get discarded.
    pub inflight: Option<Uuid>,
}

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub attachments: Vec<Attachment>,
}

/// Message author role as used on the wire.
///
/// The backend's stored history starts with a system prompt; anything that
/// is not `user` or `assistant` deserializes to `System` and is filtered
/// out before rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    #[serde(other)]
    System,
}

/// An uploaded file descriptor, as returned by `/api/upload`.
///
/// `data_url` is the browser-local preview encoding; `url` is the
/// server-persisted location. Missing fields default so a malformed
/// descriptor degrades to a fallback link instead of failing the response.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data_url: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// How an attachment renders inside a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Video,
    File,
}

impl Attachment {
    /// Classify by the MIME-style prefix of the preview data URL.
    pub fn kind(&self) -> AttachmentKind {
        if self.data_url.starts_with("data:image/") {
            AttachmentKind::Image
        } else if self.data_url.starts_with("data:video/") {
            AttachmentKind::Video
        } else {
            AttachmentKind::File
        }
    }

    /// Source for inline previews: the data URL when present, else the
    /// persisted location.
    pub fn preview_src(&self) -> String {
        if self.data_url.is_empty() {
            self.url.clone().unwrap_or_else(|| "#".to_owned())
        } else {
            self.data_url.clone()
        }
    }

    /// Target for the download link.
    pub fn link_href(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ if !self.data_url.is_empty() => self.data_url.clone(),
            _ => "#".to_owned(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "archivo" } else { &self.name }
    }
}

/// Payload produced by [`ChatState::compose`], ready for `/api/chat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub message: String,
    pub attachments: Vec<Attachment>,
}

impl ChatState {
    pub fn push(&mut self, role: Role, content: String, attachments: Vec<Attachment>) {
        self.messages.push(ChatMessage { role, content, attachments });
    }

    /// Append freshly uploaded descriptors to the pending buffer. They ride
    /// along with the next message send.
    pub fn queue_attachments(&mut self, files: Vec<Attachment>) {
        self.pending.extend(files);
    }

    /// Build the outgoing payload for a send, draining the pending buffer.
    ///
    /// Returns `None` when the trimmed text and the buffer are both empty —
    /// the whole submit is a no-op in that case. The buffer is emptied here,
    /// synchronously with the send, never at response time.
    pub fn compose(&mut self, text: &str) -> Option<Outgoing> {
        let message = text.trim();
        if message.is_empty() && self.pending.is_empty() {
            return None;
        }
        Some(Outgoing {
            message: message.to_owned(),
            attachments: std::mem::take(&mut self.pending),
        })
    }

    /// Replace the view with a conversation history fetched from the server.
    /// System entries are dropped; stored messages carry no attachments.
    pub fn replace_history(&mut self, history: Vec<crate::net::types::StoredMessage>) {
        self.messages = history
            .into_iter()
            .filter(|m| m.role != Role::System)
            .map(|m| ChatMessage { role: m.role, content: m.content, attachments: Vec::new() })
            .collect();
    }

    pub fn indicator_start(&mut self) {
        self.typing_dots = Some(1);
    }

    pub fn indicator_tick(&mut self) {
        if let Some(dots) = self.typing_dots {
            self.typing_dots = Some((dots + 1) % 4);
        }
    }

    pub fn indicator_stop(&mut self) {
        self.typing_dots = None;
    }

    /// Record `id` as the newest outstanding chat request.
    pub fn begin_request(&mut self, id: Uuid) {
        self.inflight = Some(id);
    }

    /// Settle a finished request. Returns `true` when `id` is still the
    /// newest one (the indicator is cleared and the caller should render
    /// the outcome); `false` means a later send superseded it and the
    /// response must be discarded without touching the indicator.
    pub fn settle_request(&mut self, id: Uuid) -> bool {
        if self.inflight == Some(id) {
            self.inflight = None;
            self.indicator_stop();
            true
        } else {
            false
        }
    }
}
