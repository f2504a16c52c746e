//! REST helpers for the chat backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. Off-browser the
//! same functions are stubs returning `None`/`Err`, so the state layer
//! compiles and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics: a failed call
//! degrades to an alert or a fixed chat-view message and never crashes
//! the page.

#![allow(clippy::unused_async)]

use crate::net::types::{ChatRequest, StoredMessage};
use crate::state::conversations::ConversationSummary;

#[cfg(feature = "csr")]
use crate::net::types::{
    ChatResponse, ConversationsResponse, DeleteResponse, MessagesResponse, ModelsResponse,
    NewChatResponse, UploadResponse,
};
#[cfg(feature = "csr")]
use crate::state::chat::Attachment;

/// Fetch the model identifiers for the selector from `GET /api/models`.
pub async fn fetch_models() -> Option<Vec<String>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/models").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body: ModelsResponse = resp.json().await.ok()?;
        Some(body.models)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the conversation summaries from `GET /api/conversations`.
pub async fn fetch_conversations() -> Option<Vec<ConversationSummary>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/conversations").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body: ConversationsResponse = resp.json().await.ok()?;
        Some(body.conversations)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Load one conversation's history from `GET /api/conversations/{id}`.
/// The call also primes the server-side context for subsequent sends.
pub async fn fetch_conversation(id: i64) -> Option<Vec<StoredMessage>> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/conversations/{id}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body: MessagesResponse = resp.json().await.ok()?;
        Some(body.messages)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Delete a conversation via `POST /api/conversations/{id}/delete`.
///
/// # Errors
///
/// Returns an error string when the request itself fails; the `Ok` bool is
/// the server's verdict.
pub async fn delete_conversation(id: i64) -> Result<bool, String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/conversations/{id}/delete");
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("delete failed: {}", resp.status()));
        }
        let body: DeleteResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.success)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err("not available off-browser".to_owned())
    }
}

/// Create an empty conversation via `POST /api/new_chat`.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn new_chat() -> Result<i64, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/new_chat")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("new chat failed: {}", resp.status()));
        }
        let body: NewChatResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.id)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available off-browser".to_owned())
    }
}

/// Clear the server-side model context via `POST /api/reset_history`.
/// Called when the user switches models.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn reset_history() -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/reset_history")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("reset failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available off-browser".to_owned())
    }
}

/// Upload the picked files as multipart form data (`files` field) via
/// `POST /api/upload`. Only meaningful in the browser: the argument is a
/// DOM `FormData`.
///
/// # Errors
///
/// Returns an error string when the request fails or the response does not
/// parse.
#[cfg(feature = "csr")]
pub async fn upload_files(form: web_sys::FormData) -> Result<Vec<Attachment>, String> {
    let request = gloo_net::http::Request::post("/api/upload")
        .body(form)
        .map_err(|e| e.to_string())?;
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("upload failed: {}", resp.status()));
    }
    let body: UploadResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.files)
}

/// Send a chat turn via `POST /api/chat` and return the assistant's reply.
///
/// # Errors
///
/// Returns an error string on transport failure, non-2xx status, or an
/// unparseable body. The caller renders a fixed Spanish error message.
pub async fn send_chat(req: &ChatRequest) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/chat")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("chat failed: {}", resp.status()));
        }
        let body: ChatResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err("not available off-browser".to_owned())
    }
}
