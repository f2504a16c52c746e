//! Message list: renders the conversation, inline attachments, and the
//! typing indicator, keeping the newest message in view.

use leptos::prelude::*;

use crate::state::chat::{Attachment, AttachmentKind, ChatState, Role};

/// Scrollable message area.
#[component]
pub fn ChatView() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Follow the newest message (and the indicator) to the bottom.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.typing_dots;

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-view" node_ref=messages_ref>
            {move || {
                chat.get()
                    .messages
                    .iter()
                    .map(|msg| {
                        let is_user = msg.role == Role::User;
                        let content = msg.content.clone();
                        let attachments = msg.attachments.clone();
                        view! {
                            <div
                                class="chat-view__message"
                                class:chat-view__message--user=is_user
                                class:chat-view__message--assistant=!is_user
                            >
                                {(!content.is_empty()).then(|| view! {
                                    <div class="chat-view__text">{content.clone()}</div>
                                })}
                                {(!attachments.is_empty()).then(|| view! {
                                    <div class="chat-view__attachments">
                                        {attachments
                                            .iter()
                                            .map(|att| attachment_view(att))
                                            .collect::<Vec<_>>()}
                                    </div>
                                })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            {move || {
                chat.get().typing_dots.map(|dots| {
                    view! {
                        <div class="chat-view__message chat-view__message--assistant chat-view__typing">
                            {format!("Escribiendo{}", ".".repeat(dots as usize))}
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// One attachment node: inline image, inline video, or a download link,
/// chosen by the preview data-URL prefix. Anything malformed falls back
/// to the link form.
fn attachment_view(att: &Attachment) -> AnyView {
    match att.kind() {
        AttachmentKind::Image => view! {
            <img class="chat-view__image" src=att.preview_src() alt=att.display_name().to_owned()/>
        }
        .into_any(),
        AttachmentKind::Video => view! {
            <video class="chat-view__video" src=att.preview_src() controls=true></video>
        }
        .into_any(),
        AttachmentKind::File => view! {
            <a
                class="chat-view__file"
                href=att.link_href()
                download=att.display_name().to_owned()
                target="_blank"
            >
                {att.display_name().to_owned()}
            </a>
        }
        .into_any(),
    }
}
