//! Root application component: context providers, startup fetches, and
//! the document/window listeners shared by the whole page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::chat::ChatPage;
use crate::state::caps::ClientCaps;
use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::menu::MenuState;
use crate::state::ui::UiState;

/// Root component.
///
/// Provides the shared state contexts, seeds them from the backend
/// (models, conversation list), and wires the global listeners: Escape
/// and outside clicks close the popovers, resizes recompute the sidebar
/// breakpoint.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let caps = ClientCaps::default();
    let chat = RwSignal::new(ChatState::default());
    let conversations = RwSignal::new(ConversationsState::default());
    let menu = RwSignal::new(MenuState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(caps);
    provide_context(chat);
    provide_context(conversations);
    provide_context(menu);
    provide_context(ui);

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(width) = crate::util::viewport::width() {
            ui.update(|u| u.set_viewport(width));
        }

        if let Some(window) = web_sys::window() {
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                if let Some(width) = crate::util::viewport::width() {
                    ui.update(|u| u.set_viewport(width));
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            on_resize.forget();

            if let Some(document) = window.document() {
                // Popover-internal clicks stop propagation, so anything
                // that reaches the document is an outside click.
                let on_click = Closure::<dyn FnMut()>::new(move || {
                    menu.update(|m| m.close_all());
                });
                let _ = document
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                on_click.forget();

                let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                    move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            menu.update(|m| m.close_all());
                        }
                    },
                );
                let _ = document.add_event_listener_with_callback(
                    "keydown",
                    on_keydown.as_ref().unchecked_ref(),
                );
                on_keydown.forget();
            }
        }

        leptos::task::spawn_local(async move {
            if let Some(models) = crate::net::api::fetch_models().await {
                menu.update(|m| m.models = models);
            }
        });
        leptos::task::spawn_local(async move {
            if let Some(list) = crate::net::api::fetch_conversations().await {
                conversations.update(|cv| cv.adopt(list, true));
            }
        });
    }

    view! {
        <Title text="Charla"/>
        <ChatPage/>
    }
}
