//! Conversation sidebar: list, new-chat button, deletion, and the
//! responsive overlay/collapse behaviors.

use leptos::prelude::*;

use crate::state::caps::ClientCaps;
use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::ui::UiState;
use crate::util::dialog;

/// Sidebar listing saved conversations, newest first when the model-menu
/// variant is active.
#[component]
pub fn Sidebar() -> impl IntoView {
    let caps = expect_context::<ClientCaps>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Load a stored conversation and re-render the view from scratch.
    let on_select = move |id: Option<i64>| {
        // Local placeholders have no server history to fetch.
        let Some(id) = id else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_conversation(id).await {
                    Some(history) => {
                        conversations.update(|cv| cv.select(id));
                        chat.update(|c| c.replace_history(history));
                        ui.update(|u| u.enter_chat());
                    }
                    None => log::warn!("no se pudo cargar la conversación {id}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            let _ = (&chat, &ui);
        }
    };

    let on_delete = move |id: i64, ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !dialog::confirm("¿Eliminar esta conversación?") {
            return;
        }
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_conversation(id).await {
                    Ok(true) => {
                        let was_active = conversations.get_untracked().current == id;
                        if was_active {
                            conversations.update(|cv| cv.clear_selection());
                            chat.update(|c| c.messages.clear());
                            ui.update(|u| u.show_greeting());
                        }
                    }
                    Ok(false) => log::warn!("el servidor rechazó eliminar la conversación {id}"),
                    Err(err) => log::warn!("fallo al eliminar la conversación {id}: {err}"),
                }
                // The list is refreshed regardless of which entry was
                // deleted; a cleared selection stays cleared.
                if let Some(list) = crate::net::api::fetch_conversations().await {
                    conversations.update(|cv| cv.adopt(list, false));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    };

    let on_new_chat = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::new_chat().await {
                    Ok(id) => {
                        conversations.update(|cv| cv.select(id));
                        chat.update(|c| c.messages.clear());
                        ui.update(|u| u.show_greeting());
                        if let Some(list) = crate::net::api::fetch_conversations().await {
                            conversations.update(|cv| cv.adopt(list, false));
                        }
                    }
                    Err(err) => log::warn!("no se pudo crear la conversación: {err}"),
                }
            });
        }
    };

    let on_backdrop = move |_| ui.update(|u| u.close_overlay());

    view! {
        <aside
            class="sidebar"
            class:sidebar--open=move || ui.get().narrow && ui.get().sidebar_open
            class:sidebar--collapsed=move || !ui.get().narrow && ui.get().sidebar_collapsed
        >
            <div class="sidebar__header">
                <span class="sidebar__brand">"Charla"</span>
                <button class="btn btn--primary sidebar__new" on:click=on_new_chat>
                    "+ Nueva conversación"
                </button>
            </div>

            <div class="sidebar__list">
                {move || {
                    let state = conversations.get();
                    state
                        .display_order(caps.model_menu)
                        .into_iter()
                        .map(|entry| {
                            let active = state.is_active(&entry);
                            let id = entry.id;
                            let title = entry.display_title().to_owned();
                            view! {
                                <div
                                    class="sidebar__item"
                                    class:sidebar__item--active=active
                                    on:click=move |_| on_select(id)
                                >
                                    <span class="sidebar__title">{title}</span>
                                    {id.map(|id| view! {
                                        <button
                                            class="sidebar__delete"
                                            title="Eliminar"
                                            on:click=move |ev| on_delete(id, ev)
                                        >
                                            "\u{1F5D1}"
                                        </button>
                                    })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="sidebar__footer">
                <a class="sidebar__logout" href="/logout">
                    "Cerrar sesión"
                </a>
            </div>
        </aside>

        <Show when=move || ui.get().narrow && ui.get().sidebar_open>
            <div class="sidebar-backdrop" on:click=on_backdrop></div>
        </Show>
    }
}
