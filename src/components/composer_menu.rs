//! Composer actions popover and the optional model submenu.
//!
//! The submenu only renders when `ClientCaps::model_menu` is on; the
//! selection state machine in `state::menu` exists either way. Clicks
//! inside the popovers stop propagation so the document-level listener
//! only sees genuine outside clicks.

use leptos::prelude::*;

use crate::state::caps::ClientCaps;
use crate::state::chat::ChatState;
use crate::state::menu::{MenuState, ModelChoice};

/// "+" trigger plus the layered popovers.
#[component]
pub fn ComposerMenu(file_input: NodeRef<leptos::html::Input>) -> impl IntoView {
    let caps = expect_context::<ClientCaps>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let menu = expect_context::<RwSignal<MenuState>>();

    let on_trigger = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        menu.update(|m| m.toggle_actions());
    };

    let on_attach = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        menu.update(|m| m.close_all());
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &file_input;
        }
    };

    let on_models = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        menu.update(|m| m.toggle_models());
    };

    // Selecting a model closes both menus; an actual switch additionally
    // resets the server-side history and confirms in the chat view.
    let on_choose = move |name: String, ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let choice = menu
            .try_update(|m| m.choose(&name))
            .unwrap_or(ModelChoice::Unchanged);
        if choice == ModelChoice::Switched {
            #[cfg(feature = "csr")]
            {
                leptos::task::spawn_local(async move {
                    let confirmation = match crate::net::api::reset_history().await {
                        Ok(()) => format!("Modelo cambiado a {name}."),
                        Err(err) => {
                            log::warn!("fallo en /api/reset_history: {err}");
                            format!(
                                "Modelo cambiado a {name}, pero no se pudo reiniciar el historial."
                            )
                        }
                    };
                    chat.update(|c| {
                        c.push(crate::state::chat::Role::Assistant, confirmation, Vec::new());
                    });
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = name;
                let _ = &chat;
            }
        }
    };

    view! {
        <div class="composer-menu">
            <button class="composer-menu__trigger" title="Más acciones" on:click=on_trigger>
                "+"
            </button>
            <Show when=move || menu.get().actions_open>
                <div class="composer-menu__popover" on:click=move |ev| ev.stop_propagation()>
                    <button class="composer-menu__item" on:click=on_attach>
                        "\u{1F4CE} Adjuntar archivos"
                    </button>
                    {caps.model_menu.then(|| view! {
                        <button class="composer-menu__item" on:click=on_models>
                            {move || format!("\u{25B8} {}", menu.get().label())}
                        </button>
                        <Show when=move || menu.get().models_open>
                            <div class="composer-menu__models">
                                {move || {
                                    let state = menu.get();
                                    let selected = state.selected.clone();
                                    state
                                        .models
                                        .iter()
                                        .map(|m| {
                                            let name = m.clone();
                                            let is_active = selected.as_deref() == Some(m.as_str());
                                            view! {
                                                <button
                                                    class="composer-menu__model"
                                                    class:composer-menu__model--active=is_active
                                                    on:click=move |ev| on_choose(name.clone(), ev)
                                                >
                                                    {m.clone()}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    })}
                </div>
            </Show>
        </div>
    }
}
