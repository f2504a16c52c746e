//! Composer row: text input, attachment/voice capture, and the send flow.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::composer_menu::ComposerMenu;
use crate::state::chat::{ChatState, Role};
use crate::state::conversations::ConversationsState;
use crate::state::menu::MenuState;
use crate::state::ui::UiState;
use crate::util::dialog;
use crate::util::speech;

/// Fixed assistant-styled message rendered when a send fails.
pub const SEND_ERROR: &str = "Lo siento, ha ocurrido un error al contactar con el servidor.";

#[cfg(feature = "csr")]
const TYPING_TICK_MS: u32 = 500;

/// Composer: actions menu, hidden file input, text field, mic, and send.
#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Slot for the indicator animation timer. Starting a new indicator
    // drops (and thereby cancels) any previous interval first, so at most
    // one indicator/timer pair is ever live.
    #[cfg(feature = "csr")]
    let ticker: StoredValue<Option<gloo_timers::callback::Interval>, LocalStorage> =
        StoredValue::new_local(None);

    let start_indicator = move || {
        chat.update(|c| c.indicator_start());
        #[cfg(feature = "csr")]
        {
            ticker.update_value(|slot| {
                slot.take();
            });
            let handle = gloo_timers::callback::Interval::new(TYPING_TICK_MS, move || {
                chat.update(|c| c.indicator_tick());
            });
            ticker.set_value(Some(handle));
        }
    };

    let do_send = move || {
        let text = input.get_untracked();
        let Some(outgoing) = chat.try_update(|c| c.compose(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        ui.update(|u| u.enter_chat());
        conversations.update(|cv| {
            cv.ensure_active();
            if !outgoing.message.is_empty() {
                cv.derive_title(&outgoing.message);
            }
        });
        chat.update(|c| {
            c.push(Role::User, outgoing.message.clone(), outgoing.attachments.clone());
        });
        start_indicator();

        let request_id = Uuid::new_v4();
        chat.update(|c| c.begin_request(request_id));

        #[cfg(feature = "csr")]
        {
            let model = menu.get_untracked().selected.clone();
            leptos::task::spawn_local(async move {
                let req = crate::net::types::ChatRequest {
                    message: outgoing.message,
                    attachments: outgoing.attachments,
                    model,
                };
                let result = crate::net::api::send_chat(&req).await;

                let settled = chat.try_update(|c| c.settle_request(request_id)).unwrap_or(false);
                if !settled {
                    log::warn!("descartada una respuesta de chat obsoleta");
                    return;
                }
                ticker.update_value(|slot| {
                    slot.take();
                });

                match result {
                    Ok(reply) => chat.update(|c| c.push(Role::Assistant, reply, Vec::new())),
                    Err(err) => {
                        log::error!("fallo en /api/chat: {err}");
                        chat.update(|c| c.push(Role::Assistant, SEND_ERROR.to_owned(), Vec::new()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = outgoing;
            let _ = &menu;
        }
    };

    // Files are uploaded the moment they are picked; the descriptors join
    // the pending buffer and get echoed into the view right away.
    let on_files = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(file_input) = file_ref.get() else {
                return;
            };
            let Some(files) = file_input.files() else {
                return;
            };
            if files.length() == 0 {
                return;
            }
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            for i in 0..files.length() {
                if let Some(file) = files.item(i) {
                    let _ = form.append_with_blob("files", &file);
                }
            }
            // Allow re-picking the same file later.
            file_input.set_value("");

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_files(form).await {
                    Ok(descriptors) => {
                        chat.update(|c| {
                            c.queue_attachments(descriptors.clone());
                            c.push(Role::User, String::new(), descriptors);
                        });
                    }
                    Err(err) => {
                        log::warn!("fallo en /api/upload: {err}");
                        dialog::alert("No se pudieron subir los archivos.");
                    }
                }
            });
        }
    };

    let on_mic = move |_| {
        if !speech::is_supported() {
            dialog::alert("Tu navegador no soporta el reconocimiento de voz.");
            return;
        }
        let result = speech::start_dictation(move |transcript| {
            input.update(|value| {
                if value.is_empty() {
                    *value = transcript;
                } else {
                    value.push(' ');
                    value.push_str(&transcript);
                }
            });
        });
        if let Err(err) = result {
            #[cfg(feature = "csr")]
            log::warn!("no se pudo iniciar el dictado: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="composer">
            <ComposerMenu file_input=file_ref/>
            <input
                class="composer__file"
                type="file"
                multiple=true
                node_ref=file_ref
                on:change=on_files
            />
            <input
                class="composer__input"
                type="text"
                placeholder="Escribe un mensaje..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="composer__mic" title="Dictar" on:click=on_mic>
                "\u{1F3A4}"
            </button>
            <button class="btn btn--primary composer__send" on:click=move |_| do_send()>
                "Enviar"
            </button>
        </div>
    }
}
