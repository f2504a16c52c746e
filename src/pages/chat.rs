//! Chat page — sidebar plus the main column.

use leptos::prelude::*;

use crate::components::chat_view::ChatView;
use crate::components::composer::Composer;
use crate::components::greeting::Greeting;
use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

/// Single page of the app: the sidebar next to a column holding the
/// top bar, the greeting or the message list, and the composer.
#[component]
pub fn ChatPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| ui.update(|u| u.toggle_sidebar());

    view! {
        <div class="chat-page">
            <Sidebar/>
            <div class="chat-page__main">
                <header class="chat-page__topbar">
                    <button class="chat-page__menu-toggle" title="Menú" on:click=on_toggle>
                        "\u{2630}"
                    </button>
                    <span class="chat-page__brand">"Charla"</span>
                </header>
                {move || {
                    if ui.get().greeting {
                        view! { <Greeting/> }.into_any()
                    } else {
                        view! { <ChatView/> }.into_any()
                    }
                }}
                <Composer/>
            </div>
        </div>
    }
}
