//! Greeting screen shown before the first message of a session.

use leptos::prelude::*;

/// Centered greeting replaced by the chat view on the first send.
#[component]
pub fn Greeting() -> impl IntoView {
    view! {
        <div class="greeting">
            <h1 class="greeting__title">"Charla"</h1>
            <p class="greeting__subtitle">"¿En qué puedo ayudarte hoy?"</p>
        </div>
    }
}
