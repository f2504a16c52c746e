//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `conversations`, `menu`, `ui`) so
//! individual components can depend on small focused models. Each struct is
//! plain data plus transition methods; components wrap them in `RwSignal`s
//! and call the transitions from event handlers, which keeps every state
//! change directly invokable from unit tests without a DOM.

pub mod caps;
pub mod chat;
pub mod conversations;
pub mod menu;
pub mod ui;
