//! Page-level layouts.

pub mod chat;
