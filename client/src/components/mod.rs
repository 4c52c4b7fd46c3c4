//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentation pieces driven by props and callbacks. They
//! hold no page state of their own beyond input text and timers; pages own
//! the models in `state` and pass signals down.

pub mod confirm_dialog;
pub mod flight_search;
pub mod pagination;
pub mod status_badge;
pub mod toast;
