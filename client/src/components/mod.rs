//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signed-in chrome and the sign-in card while
//! reading/writing the shared `AuthState` from Leptos context.

pub mod app_shell;
pub mod auth_card;
pub mod header;
pub mod protected_route;
pub mod sidebar;
