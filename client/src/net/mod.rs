//! Data access modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes the async fetch/submit surface pages call, `mock` holds the
//! canned records behind it, and `types` defines the shared record schema.

pub mod api;
pub mod mock;
pub mod types;
