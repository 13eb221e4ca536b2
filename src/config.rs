//! Environment-driven server settings.
//!
//! `main` loads `.env` with `dotenvy` first, so these read the merged
//! environment. Leptos build options still come from the Cargo metadata; only
//! the site root can be overridden here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::StartupError;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site_root` (directory holding `pkg/`).
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Read `PORT` and `EDUSMART_SITE_ROOT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::InvalidEnv`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::InvalidEnv`] if `PORT` is not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StartupError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| StartupError::InvalidEnv { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("EDUSMART_SITE_ROOT").filter(|s| !s.trim().is_empty());
        Ok(Self { port, site_root })
    }
}
