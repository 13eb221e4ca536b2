//! Client-wide constants.
//!
//! The app has no runtime configuration surface; these values are fixed at
//! build time and shared by the session store, the data API, and the views.

/// `localStorage` slot holding the persisted session snapshot.
pub const SESSION_STORAGE_KEY: &str = "edusmart-auth";

/// `localStorage` slot holding display and notification preferences.
pub const PREFERENCES_STORAGE_KEY: &str = "edusmart-preferences";

/// Schema version written alongside the session snapshot.
pub const SESSION_SNAPSHOT_VERSION: u32 = 0;

/// Simulated login round trip in milliseconds.
pub const LOGIN_LATENCY_MS: u64 = 500;

/// Simulated data fetch round trip in milliseconds.
pub const MOCK_LATENCY_MS: u64 = 500;

/// Public entry path; unauthenticated navigation lands here.
pub const LOGIN_PATH: &str = "/";

/// Product name shown in titles and headers.
pub const APP_NAME: &str = "EduSmart";
