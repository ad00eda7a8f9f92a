//! Application configuration.
//!
//! Centralized constants for the StudyVerse landing page. These are
//! presentation tuning knobs, not runtime configuration.

/// Application name, shown in the document title.
pub const APP_NAME: &str = "StudyVerse";

/// Number of background particles.
pub const PARTICLE_COUNT: usize = 30;

/// Shortest particle drift duration, in seconds.
pub const PARTICLE_MIN_DURATION_SECS: f64 = 10.0;

/// Longest particle drift duration, in seconds.
pub const PARTICLE_MAX_DURATION_SECS: f64 = 20.0;

/// Viewport size used for particle placement when the window size
/// is unavailable (e.g. during prerendering).
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 800.0;
