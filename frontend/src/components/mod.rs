//! UI Components for the StudyVerse landing page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and tagline
//! - [`ParticleField`] - Decorative floating particles
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`VerseForm`] - Controlled verse input with submit
//! - [`LoadingView`] - Terminal loading message

mod footer;
mod hero;
mod loading;
mod particles;
mod verse_form;

pub use footer::*;
pub use hero::*;
pub use loading::*;
pub use particles::*;
pub use verse_form::*;
