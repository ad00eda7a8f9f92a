//! Floating background particles.
//!
//! Purely decorative: each particle gets a random start position inside
//! the viewport and a random drift duration, then loops forever via a CSS
//! animation. None of this reads or writes the form state.

use leptos::*;
use rand::Rng;

use crate::config::{
    FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH, PARTICLE_COUNT,
    PARTICLE_MAX_DURATION_SECS, PARTICLE_MIN_DURATION_SECS,
};

/// One particle's placement and timing, fixed at mount.
#[derive(Clone, Debug, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    duration_secs: f64,
}

impl Particle {
    /// Random placement within the given viewport.
    fn scatter(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            duration_secs: rng.gen_range(PARTICLE_MIN_DURATION_SECS..PARTICLE_MAX_DURATION_SECS),
        }
    }

    /// Inline style driving the CSS `particle-drift` keyframes.
    fn style(&self) -> String {
        format!(
            "left: {:.0}px; top: {:.0}px; animation-duration: {:.1}s;",
            self.x, self.y, self.duration_secs
        )
    }
}

/// Current viewport size, with a fixed fallback when unavailable.
fn viewport_size() -> (f64, f64) {
    let size = web_sys::window().and_then(|window| {
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width, height))
    });
    size.unwrap_or((FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT))
}

#[component]
pub fn ParticleField() -> impl IntoView {
    let (width, height) = viewport_size();
    let mut rng = rand::thread_rng();

    let particles: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| Particle::scatter(&mut rng, width, height))
        .collect();

    view! {
        <div class="particle-field">
            {particles
                .into_iter()
                .map(|p| view! { <span class="particle" style=p.style()></span> })
                .collect_view()}
        </div>
    }
}
