/*
 * Worm Effect - Module Definitions
 *
 * This file defines the module structure for the worm effect: an ambient,
 * pointer-reactive animation where worms drift across the window, die when
 * the pointer touches them and burst into fading particles.
 */

// Re-export key components for easier access
pub use app::Model;
pub use canvas::Canvas;
pub use debug::DebugInfo;
pub use error::ConfigError;
pub use palette::{Palette, ThemeStyle};
pub use params::EffectParams;
pub use particle::DeathParticle;
pub use simulation::{SimulationState, StepConfig};
pub use worm::Worm;

// Define modules
pub mod app;
pub mod canvas;
pub mod debug;
pub mod error;
pub mod input;
pub mod palette;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod ui;
pub mod worm;
