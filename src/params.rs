/*
 * Effect Parameters Module
 *
 * This module defines the EffectParams struct holding the configuration the
 * worm effect consumes (palette override, target population, base speed)
 * together with the dark-mode theme signal. Parameters are seeded from the
 * command line and adjusted at runtime through the control panel; snapshots
 * let the driver detect when the theme flipped between frames.
 */

use crate::error::ConfigError;
use crate::palette::Palette;

pub const DEFAULT_PARTICLE_COUNT: usize = 15;
pub const DEFAULT_SPEED: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct EffectParams {
    // Overrides the theme palette when set
    pub colors: Option<Palette>,
    // Target live-worm population
    pub particle_count: usize,
    // Base speed multiplier applied to newly spawned worms
    pub speed: f32,
    // Theme signal
    pub dark_mode: bool,
    pub show_debug: bool,
    pub show_controls: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug)]
struct ParamSnapshot {
    particle_count: usize,
    speed: f32,
    dark_mode: bool,
    show_debug: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            colors: None,
            particle_count: DEFAULT_PARTICLE_COUNT,
            speed: DEFAULT_SPEED,
            dark_mode: true,
            show_debug: false,
            show_controls: true,
            previous_values: None,
        }
    }
}

impl EffectParams {
    /// Build parameters from raw overrides, validating colors and speed.
    pub fn from_overrides(
        colors: Option<&[String]>,
        particle_count: usize,
        speed: f32,
        dark_mode: bool,
    ) -> Result<Self, ConfigError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        let colors = colors.map(|c| Palette::from_hex(c)).transpose()?;

        Ok(Self {
            colors,
            particle_count,
            speed,
            dark_mode,
            ..Self::default()
        })
    }

    /// Palette new worms draw their color from.
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.colors.as_ref(), self.dark_mode)
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            particle_count: self.particle_count,
            speed: self.speed,
            dark_mode: self.dark_mode,
            show_debug: self.show_debug,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (theme_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let Some(prev) = &self.previous_values else {
            return (false, false);
        };

        let theme_changed = self.dark_mode != prev.dark_mode;
        let ui_changed = theme_changed
            || self.particle_count != prev.particle_count
            || self.speed != prev.speed
            || self.show_debug != prev.show_debug;

        (theme_changed, ui_changed)
    }

    // Parameter ranges for UI sliders
    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        0..=100
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.1..=5.0
    }
}
