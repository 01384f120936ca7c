/*
 * Palette Module
 *
 * Theme-driven visual parameters. The dark/light signal selects both the
 * default color palette handed to new worms and the ThemeStyle the renderer
 * reads its glow, opacity and compositing settings from.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::error::ConfigError;

const DARK_PALETTE: [(u8, u8, u8); 5] = [
    (0x00, 0xf5, 0xff),
    (0xff, 0x00, 0x80),
    (0x00, 0xff, 0x80),
    (0xff, 0x80, 0x00),
    (0x80, 0x00, 0xff),
];

const LIGHT_PALETTE: [(u8, u8, u8); 5] = [
    (0x00, 0x66, 0xcc),
    (0xcc, 0x00, 0x66),
    (0x00, 0xcc, 0x66),
    (0xcc, 0x66, 0x00),
    (0x66, 0x00, 0xcc),
];

/// A non-empty, ordered list of worm colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb<u8>>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb<u8>>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a list of `#rgb` / `#rrggbb` strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, ConfigError> {
        let parsed = colors
            .iter()
            .map(|c| parse_hex_color(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// The built-in palette for the given theme.
    pub fn for_theme(dark_mode: bool) -> Self {
        let table = if dark_mode { &DARK_PALETTE } else { &LIGHT_PALETTE };
        Self {
            colors: table.iter().map(|&(r, g, b)| rgb(r, g, b)).collect(),
        }
    }

    /// Override wins; otherwise the theme's palette.
    pub fn resolve(override_colors: Option<&Palette>, dark_mode: bool) -> Self {
        match override_colors {
            Some(palette) => palette.clone(),
            None => Self::for_theme(dark_mode),
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb<u8> {
        self.colors[rng.gen_range(0..self.colors.len())]
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

pub fn parse_hex_color(text: &str) -> Result<Rgb<u8>, ConfigError> {
    let invalid = || ConfigError::InvalidColor(text.to_string());
    let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        // #rgb expands each nibble, so #0af == #00aaff
        3 => {
            let nibble = |i: usize| {
                u8::from_str_radix(&digits[i..i + 1], 16)
                    .map(|v| v * 17)
                    .map_err(|_| invalid())
            };
            Ok(rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
            Ok(rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => Err(invalid()),
    }
}

/// Visual parameters switched by the theme signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeStyle {
    pub base_opacity: f32,
    pub halo_opacity: f32,
    pub worm_glow_blur: f32,
    pub stroke_glow_blur: f32,
    pub particle_glow_blur: f32,
    pub particle_opacity: f32,
    pub canvas_opacity: f32,
    pub additive_blend: bool,
    pub background: Rgb<u8>,
}

impl ThemeStyle {
    pub fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                base_opacity: 1.0,
                halo_opacity: 0.5,
                worm_glow_blur: 25.0,
                stroke_glow_blur: 5.0,
                particle_glow_blur: 10.0,
                particle_opacity: 1.0,
                canvas_opacity: 1.0,
                additive_blend: true,
                background: rgb(6, 6, 12),
            }
        } else {
            Self {
                base_opacity: 0.8,
                halo_opacity: 0.3,
                worm_glow_blur: 15.0,
                stroke_glow_blur: 3.0,
                particle_glow_blur: 5.0,
                particle_opacity: 0.8,
                canvas_opacity: 0.9,
                additive_blend: false,
                background: rgb(246, 246, 250),
            }
        }
    }
}

/// Alpha multiplier of the bottom fade mask at canvas height `y`.
///
/// Fully transparent at the bottom edge, fully opaque from 30% of the height
/// upward.
pub fn bottom_fade(y: f32, canvas_height: f32) -> f32 {
    if canvas_height <= 0.0 {
        return 1.0;
    }
    let from_bottom = (canvas_height - y) / canvas_height;
    (from_bottom / 0.3).clamp(0.0, 1.0)
}
