/*
 * Error Module
 *
 * Configuration errors reported before the window opens. Nothing in the
 * frame path returns an error: a frame that cannot be drawn is skipped.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid hex color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),
    #[error("color palette must contain at least one color")]
    EmptyPalette,
    #[error("speed must be a finite, non-negative number (got {0})")]
    InvalidSpeed(f32),
}
