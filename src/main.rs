/*
 * Worm Effect
 *
 * Worms drift in from the left and right edges of the window, trailing a
 * fading, glowing body. Touching one with the pointer kills it and scatters
 * its body into particles. The control panel switches between the dark and
 * light theme; switching restarts the effect with the theme's palette.
 *
 * Configuration comes from the command line (or matching environment
 * variables); logging is configured through RUST_LOG.
 */

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use worm_effect::app;
use worm_effect::params::{EffectParams, DEFAULT_PARTICLE_COUNT, DEFAULT_SPEED};

#[derive(Parser, Debug)]
#[command(
    name = "worm-effect",
    version,
    about = "Ambient worm animation that reacts to the pointer"
)]
struct Cli {
    /// Palette override as comma separated hex colors (e.g. "#00f5ff,#ff0080").
    #[arg(long, env = "WORM_EFFECT_COLORS", value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Target number of live worms.
    #[arg(long, env = "WORM_EFFECT_PARTICLE_COUNT", default_value_t = DEFAULT_PARTICLE_COUNT)]
    particle_count: usize,

    /// Base speed multiplier for new worms.
    #[arg(long, env = "WORM_EFFECT_SPEED", default_value_t = DEFAULT_SPEED)]
    speed: f32,

    /// Start in light mode.
    #[arg(long, env = "WORM_EFFECT_LIGHT")]
    light: bool,

    /// Start with the control panel hidden (press H to show it).
    #[arg(long)]
    hide_controls: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("worm_effect=info"))
        .init();

    let cli = Cli::parse();
    debug!("{cli:?}");

    let mut params = EffectParams::from_overrides(
        cli.colors.as_deref(),
        cli.particle_count,
        cli.speed,
        !cli.light,
    )
    .context("invalid worm effect configuration")?;
    params.show_controls = !cli.hide_controls;

    app::run(params);
    Ok(())
}
