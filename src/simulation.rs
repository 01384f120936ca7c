/*
 * Simulation Module
 *
 * The driver's state and the transitions applied to it:
 * - step: retire finished entities, run the spawner, advance worms and
 *   particles (once per display refresh, no elapsed-time compensation)
 * - pointer_moved: run the collision pass immediately and merge the death
 *   bursts into the live particle set
 * - reseed: drop every entity, used when the theme flips
 *
 * Nothing here touches nannou's window or draw APIs, so the whole lifecycle
 * can be driven from tests.
 */

use log::debug;
use nannou::prelude::*;
use rand::Rng;

use crate::palette::Palette;
use crate::particle::{update_particle, DeathParticle};
use crate::worm::{is_removable, kill_worm, spawn_worm, touches, update_worm, Worm};

pub const SPAWN_PROBABILITY: f64 = 0.1;

// Where the pointer sits before the first move event
pub const PARKED_POINTER: (f32, f32) = (-1000.0, -1000.0);

/// Everything the driver owns between frames.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub worms: Vec<Worm>,
    pub particles: Vec<DeathParticle>,
    pub pointer: Point2,
    pub canvas: Vec2,
    pub palette: Palette,
    pub steps: u64,
    pub kills: u64,
}

/// Per-step knobs read from the current parameters.
#[derive(Clone, Copy, Debug)]
pub struct StepConfig {
    pub target_population: usize,
    pub base_speed: f32,
}

impl SimulationState {
    pub fn new(canvas: Vec2, palette: Palette) -> Self {
        Self {
            worms: Vec::new(),
            particles: Vec::new(),
            pointer: pt2(PARKED_POINTER.0, PARKED_POINTER.1),
            canvas,
            palette,
            steps: 0,
            kills: 0,
        }
    }

    pub fn resize(&mut self, canvas: Vec2) {
        self.canvas = canvas;
    }

    /// Start over with an empty entity set under `palette`.
    pub fn reseed(&mut self, palette: Palette) {
        self.worms.clear();
        self.particles.clear();
        self.palette = palette;
    }

    pub fn live_worms(&self) -> usize {
        self.worms.iter().filter(|w| w.alive).count()
    }

    /// Record a new pointer position and kill every worm it touches.
    ///
    /// Death bursts are in the live particle set when this returns.
    pub fn pointer_moved<R: Rng + ?Sized>(&mut self, pointer: Point2, rng: &mut R) -> usize {
        self.pointer = pointer;

        let mut burst = Vec::new();
        let killed = collide(&mut self.worms, pointer, &mut burst, rng);
        if killed > 0 {
            debug!("pointer at {pointer:?} killed {killed} worm(s), {} particles", burst.len());
            self.kills += killed as u64;
            self.particles.append(&mut burst);
        }
        killed
    }
}

/// Kill every live worm with a segment within reach of `pointer`, pushing
/// their particles into `out`. Returns the number of worms killed.
pub fn collide<R: Rng + ?Sized>(
    worms: &mut [Worm],
    pointer: Point2,
    out: &mut Vec<DeathParticle>,
    rng: &mut R,
) -> usize {
    let mut killed = 0;
    for worm in worms.iter_mut() {
        if touches(worm, pointer) && kill_worm(worm, out, rng) > 0 {
            killed += 1;
        }
    }
    killed
}

/// Spawn at most one worm, with probability `SPAWN_PROBABILITY`, while the
/// population is below target.
pub fn maybe_spawn<R: Rng + ?Sized>(
    state: &mut SimulationState,
    config: &StepConfig,
    rng: &mut R,
) -> bool {
    if state.worms.len() >= config.target_population || !rng.gen_bool(SPAWN_PROBABILITY) {
        return false;
    }

    let worm = spawn_worm(state.canvas, config.base_speed, &state.palette, rng);
    state.worms.push(worm);
    true
}

// One frame of simulation
pub fn step<R: Rng + ?Sized>(state: &mut SimulationState, config: &StepConfig, rng: &mut R) {
    let canvas = state.canvas;
    state.worms.retain(|worm| !is_removable(worm, canvas));
    state.particles.retain(|particle| !particle.is_expired());

    maybe_spawn(state, config, rng);

    for worm in &mut state.worms {
        update_worm(worm, rng);
    }
    for particle in &mut state.particles {
        update_particle(particle);
    }

    state.steps += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> SimulationState {
        SimulationState::new(vec2(800.0, 600.0), Palette::for_theme(true))
    }

    #[test]
    fn new_state_is_empty_with_parked_pointer() {
        let state = state();
        assert!(state.worms.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.pointer, pt2(-1000.0, -1000.0));
    }

    #[test]
    fn spawner_adds_at_most_one_per_call() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(1);
        let config = StepConfig { target_population: 50, base_speed: 1.0 };

        for _ in 0..500 {
            let before = state.worms.len();
            maybe_spawn(&mut state, &config, &mut rng);
            assert!(state.worms.len() <= before + 1);
        }
        assert!(!state.worms.is_empty());
        assert!(state.worms.len() <= 50);
    }

    #[test]
    fn collide_counts_only_touched_worms() {
        let mut rng = StdRng::seed_from_u64(2);
        let color = rgb(0, 0, 0);
        let mut worms = vec![
            Worm::new(pt2(100.0, 100.0), 0.0, 1.0, color),
            Worm::new(pt2(120.0, 100.0), 0.0, 1.0, color),
            Worm::new(pt2(500.0, 500.0), 0.0, 1.0, color),
        ];
        let mut out = Vec::new();

        assert_eq!(collide(&mut worms, pt2(110.0, 100.0), &mut out, &mut rng), 2);
        assert_eq!(out.len(), 48);
        assert!(worms[2].alive);

        // Already dead worms are not killed again
        assert_eq!(collide(&mut worms, pt2(110.0, 100.0), &mut out, &mut rng), 0);
        assert_eq!(out.len(), 48);
    }

    #[test]
    fn reseed_clears_entities_and_swaps_palette() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(3);
        state.worms.push(Worm::new(pt2(10.0, 10.0), 0.0, 1.0, rgb(0, 0, 0)));
        state.pointer_moved(pt2(10.0, 10.0), &mut rng);
        assert_eq!(state.particles.len(), 24);

        state.reseed(Palette::for_theme(false));
        assert!(state.worms.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.palette, Palette::for_theme(false));
    }

    #[test]
    fn step_counts_frames() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(4);
        let config = StepConfig { target_population: 0, base_speed: 1.0 };
        for _ in 0..3 {
            step(&mut state, &config, &mut rng);
        }
        assert_eq!(state.steps, 3);
    }
}
