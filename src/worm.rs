/*
 * Worm Module
 *
 * A worm is a self-propelled chain of twelve segments. The head moves along
 * a slowly wandering heading and every following segment is pulled toward
 * the one in front of it once the gap grows past the link distance, which
 * gives the trailing, elastic body motion.
 *
 * Worms are plain data; behaviour lives in free functions so that the
 * driver, the collision pass and the tests can call them directly.
 */

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use crate::palette::Palette;
use crate::particle::DeathParticle;

pub const SEGMENT_COUNT: usize = 12;
pub const LINK_DISTANCE: f32 = 8.0;
pub const LINK_PULL: f32 = 6.0;
pub const HEADING_JITTER: f32 = 0.04;
pub const SPAWN_OFFSET: f32 = 50.0;
pub const OFFSCREEN_MARGIN: f32 = 100.0;
pub const COLLISION_RADIUS: f32 = 40.0;
pub const PARTICLES_PER_SEGMENT: usize = 4;

#[derive(Clone, Debug)]
pub struct Worm {
    pub position: Point2,
    pub heading: f32,
    pub speed: f32,
    pub segments: [Point2; SEGMENT_COUNT],
    pub color: Rgb<u8>,
    pub alive: bool,
}

impl Worm {
    /// A live worm collapsed to a single point at `origin`.
    pub fn new(origin: Point2, heading: f32, speed: f32, color: Rgb<u8>) -> Self {
        Self {
            position: origin,
            heading,
            speed,
            segments: [origin; SEGMENT_COUNT],
            color,
            alive: true,
        }
    }
}

/// Create a worm just outside the left or right edge of the canvas, heading
/// roughly across it.
pub fn spawn_worm<R: Rng + ?Sized>(
    canvas: Vec2,
    base_speed: f32,
    palette: &Palette,
    rng: &mut R,
) -> Worm {
    let jitter = (rng.gen::<f32>() - 0.5) * PI;
    let (x, heading) = if rng.gen_bool(0.5) {
        (-SPAWN_OFFSET, jitter)
    } else {
        (canvas.x + SPAWN_OFFSET, PI + jitter)
    };
    let y = rng.gen::<f32>() * canvas.y;
    let speed = base_speed * rng.gen_range(0.8..=1.2);

    Worm::new(pt2(x, y), heading, speed, palette.pick(rng))
}

// Advance the head and drag the body along behind it
pub fn update_worm<R: Rng + ?Sized>(worm: &mut Worm, rng: &mut R) {
    if !worm.alive {
        return;
    }

    worm.position += vec2(worm.heading.cos(), worm.heading.sin()) * worm.speed;
    worm.heading += rng.gen_range(-HEADING_JITTER..HEADING_JITTER);
    worm.segments[0] = worm.position;

    for i in 1..SEGMENT_COUNT {
        worm.segments[i] = follow(worm.segments[i], worm.segments[i - 1]);
    }
}

// Move `current` LINK_PULL units toward `leader` when it lags past LINK_DISTANCE
fn follow(current: Point2, leader: Point2) -> Point2 {
    let delta = leader - current;
    let distance = delta.length();

    if distance > LINK_DISTANCE {
        current + delta / distance * LINK_PULL
    } else {
        current
    }
}

/// True when any segment lies strictly within the collision radius of `pointer`.
pub fn touches(worm: &Worm, pointer: Point2) -> bool {
    worm.alive
        && worm
            .segments
            .iter()
            .any(|segment| segment.distance(pointer) < COLLISION_RADIUS)
}

/// Mark the worm dead and push its death burst into `out`.
///
/// Every even-indexed segment emits `PARTICLES_PER_SEGMENT` particles, so a
/// death always produces 24. Returns the number emitted, which is zero when
/// the worm was already dead.
pub fn kill_worm<R: Rng + ?Sized>(
    worm: &mut Worm,
    out: &mut Vec<DeathParticle>,
    rng: &mut R,
) -> usize {
    if !worm.alive {
        return 0;
    }
    worm.alive = false;

    let before = out.len();
    for segment in worm.segments.iter().step_by(2) {
        for _ in 0..PARTICLES_PER_SEGMENT {
            out.push(DeathParticle::new(*segment, worm.color, rng));
        }
    }
    out.len() - before
}

/// Dead worms and worms whose head left the canvas margin are removed.
pub fn is_removable(worm: &Worm, canvas: Vec2) -> bool {
    if !worm.alive {
        return true;
    }

    let (x, y) = (worm.position.x, worm.position.y);
    x < -OFFSCREEN_MARGIN
        || x > canvas.x + OFFSCREEN_MARGIN
        || y < -OFFSCREEN_MARGIN
        || y > canvas.y + OFFSCREEN_MARGIN
}
