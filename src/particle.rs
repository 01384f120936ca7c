/*
 * Death Particle Module
 *
 * A short-lived point of light emitted when a worm dies. Particles fly
 * outward, slow down, shrink and fade; only their age decides removal.
 */

use nannou::prelude::*;
use std::f32::consts::TAU;
use rand::Rng;

const DAMPING: f32 = 0.98;
const SHRINK: f32 = 0.99;

#[derive(Clone, Debug)]
pub struct DeathParticle {
    pub position: Point2,
    pub velocity: Vec2,
    pub color: Rgb<u8>,
    pub size: f32,
    pub age: u32,
    pub max_age: u32,
    pub opacity: f32,
}

impl DeathParticle {
    /// A particle at `origin` heading in a random direction at 2..5 units/step.
    pub fn new<R: Rng + ?Sized>(origin: Point2, color: Rgb<u8>, rng: &mut R) -> Self {
        let angle = rng.gen::<f32>() * TAU;
        let speed = rng.gen_range(2.0..5.0);

        Self {
            position: origin,
            velocity: vec2(angle.cos(), angle.sin()) * speed,
            color,
            size: rng.gen_range(2.0..4.0),
            age: 0,
            max_age: rng.gen_range(30..50),
            opacity: 1.0,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.max_age
    }
}

// Advance one step
pub fn update_particle(particle: &mut DeathParticle) {
    particle.age += 1;
    particle.position += particle.velocity;
    particle.velocity *= DAMPING;
    particle.opacity = (1.0 - particle.age as f32 / particle.max_age as f32).max(0.0);
    particle.size *= SHRINK;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(seed: u64) -> DeathParticle {
        let mut rng = StdRng::seed_from_u64(seed);
        DeathParticle::new(pt2(10.0, 20.0), rgb(255, 0, 128), &mut rng)
    }

    #[test]
    fn new_particle_is_within_ranges() {
        for seed in 0..50 {
            let p = particle(seed);
            let speed = p.velocity.length();
            assert!((2.0 - 1e-4..5.0 + 1e-4).contains(&speed), "speed {speed}");
            assert!((30..50).contains(&p.max_age));
            assert!((2.0..4.0).contains(&p.size));
            assert_eq!(p.age, 0);
            assert_eq!(p.opacity, 1.0);
            assert_eq!(p.position, pt2(10.0, 20.0));
        }
    }

    #[test]
    fn update_moves_damps_and_shrinks() {
        let mut p = particle(7);
        let start_velocity = p.velocity;
        let start_size = p.size;

        update_particle(&mut p);

        assert_eq!(p.age, 1);
        assert_eq!(p.position, pt2(10.0, 20.0) + start_velocity);
        assert!((p.velocity - start_velocity * 0.98).length() < 1e-6);
        assert!((p.size - start_size * 0.99).abs() < 1e-6);
    }

    #[test]
    fn opacity_falls_monotonically_to_zero() {
        let mut p = particle(11);
        let mut previous = p.opacity;

        while !p.is_expired() {
            update_particle(&mut p);
            assert!(p.opacity <= previous);
            previous = p.opacity;
        }

        assert_eq!(p.age, p.max_age);
        assert_eq!(p.opacity, 0.0);
    }
}
