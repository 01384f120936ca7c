/*
 * Renderer Module
 *
 * This module paints the simulation state. It is a read-only projection:
 * nothing here mutates worms or particles.
 *
 * Draw order per frame:
 * - clear to the theme background
 * - live worms: a glow halo and a filled disc per segment, fading from head
 *   to tail, plus a stroke through all segment centres
 * - death particles: a glow and a filled disc each
 *
 * Canvas 2D shadow blur has no nannou equivalent, so glow is drawn as a few
 * concentric translucent discs spanning the blur radius. In dark mode the
 * effect layer composites additively, which gives the same "screen"-like
 * brightening against the dark background.
 */

use nannou::prelude::*;
use nannou::wgpu;

use crate::app::Model;
use crate::canvas::Canvas;
use crate::palette::{bottom_fade, ThemeStyle};
use crate::particle::DeathParticle;
use crate::simulation::SimulationState;
use crate::ui;
use crate::worm::{Worm, SEGMENT_COUNT};

pub const VISIBILITY_FLOOR: f32 = 0.01;
const GLOW_LAYERS: usize = 4;
const HALO_GROWTH: f32 = 2.0;
const STROKE_WEIGHT: f32 = 2.0;
const STROKE_OPACITY: f32 = 0.7;
const HEAD_SIZE: f32 = 4.0;
const TAIL_SIZE: f32 = 1.0;
const SIZE_FALLOFF: f32 = 0.2;

const ADDITIVE: wgpu::BlendComponent = wgpu::BlendComponent {
    src_factor: wgpu::BlendFactor::SrcAlpha,
    dst_factor: wgpu::BlendFactor::One,
    operation: wgpu::BlendOperation::Add,
};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let style = ThemeStyle::for_theme(model.params.dark_mode);

    draw.background().color(style.background);

    let effect = if style.additive_blend {
        draw.color_blend(ADDITIVE)
    } else {
        draw.clone()
    };
    draw_scene(&effect, &model.state, &model.canvas, &style);

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, model.canvas.rect, model.params.dark_mode);
    }

    // A surface that cannot be drawn to skips this frame and tries again next frame
    if let Err(err) = draw.to_frame(app, &frame) {
        if !model.render_failed.replace(true) {
            log::warn!("skipping frame, drawing surface unavailable: {:?}", err);
        }
        return;
    }
    if model.render_failed.replace(false) {
        log::info!("drawing surface available again");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::warn!("failed to draw control panel: {:?}", err);
    }
}

/// Draw every live worm, then every particle.
pub fn draw_scene(draw: &Draw, state: &SimulationState, canvas: &Canvas, style: &ThemeStyle) {
    for worm in &state.worms {
        draw_worm(draw, worm, canvas, style);
    }
    for particle in &state.particles {
        draw_particle(draw, particle, canvas, style);
    }
}

pub fn draw_worm(draw: &Draw, worm: &Worm, canvas: &Canvas, style: &ThemeStyle) {
    if !worm.alive {
        return;
    }
    let height = canvas.size().y;
    let mask = |p: Point2| bottom_fade(p.y, height) * style.canvas_opacity;

    for (i, segment) in worm.segments.iter().enumerate() {
        let opacity = segment_opacity(i, style.base_opacity);
        if opacity <= VISIBILITY_FLOOR {
            continue;
        }
        let opacity = opacity * mask(*segment);
        let size = segment_size(i);
        let at = canvas.to_screen(*segment);

        draw_glow(
            draw,
            at,
            size + HALO_GROWTH,
            style.worm_glow_blur,
            worm.color,
            opacity * style.halo_opacity,
        );
        draw.ellipse()
            .xy(at)
            .radius(size)
            .color(with_alpha(worm.color, opacity));
    }

    // Nothing to stroke until the body has stretched out
    if worm.segments.windows(2).all(|pair| pair[0] == pair[1]) {
        return;
    }

    let stroke_alpha = STROKE_OPACITY * style.base_opacity;
    let glow_alpha = stroke_alpha / GLOW_LAYERS as f32;
    let mask = &mask;
    let points = |alpha: f32| {
        worm.segments
            .iter()
            .map(move |s| (canvas.to_screen(*s), with_alpha(worm.color, alpha * mask(*s))))
    };

    draw.polyline()
        .weight(STROKE_WEIGHT + style.stroke_glow_blur)
        .join_round()
        .caps_round()
        .points_colored(points(glow_alpha));
    draw.polyline()
        .weight(STROKE_WEIGHT)
        .join_round()
        .caps_round()
        .points_colored(points(stroke_alpha));
}

pub fn draw_particle(draw: &Draw, particle: &DeathParticle, canvas: &Canvas, style: &ThemeStyle) {
    let opacity = particle.opacity
        * style.particle_opacity
        * bottom_fade(particle.position.y, canvas.size().y)
        * style.canvas_opacity;
    if opacity <= VISIBILITY_FLOOR {
        return;
    }
    let at = canvas.to_screen(particle.position);

    draw_glow(draw, at, particle.size, style.particle_glow_blur, particle.color, opacity);
    draw.ellipse()
        .xy(at)
        .radius(particle.size)
        .color(with_alpha(particle.color, opacity));
}

// Concentric discs from `radius` out to `radius + blur`, outermost first
fn draw_glow(draw: &Draw, at: Point2, radius: f32, blur: f32, color: Rgb<u8>, alpha: f32) {
    let layer_alpha = alpha / (GLOW_LAYERS + 1) as f32;
    for layer in (0..=GLOW_LAYERS).rev() {
        let spread = blur * layer as f32 / GLOW_LAYERS as f32;
        draw.ellipse()
            .xy(at)
            .radius(radius + spread)
            .color(with_alpha(color, layer_alpha));
    }
}

/// Opacity of segment `index`, fading linearly from head to tail.
pub fn segment_opacity(index: usize, base_opacity: f32) -> f32 {
    (1.0 - index as f32 / SEGMENT_COUNT as f32) * base_opacity
}

/// Radius of segment `index`, shrinking from the head to a minimum at the tail.
pub fn segment_size(index: usize) -> f32 {
    (HEAD_SIZE - index as f32 * SIZE_FALLOFF).max(TAIL_SIZE)
}

fn with_alpha(color: Rgb<u8>, alpha: f32) -> Srgba {
    srgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_opacity_fades_head_to_tail() {
        assert_eq!(segment_opacity(0, 1.0), 1.0);
        assert!((segment_opacity(6, 1.0) - 0.5).abs() < 1e-6);
        assert!((segment_opacity(0, 0.8) - 0.8).abs() < 1e-6);

        for i in 1..SEGMENT_COUNT {
            assert!(segment_opacity(i, 1.0) < segment_opacity(i - 1, 1.0));
            assert!(segment_opacity(i, 0.8) > VISIBILITY_FLOOR);
        }
    }

    #[test]
    fn segment_size_shrinks_to_minimum() {
        assert_eq!(segment_size(0), 4.0);
        assert!((segment_size(5) - 3.0).abs() < 1e-6);
        assert!((segment_size(11) - 1.8).abs() < 1e-6);
        assert_eq!(segment_size(40), 1.0);
    }

    #[test]
    fn alpha_is_clamped() {
        let c = with_alpha(rgb(255, 0, 0), 1.5);
        assert_eq!(c.alpha, 1.0);
        assert_eq!(c.red, 1.0);
        let c = with_alpha(rgb(255, 0, 0), -0.5);
        assert_eq!(c.alpha, 0.0);
    }
}
