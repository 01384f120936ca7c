/*
 * UI Module
 *
 * This module contains the nannou_egui control panel and the on-canvas
 * debug overlay. The panel is the theme signal source for the effect: its
 * "Dark mode" checkbox flips the same flag the T key does. Change detection
 * itself lives in EffectParams.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::EffectParams;

// Update the UI and return whether the worms should be reset
pub fn update_ui(egui: &mut Egui, params: &mut EffectParams, debug_info: &DebugInfo) -> bool {
    let mut should_reset = false;

    let ctx = egui.begin_frame();
    if !params.show_controls {
        return false;
    }

    egui::Window::new("Worm Effect")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.checkbox(&mut params.dark_mode, "Dark mode");

            ui.collapsing("Worms", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.particle_count, EffectParams::get_particle_count_range())
                        .text("Target population"),
                );
                ui.add(egui::Slider::new(&mut params.speed, EffectParams::get_speed_range()).text("Base speed"));

                if ui.button("Reset Worms").clicked() {
                    should_reset = true;
                }

                let source = if params.colors.is_some() { "custom" } else { "theme" };
                ui.label(format!("Palette: {} ({} colors)", source, params.palette().len()));
            });

            ui.collapsing("Stats", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Live worms: {}", debug_info.live_worms));
                ui.label(format!("Particles: {}", debug_info.particles));
                ui.label(format!("Worms caught: {}", debug_info.kills));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Overlay");
            ui.separator();
            ui.label("T: toggle theme   H: hide panel   R: reset");
        });

    should_reset
}

// Draw debug information on the canvas
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    dark_mode: bool,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let text_x = window_rect.right() - margin - 80.0;
    let text_y = window_rect.top() - margin;
    let color = if dark_mode { nannou::color::WHITE } else { nannou::color::BLACK };

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Worms: {}", debug_info.live_worms),
        format!("Particles: {}", debug_info.particles),
        format!("Caught: {}", debug_info.kills),
        format!("Steps: {}", debug_info.steps),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text).x_y(text_x, y).color(color).font_size(14);
    }
}
