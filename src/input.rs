/*
 * Input Module
 *
 * This module handles window events for the worm effect. Handlers are cheap
 * and synchronous; they run between frames and may fire many times (or not
 * at all) between two updates.
 *
 * Features:
 * - Pointer and touch moves run the collision pass immediately
 * - Resize events refresh the canvas geometry
 * - Keyboard shortcuts for the theme, the control panel and resets
 */

use log::{debug, info};
use nannou::prelude::*;

use crate::app::Model;
use crate::canvas::Canvas;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    pointer_moved(model, pos);
}

// Touch moves count as pointer moves
pub fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    pointer_moved(model, touch.position);
}

fn pointer_moved(model: &mut Model, window_pos: Point2) {
    let pointer = model.canvas.from_screen(window_pos);
    model.state.pointer_moved(pointer, &mut rand::thread_rng());
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    debug!("canvas resized to {:.0}x{:.0}", size.x, size.y);
    model.canvas = Canvas::new(Rect::from_w_h(size.x, size.y));
    model.state.resize(size);
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // Picked up as a theme flip by the next update
        Key::T => model.params.dark_mode = !model.params.dark_mode,
        Key::H => model.params.show_controls = !model.params.show_controls,
        Key::R => model.reset_requested = true,
        _ => {}
    }
}

pub fn closed(_app: &App, model: &mut Model) {
    info!(
        "window closed after {} steps, {} worms caught",
        model.state.steps, model.state.kills
    );
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
