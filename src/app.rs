/*
 * Application Module
 *
 * This module defines the main application model and the per-frame driver
 * for the worm effect. nannou calls `update` once per display refresh and
 * `view` right after it; each update:
 * - re-reads the canvas size from the live window rectangle
 * - runs the control panel and re-seeds the entities when the theme flipped
 * - advances the simulation by one step
 */

use log::{info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;
use std::cell::Cell;
use std::sync::OnceLock;

use crate::canvas::Canvas;
use crate::debug::DebugInfo;
use crate::input::{closed, key_pressed, mouse_moved, raw_window_event, resized, touch};
use crate::params::EffectParams;
use crate::renderer::view;
use crate::simulation::{step, SimulationState, StepConfig};
use crate::ui;

const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 800);

// Parameters handed over from the command line before the event loop starts
static STARTUP_PARAMS: OnceLock<EffectParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub window_id: WindowId,
    pub state: SimulationState,
    pub params: EffectParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub canvas: Canvas,
    pub reset_requested: bool,
    pub render_failed: Cell<bool>,
}

impl Model {
    // Drop all entities and start over with the current palette
    pub fn reseed(&mut self) {
        self.state.reseed(self.params.palette());
    }
}

/// Run the effect until its window is closed.
pub fn run(params: EffectParams) {
    if STARTUP_PARAMS.set(params).is_err() {
        warn!("worm effect already configured, ignoring new parameters");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = STARTUP_PARAMS.get().cloned().unwrap_or_default();

    // Size the window at 80% of the primary monitor when there is one
    let (width, height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    let window_id = app
        .new_window()
        .title("Worm Effect")
        .size(width, height)
        .view(view)
        .mouse_moved(mouse_moved)
        .touch(touch)
        .resized(resized)
        .key_pressed(key_pressed)
        .closed(closed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create the effect window");

    let window = app.window(window_id).expect("Effect window missing right after creation");
    let egui = Egui::from_window(&window);
    let canvas = Canvas::new(window.rect());
    drop(window);

    let state = SimulationState::new(canvas.size(), params.palette());
    info!(
        "starting worm effect: {} mode, target population {}, speed {:.2}, {} palette colors",
        if params.dark_mode { "dark" } else { "light" },
        params.particle_count,
        params.speed,
        state.palette.len()
    );

    let mut model = Model {
        window_id,
        state,
        params,
        egui,
        debug_info: DebugInfo::default(),
        canvas,
        reset_requested: false,
        render_failed: Cell::new(false),
    };
    model.params.take_snapshot();
    model
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Nothing to drive until the window exists
    let Some(window) = app.window(model.window_id) else {
        return;
    };
    model.canvas = Canvas::new(window.rect());
    drop(window);
    model.state.resize(model.canvas.size());

    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    if ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info) {
        model.reset_requested = true;
    }

    // Theme flips (from the panel or the keyboard) restart the effect
    let (theme_changed, _) = model.params.detect_changes();
    if theme_changed {
        info!(
            "theme switched to {} mode, re-seeding",
            if model.params.dark_mode { "dark" } else { "light" }
        );
        model.reseed();
    } else if model.reset_requested {
        info!("resetting worms");
        model.reseed();
    }
    model.reset_requested = false;
    model.params.take_snapshot();

    let config = StepConfig {
        target_population: model.params.particle_count,
        base_speed: model.params.speed,
    };
    step(&mut model.state, &config, &mut rand::thread_rng());
    model.debug_info.record(&model.state);
}
