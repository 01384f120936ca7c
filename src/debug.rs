/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation counters displayed in the control panel and, when enabled,
 * in the on-canvas overlay.
 */

use std::time::Duration;

use crate::simulation::SimulationState;

// Debug information to display
#[derive(Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub live_worms: usize,
    pub particles: usize,
    pub kills: u64,
    pub steps: u64,
}

impl DebugInfo {
    // Copy the counters out of the simulation after a step
    pub fn record(&mut self, state: &SimulationState) {
        self.live_worms = state.live_worms();
        self.particles = state.particles.len();
        self.kills = state.kills;
        self.steps = state.steps;
    }
}
