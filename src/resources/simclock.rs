//! Fixed-timestep simulation clock.
//!
//! The external frame driver calls [`SimulationClock::tick`] as often as it
//! likes, passing the current time in milliseconds. The clock answers whether
//! enough time has passed to advance the simulation by exactly one logical
//! step. The sub-interval remainder is carried into the next tick, so the
//! logical rate does not drift with the driver's rate.
//!
//! Time is always injected; the clock never reads a wall clock itself.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::error::SimError;

/// Run state of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    fps: u32,
    interval_ms: f64,
    last_tick_ms: f64,
    start_ms: f64,
    frame: u32,
    state: RunState,
}

impl SimulationClock {
    /// Create a stopped clock running at `fps` logical steps per second.
    pub fn new(fps: u32) -> Result<Self, SimError> {
        if fps == 0 {
            return Err(SimError::InvalidFps(fps));
        }
        Ok(Self {
            fps,
            interval_ms: 1000.0 / fps as f64,
            last_tick_ms: 0.0,
            start_ms: 0.0,
            frame: 0,
            state: RunState::Stopped,
        })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Logical frame within the current second, cycling `1..=fps`.
    ///
    /// Zero until the first step after [`SimulationClock::start`].
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Reset timestamps to `now_ms` and enter [`RunState::Running`].
    pub fn start(&mut self, now_ms: f64) {
        self.last_tick_ms = now_ms;
        self.start_ms = now_ms;
        self.frame = 0;
        self.state = RunState::Running;
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Toggle between running and paused, keeping timestamps.
    ///
    /// Returns `false` and changes nothing when the clock is stopped.
    pub fn pause(&mut self) -> bool {
        match self.state {
            RunState::Running => self.state = RunState::Paused,
            RunState::Paused => self.state = RunState::Running,
            RunState::Stopped => return false,
        }
        true
    }

    /// Decide whether a logical step is due at `now_ms`.
    ///
    /// Returns `false` without touching any state when the clock is not
    /// running or less than one interval has elapsed since the last step.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        let elapsed = now_ms - self.last_tick_ms;
        if elapsed < self.interval_ms {
            return false;
        }
        self.last_tick_ms = now_ms - (elapsed % self.interval_ms);
        self.advance_frame();
        true
    }

    /// Count a step that bypassed the interval check.
    pub fn force_step(&mut self) {
        self.advance_frame();
    }

    fn advance_frame(&mut self) {
        self.frame = self.frame % self.fps + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_new_rejects_zero_fps() {
        assert!(matches!(
            SimulationClock::new(0),
            Err(SimError::InvalidFps(0))
        ));
    }

    #[test]
    fn test_interval_is_positive() {
        let clock = SimulationClock::new(60).unwrap();
        assert!((clock.interval_ms() - 1000.0 / 60.0).abs() < EPSILON);
        assert_eq!(clock.state(), RunState::Stopped);
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut clock = SimulationClock::new(60).unwrap();
        assert!(!clock.tick(10_000.0));
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn test_tick_drops_frames_before_interval() {
        let mut clock = SimulationClock::new(10).unwrap();
        clock.start(1000.0);
        assert!(!clock.tick(1050.0));
        assert!((clock.last_tick_ms() - 1000.0).abs() < EPSILON);
        assert!(clock.tick(1100.0));
        assert!((clock.last_tick_ms() - 1100.0).abs() < EPSILON);
    }

    #[test]
    fn test_tick_carries_remainder() {
        let mut clock = SimulationClock::new(10).unwrap();
        clock.start(0.0);
        // 130ms elapsed: one step, the 30ms remainder carries forward
        assert!(clock.tick(130.0));
        assert!((clock.last_tick_ms() - 100.0).abs() < EPSILON);
        assert!(clock.tick(200.0));
        assert!((clock.last_tick_ms() - 200.0).abs() < EPSILON);
    }

    #[test]
    fn test_long_gap_produces_single_step() {
        let mut clock = SimulationClock::new(10).unwrap();
        clock.start(0.0);
        assert!(clock.tick(550.0));
        assert_eq!(clock.frame(), 1);
        assert!((clock.last_tick_ms() - 500.0).abs() < EPSILON);
    }

    #[test]
    fn test_frame_cycles_through_fps() {
        let mut clock = SimulationClock::new(2).unwrap();
        clock.start(0.0);
        let frames: Vec<u32> = (1..=5)
            .map(|i| {
                assert!(clock.tick(i as f64 * 500.0));
                clock.frame()
            })
            .collect();
        assert_eq!(frames, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_pause_toggles_without_resetting_timestamps() {
        let mut clock = SimulationClock::new(60).unwrap();
        assert!(!clock.pause());
        assert_eq!(clock.state(), RunState::Stopped);

        clock.start(500.0);
        assert!(clock.pause());
        assert_eq!(clock.state(), RunState::Paused);
        assert!(!clock.tick(10_000.0));
        assert!((clock.last_tick_ms() - 500.0).abs() < EPSILON);
        assert!((clock.start_ms() - 500.0).abs() < EPSILON);

        assert!(clock.pause());
        assert!(clock.is_running());
    }

    #[test]
    fn test_restart_resets_frame_and_timestamps() {
        let mut clock = SimulationClock::new(10).unwrap();
        clock.start(0.0);
        assert!(clock.tick(100.0));
        clock.stop();
        assert!(!clock.tick(1000.0));
        clock.start(2000.0);
        assert_eq!(clock.frame(), 0);
        assert!((clock.start_ms() - 2000.0).abs() < EPSILON);
        assert!(clock.is_running());
    }
}
