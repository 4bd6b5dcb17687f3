//! Simulation orchestrator.
//!
//! [`Engine`] owns the ECS world (clock, held signals, world grid, player
//! entity, optional debug flag) and the step schedule. External code drives
//! it with three kinds of calls:
//!
//! - lifecycle: [`Engine::start`], [`Engine::stop`], [`Engine::pause`],
//!   [`Engine::toggle_debug`]
//! - input: [`Engine::set_signal`], once per observed key-state change
//! - frames: [`Engine::tick`], once per external frame callback with the
//!   current time in milliseconds
//!
//! After every logical step a
//! [`FrameReadyEvent`](crate::events::frameready::FrameReadyEvent) is
//! triggered on the world; renderers observe it and read [`Engine::player`],
//! [`Engine::grid`] and [`Engine::status`].
//!
//! # Example
//! ```
//! use gridpulse::engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::new(60, 8)).unwrap();
//! engine.start(0.0).unwrap();
//! engine.set_signal("Right", true);
//! assert!(!engine.tick(10.0));
//! assert!(engine.tick(20.0));
//! assert!(engine.player().unwrap().position.x > 0.0);
//! ```

use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use serde::Serialize;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::{
    DEFAULT_FRICTION, DEFAULT_MASS, DEFAULT_MAX_VELOCITY, Direction, RigidBody, Velocity,
};
use crate::error::SimError;
use crate::events::frameready::FrameReadyEvent;
use crate::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use crate::resources::debugmode::DebugMode;
use crate::resources::signals::InputSignals;
use crate::resources::simclock::{RunState, SimulationClock};
use crate::resources::worldgrid::WorldGrid;
use crate::systems::inputcontroller::input_controller;
use crate::systems::movement::movement;
use crate::systems::status::status_line;
use crate::systems::time::advance_clock;

/// Settings an [`Engine`] is built from.
///
/// `grid_extent` is a plain number supplied by the caller; converting a
/// render surface into cells is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub fps: u32,
    pub grid_extent: i32,
    pub mass: f32,
    pub friction: f32,
    pub max_velocity: f32,
}

impl EngineConfig {
    /// Settings with the default player tuning.
    pub fn new(fps: u32, grid_extent: i32) -> Self {
        Self {
            fps,
            grid_extent,
            mass: DEFAULT_MASS,
            friction: DEFAULT_FRICTION,
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }

    /// Check the player tuning.
    ///
    /// `mass` and `friction` must be finite and non-negative, `max_velocity`
    /// finite and positive; anything else lets speed leave
    /// `[0, max_velocity]`.
    pub fn validate(&self) -> Result<(), SimError> {
        let checks = [
            ("mass", self.mass, self.mass >= 0.0),
            ("friction", self.friction, self.friction >= 0.0),
            ("max_velocity", self.max_velocity, self.max_velocity > 0.0),
        ];
        for (name, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(SimError::InvalidTuning { name, value });
            }
        }
        Ok(())
    }
}

/// Player state as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub position: MapPosition,
    pub velocity: Velocity,
    pub direction: Direction,
}

/// Read-only dump of everything a renderer or log consumer may show.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub state: RunState,
    pub fps: u32,
    pub frame: u32,
    pub debug: bool,
    pub signals: Vec<String>,
    pub player: Option<PlayerView>,
    pub grid: Vec<String>,
    pub status: String,
}

pub struct Engine {
    world: World,
    step: Schedule,
    config: EngineConfig,
    player: Option<Entity>,
}

impl Engine {
    /// Build a stopped engine.
    ///
    /// Fails when `config.fps` is zero or the player tuning is out of range.
    pub fn new(config: EngineConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut world = World::new();
        world.insert_resource(SimulationClock::new(config.fps)?);
        world.insert_resource(InputSignals::default());
        world.add_observer(switch_debug_observer);
        world.flush();

        let mut step = Schedule::default();
        step.add_systems((input_controller, movement).chain());

        Ok(Self {
            world,
            step,
            config,
            player: None,
        })
    }

    /// Change the grid size used by the next [`Engine::start`].
    pub fn set_grid_extent(&mut self, grid_extent: i32) {
        self.config.grid_extent = grid_extent;
    }

    /// (Re)initialize world and player and begin running.
    ///
    /// The previous grid and player are discarded. An invalid grid extent
    /// fails the whole call and leaves the engine as it was.
    pub fn start(&mut self, now_ms: f64) -> Result<(), SimError> {
        let grid = WorldGrid::new(self.config.grid_extent)?;

        if let Some(old) = self.player.take() {
            self.world.despawn(old);
        }
        self.world.insert_resource(grid);
        let player = self
            .world
            .spawn((
                Player,
                MapPosition::new(0.0, 0.0),
                RigidBody::with_physics(
                    self.config.mass,
                    self.config.friction,
                    self.config.max_velocity,
                ),
                InputControlled::default(),
            ))
            .id();
        self.player = Some(player);

        self.world.resource_mut::<InputSignals>().clear();
        self.world.resource_mut::<SimulationClock>().start(now_ms);
        info!(
            "Started: fps={}, grid {}x{}",
            self.config.fps, self.config.grid_extent, self.config.grid_extent
        );
        Ok(())
    }

    /// Halt ticking and forget held signals. World and player stay readable.
    pub fn stop(&mut self) {
        self.world.resource_mut::<SimulationClock>().stop();
        self.world.resource_mut::<InputSignals>().clear();
        info!("Stopped");
    }

    /// Toggle between running and paused.
    ///
    /// Either way exactly one step runs immediately with the signals held at
    /// that moment and a frame notification fires; held signals are cleared
    /// afterwards. Returns `false` and does nothing while stopped.
    pub fn pause(&mut self) -> bool {
        if !self.world.resource_mut::<SimulationClock>().pause() {
            warn!("Pause ignored: engine is stopped");
            return false;
        }
        self.world.resource_mut::<SimulationClock>().force_step();
        self.run_step();
        self.world.resource_mut::<InputSignals>().clear();
        debug!("Run state is now {:?}", self.run_state());
        true
    }

    /// Flip debug output on or off. Independent of the run state.
    pub fn toggle_debug(&mut self) {
        self.world.trigger(SwitchDebugEvent {});
        self.world.flush();
    }

    pub fn is_debug(&self) -> bool {
        self.world.contains_resource::<DebugMode>()
    }

    /// Record a key-state change from the input adapter.
    ///
    /// Takes effect on the next due tick.
    pub fn set_signal(&mut self, name: &str, active: bool) {
        self.world
            .resource_mut::<InputSignals>()
            .set_signal(name, active);
    }

    pub fn active_signals(&self) -> Vec<String> {
        self.world
            .resource::<InputSignals>()
            .active_signals()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Frame callback entry point.
    ///
    /// Returns `true` when a logical step ran (and a frame notification
    /// fired), `false` when the frame was dropped or the engine is not
    /// running. A dropped frame leaves every piece of state untouched.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !advance_clock(&mut self.world, now_ms) {
            return false;
        }
        self.run_step();
        true
    }

    fn run_step(&mut self) {
        self.step.run(&mut self.world);
        self.world.trigger(FrameReadyEvent {});
        self.world.flush();
    }

    pub fn run_state(&self) -> RunState {
        self.world.resource::<SimulationClock>().state()
    }

    pub fn clock(&self) -> &SimulationClock {
        self.world.resource::<SimulationClock>()
    }

    /// Current player state, `None` before the first start.
    pub fn player(&self) -> Option<PlayerView> {
        let entity = self.player?;
        let position = *self.world.get::<MapPosition>(entity)?;
        let body = self.world.get::<RigidBody>(entity)?;
        Some(PlayerView {
            position,
            velocity: body.velocity,
            direction: body.direction,
        })
    }

    pub fn grid(&self) -> Option<&WorldGrid> {
        self.world.get_resource::<WorldGrid>()
    }

    pub fn grid_mut(&mut self) -> Option<Mut<'_, WorldGrid>> {
        self.world.get_resource_mut::<WorldGrid>()
    }

    /// One-line summary for debug displays, computed on demand.
    pub fn status(&self) -> String {
        status_line(&self.world)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let clock = self.clock();
        EngineSnapshot {
            state: clock.state(),
            fps: clock.fps(),
            frame: clock.frame(),
            debug: self.is_debug(),
            signals: self.active_signals(),
            player: self.player(),
            grid: self.grid().map(WorldGrid::render).unwrap_or_default(),
            status: self.status(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access, e.g. to register a
    /// [`FrameReadyEvent`](crate::events::frameready::FrameReadyEvent) observer.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
