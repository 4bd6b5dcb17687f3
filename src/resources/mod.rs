//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles debug output
//! - `gameconfig` – settings loaded from an INI file
//! - `signals` – set of currently held input signals
//! - `simclock` – fixed-timestep clock and run state
//! - `worldgrid` – square matrix of integer cells and the logical extent
pub mod debugmode;
pub mod gameconfig;
pub mod signals;
pub mod simclock;
pub mod worldgrid;
