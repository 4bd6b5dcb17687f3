//! Event types and observers used by the engine.
//!
//! Submodules:
//! - [`frameready`] – render notification fired after every logical step
//! - [`switchdebug`] – toggle debug output on/off
pub mod frameready;
pub mod switchdebug;
