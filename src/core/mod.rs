//! Core module
//!
//! Coordinate conversion, configuration and wall-clock helpers shared by
//! every plugin.

pub mod config;
pub mod coordinates;
pub mod time;

pub use config::SimulationConfig;
