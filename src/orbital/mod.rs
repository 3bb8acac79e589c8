//! Orbital kinematics module
//!
//! Fixed-rate circular orbit stepping and orbit polyline sampling.

pub mod orbit_path;
pub mod stepper;

pub use orbit_path::build_orbit;
pub use stepper::step;
