//! Occupancy-agnostic move geometry.

pub mod movement;
