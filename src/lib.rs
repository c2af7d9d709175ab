//! Observer based state space control for LTI plants with compile-time dimensions.
//!
//! A [`Controller`] estimates the plant state with a Luenberger style observer,
//! applies state feedback, feeds the reference forward through a gain derived from
//! the pseudo-inverse of `[A B; C D]` and accumulates integral action against
//! constant disturbances. [`Simulation`] integrates the same model open loop so a
//! controller can be exercised without hardware. Nothing allocates.
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate nalgebra as na;

pub mod controller;
pub mod error;
pub mod gains;
pub mod linsystheory;
pub mod models;
pub mod simulation;

pub use controller::Controller;
pub use error::ControlError;
pub use gains::Gains;
pub use linsystheory::PseudoInverse;
pub use models::{LinearSystem, Model};
pub use simulation::Simulation;
