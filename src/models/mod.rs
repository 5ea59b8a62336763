//! Pore diameter models.
//!
//! Models are small, pure functions over a [`crate::network::PoreData`]
//! container; [`PoreDiameterModel`] selects one of them from configuration.

pub mod model;
pub mod pore_diameter;

pub use model::*;
pub use pore_diameter::*;
