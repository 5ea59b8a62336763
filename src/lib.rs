//! `pore-diameter` library crate.
//!
//! Computes pore diameters for pore-network models of porous materials:
//!
//! - from per-pore seeds, through the quantile function of a named pore size
//!   distribution (`sphere`, `sphere_from_radius`)
//! - from per-pore volumes, as the equivalent-sphere diameter (`voronoi`)
//!
//! Inputs are read from a [`network::PoreData`] container; results are returned
//! as plain arrays and never written back unless the caller asks for it.

pub mod distribution;
pub mod error;
pub mod math;
pub mod models;
pub mod network;

pub use distribution::{BUILTIN_REGISTRY, DistributionRegistry, DistributionSpec, Family, Quantile};
pub use error::{PoreError, PoreResult};
pub use models::{
    DiameterOptions, PoreDiameterModel, sphere, sphere_from_radius, sphere_from_radius_with,
    sphere_with, voronoi,
};
pub use network::{PoreData, PoreNetwork, PoreSelection};
