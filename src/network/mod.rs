//! Per-pore data containers.
//!
//! Models read named per-pore arrays through the [`PoreData`] trait and select
//! which pores to evaluate with a [`PoreSelection`]. [`PoreNetwork`] is the
//! in-memory implementation; other containers only need to implement the trait.

pub mod data;
pub mod selection;
pub mod store;

pub use data::*;
pub use selection::*;
pub use store::*;

/// Label present on every network, covering all pores.
pub const ALL_LABEL: &str = "pore.all";

/// Conventional keys for the arrays the diameter models read and produce.
pub const SEED_KEY: &str = "pore.seed";
pub const VOLUME_KEY: &str = "pore.volume";
pub const DIAMETER_KEY: &str = "pore.diameter";
