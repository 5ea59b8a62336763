//! Pore diameter models.
//!
//! - [`sphere`]: diameter is the seed's quantile in the pore size distribution
//! - [`sphere_from_radius`]: as `sphere`, but the distribution describes radius
//! - [`voronoi`]: equivalent-sphere diameter from a precomputed pore volume
//!
//! All three read from a [`PoreData`] container, return a fresh array aligned
//! with the selected pores, and either produce every value or fail.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distribution::{BUILTIN_REGISTRY, DistributionRegistry, DistributionSpec};
use crate::error::{PoreError, PoreResult};
use crate::network::{PoreData, PoreSelection, SEED_KEY, VOLUME_KEY};

/// Per-call options: where to read inputs and which pores to evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiameterOptions {
    /// Array holding seeds in `[0, 1)`.
    pub seed_key: String,
    /// Array holding pore volumes.
    pub volume_key: String,
    pub pores: PoreSelection,
}

impl Default for DiameterOptions {
    fn default() -> Self {
        Self {
            seed_key: SEED_KEY.to_string(),
            volume_key: VOLUME_KEY.to_string(),
            pores: PoreSelection::All,
        }
    }
}

impl DiameterOptions {
    pub fn seed_key(mut self, key: impl Into<String>) -> Self {
        self.seed_key = key.into();
        self
    }

    pub fn volume_key(mut self, key: impl Into<String>) -> Self {
        self.volume_key = key.into();
        self
    }

    pub fn pores(mut self, pores: PoreSelection) -> Self {
        self.pores = pores;
        self
    }
}

/// Diameter from seed via the quantile of `psd`, using the builtin families.
pub fn sphere<D: PoreData + ?Sized>(
    data: &D,
    psd: &DistributionSpec,
    options: &DiameterOptions,
) -> PoreResult<Vec<f64>> {
    sphere_with(&BUILTIN_REGISTRY, data, psd, options)
}

/// [`sphere`] resolving `psd` against a caller-supplied registry.
pub fn sphere_with<D: PoreData + ?Sized>(
    registry: &DistributionRegistry,
    data: &D,
    psd: &DistributionSpec,
    options: &DiameterOptions,
) -> PoreResult<Vec<f64>> {
    seeded_diameter(registry, data, psd, options, 1.0)
}

/// Diameter as twice the seed's quantile, for distributions of pore radius.
pub fn sphere_from_radius<D: PoreData + ?Sized>(
    data: &D,
    psd: &DistributionSpec,
    options: &DiameterOptions,
) -> PoreResult<Vec<f64>> {
    sphere_from_radius_with(&BUILTIN_REGISTRY, data, psd, options)
}

/// [`sphere_from_radius`] resolving `psd` against a caller-supplied registry.
pub fn sphere_from_radius_with<D: PoreData + ?Sized>(
    registry: &DistributionRegistry,
    data: &D,
    psd: &DistributionSpec,
    options: &DiameterOptions,
) -> PoreResult<Vec<f64>> {
    seeded_diameter(registry, data, psd, options, 2.0)
}

/// Shared seed → size path; `multiplier` converts the sampled size to a
/// diameter (1 for diameter distributions, 2 for radius distributions).
fn seeded_diameter<D: PoreData + ?Sized>(
    registry: &DistributionRegistry,
    data: &D,
    psd: &DistributionSpec,
    options: &DiameterOptions,
    multiplier: f64,
) -> PoreResult<Vec<f64>> {
    let dist = registry.resolve(psd)?;
    let seeds = data.pore_array(&options.seed_key)?;
    let pores = data.pores(&options.pores)?;

    let mut out = Vec::with_capacity(pores.len());
    for &i in &pores {
        let seed = seeds[i];
        if !(0.0..1.0).contains(&seed) {
            return Err(PoreError::invalid_input(
                &options.seed_key,
                i,
                seed,
                "seed must lie in [0, 1)",
            ));
        }

        let diameter = multiplier * dist.quantile(seed);
        if diameter.is_nan() {
            return Err(PoreError::invalid_parameter(
                &psd.name,
                format!("quantile is undefined at seed {seed} (pore {i})"),
            ));
        }
        if !(diameter.is_finite() && diameter >= 0.0) {
            return Err(PoreError::invalid_input(
                &options.seed_key,
                i,
                seed,
                format!("maps to diameter {diameter} under '{}', outside the physical range", psd.name),
            ));
        }
        out.push(diameter);
    }

    debug!(
        distribution = %psd.name,
        seed_key = %options.seed_key,
        multiplier,
        pores = out.len(),
        "computed seeded pore diameters"
    );
    Ok(out)
}

/// Equivalent-sphere diameter `∛(6V/π)` from the pore volume array.
pub fn voronoi<D: PoreData + ?Sized>(data: &D, options: &DiameterOptions) -> PoreResult<Vec<f64>> {
    let volumes = data.pore_array(&options.volume_key)?;
    let pores = data.pores(&options.pores)?;

    let mut out = Vec::with_capacity(pores.len());
    for &i in &pores {
        let volume = volumes[i];
        if !(volume.is_finite() && volume >= 0.0) {
            return Err(PoreError::invalid_input(
                &options.volume_key,
                i,
                volume,
                "volume must be finite and >= 0",
            ));
        }
        out.push(equivalent_sphere_diameter(volume));
    }

    debug!(volume_key = %options.volume_key, pores = out.len(), "computed equivalent-sphere diameters");
    Ok(out)
}

/// Diameter of the sphere with volume `volume`.
pub fn equivalent_sphere_diameter(volume: f64) -> f64 {
    (6.0 * volume / PI).cbrt()
}
