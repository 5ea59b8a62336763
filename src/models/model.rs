//! Configurable pore diameter model.
//!
//! Geometry setups usually pick the diameter model from configuration rather
//! than code. [`PoreDiameterModel`] is the serialisable form of that choice:
//!
//! ```json
//! { "model": "sphere", "psd": { "name": "weibull_min", "shape": 2.5, "loc": 1e-6, "scale": 5e-6 } }
//! { "model": "voronoi", "options": { "volume_key": "pore.volume" } }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distribution::{BUILTIN_REGISTRY, DistributionRegistry, DistributionSpec};
use crate::error::{PoreError, PoreResult};
use crate::models::{DiameterOptions, sphere_from_radius_with, sphere_with, voronoi};
use crate::network::{DIAMETER_KEY, PoreData, PoreNetwork};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PoreDiameterModel {
    Sphere {
        psd: DistributionSpec,
        #[serde(default)]
        options: DiameterOptions,
    },
    SphereFromRadius {
        psd: DistributionSpec,
        #[serde(default)]
        options: DiameterOptions,
    },
    Voronoi {
        #[serde(default)]
        options: DiameterOptions,
    },
}

impl PoreDiameterModel {
    /// Parse a model from its JSON configuration.
    pub fn from_json(text: &str) -> PoreResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| PoreError::configuration(format!("invalid pore diameter model: {e}")))
    }

    /// Model tag as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            PoreDiameterModel::Sphere { .. } => "sphere",
            PoreDiameterModel::SphereFromRadius { .. } => "sphere_from_radius",
            PoreDiameterModel::Voronoi { .. } => "voronoi",
        }
    }

    pub fn options(&self) -> &DiameterOptions {
        match self {
            PoreDiameterModel::Sphere { options, .. }
            | PoreDiameterModel::SphereFromRadius { options, .. }
            | PoreDiameterModel::Voronoi { options } => options,
        }
    }

    /// Evaluate against the builtin distribution families.
    pub fn compute<D: PoreData + ?Sized>(&self, data: &D) -> PoreResult<Vec<f64>> {
        self.compute_with(&BUILTIN_REGISTRY, data)
    }

    pub fn compute_with<D: PoreData + ?Sized>(
        &self,
        registry: &DistributionRegistry,
        data: &D,
    ) -> PoreResult<Vec<f64>> {
        match self {
            PoreDiameterModel::Sphere { psd, options } => sphere_with(registry, data, psd, options),
            PoreDiameterModel::SphereFromRadius { psd, options } => {
                sphere_from_radius_with(registry, data, psd, options)
            }
            PoreDiameterModel::Voronoi { options } => voronoi(data, options),
        }
    }

    /// Compute and store the result under `pore.diameter`.
    ///
    /// Pores outside the selection keep their previous diameter, or `NaN` if
    /// the network had none. Nothing is written if the computation fails.
    pub fn regenerate(&self, network: &mut PoreNetwork) -> PoreResult<()> {
        self.regenerate_with(&BUILTIN_REGISTRY, network)
    }

    /// [`regenerate`](Self::regenerate) resolving the psd against `registry`.
    pub fn regenerate_with(
        &self,
        registry: &DistributionRegistry,
        network: &mut PoreNetwork,
    ) -> PoreResult<()> {
        let values = self.compute_with(registry, &*network)?;
        let pores = network.pores(&self.options().pores)?;

        let mut diameters = network
            .array(DIAMETER_KEY)
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| vec![f64::NAN; network.pore_count()]);
        for (&i, value) in pores.iter().zip(values) {
            diameters[i] = value;
        }

        debug!(model = self.name(), pores = pores.len(), "regenerated pore diameters");
        network.insert(DIAMETER_KEY, diameters)
    }
}
