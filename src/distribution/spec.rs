//! Distribution specification as it appears in model configuration.

use serde::{Deserialize, Serialize};

/// `(name, shape, loc, scale)` identifying a family and its parameters.
///
/// `shape` is optional because several families (e.g. `norm`, `uniform`) have
/// none. `loc` and `scale` follow the usual location/scale convention:
/// `Q(p) = loc + scale · Q_standard(p)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<f64>,
    #[serde(default)]
    pub loc: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl DistributionSpec {
    /// Spec for a family without a shape parameter.
    pub fn new(name: impl Into<String>, loc: f64, scale: f64) -> Self {
        Self {
            name: name.into(),
            shape: None,
            loc,
            scale,
        }
    }

    /// Spec for a one-shape family.
    pub fn with_shape(name: impl Into<String>, shape: f64, loc: f64, scale: f64) -> Self {
        Self {
            name: name.into(),
            shape: Some(shape),
            loc,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loc_and_scale_default_when_omitted() {
        let spec: DistributionSpec = serde_json::from_str(r#"{"name": "weibull_min", "shape": 1.5}"#).unwrap();
        assert_eq!(spec, DistributionSpec::with_shape("weibull_min", 1.5, 0.0, 1.0));
    }
}
