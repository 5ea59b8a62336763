//! Builtin continuous distribution families.
//!
//! Names follow the scipy.stats convention that pore-network inputs are
//! usually written against (`weibull_min`, `lognorm`, ...). Every family is a
//! location/scale family with at most one shape parameter:
//!
//! `Q(p) = loc + scale · Q_standard(p; shape)`

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::distribution::Quantile;
use crate::error::{PoreError, PoreResult};
use crate::math::{inverse_regularized_lower_gamma, standard_normal_quantile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Norm,
    Uniform,
    Expon,
    Logistic,
    Cauchy,
    Rayleigh,
    Halfnorm,
    GumbelR,
    GumbelL,
    Lognorm,
    WeibullMin,
    WeibullMax,
    Gamma,
    Pareto,
    Triang,
}

impl Family {
    pub const ALL: [Family; 15] = [
        Family::Norm,
        Family::Uniform,
        Family::Expon,
        Family::Logistic,
        Family::Cauchy,
        Family::Rayleigh,
        Family::Halfnorm,
        Family::GumbelR,
        Family::GumbelL,
        Family::Lognorm,
        Family::WeibullMin,
        Family::WeibullMax,
        Family::Gamma,
        Family::Pareto,
        Family::Triang,
    ];

    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            Family::Norm => "norm",
            Family::Uniform => "uniform",
            Family::Expon => "expon",
            Family::Logistic => "logistic",
            Family::Cauchy => "cauchy",
            Family::Rayleigh => "rayleigh",
            Family::Halfnorm => "halfnorm",
            Family::GumbelR => "gumbel_r",
            Family::GumbelL => "gumbel_l",
            Family::Lognorm => "lognorm",
            Family::WeibullMin => "weibull_min",
            Family::WeibullMax => "weibull_max",
            Family::Gamma => "gamma",
            Family::Pareto => "pareto",
            Family::Triang => "triang",
        }
    }

    /// Additional names the registry accepts for this family.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Family::Norm => &["normal"],
            Family::Expon => &["exponential"],
            Family::Lognorm => &["lognormal"],
            Family::WeibullMin => &["weibull"],
            Family::Triang => &["triangular"],
            _ => &[],
        }
    }

    /// Look a family up by canonical name or alias.
    pub fn from_name(name: &str) -> Option<Self> {
        Family::ALL
            .into_iter()
            .find(|f| f.name() == name || f.aliases().contains(&name))
    }

    /// Name of the shape parameter, or `None` for shapeless families.
    pub fn shape_name(self) -> Option<&'static str> {
        match self {
            Family::Lognorm => Some("s"),
            Family::WeibullMin | Family::WeibullMax | Family::Triang => Some("c"),
            Family::Gamma => Some("a"),
            Family::Pareto => Some("b"),
            _ => None,
        }
    }

    fn shape_is_valid(self, shape: f64) -> bool {
        match self {
            Family::Triang => (0.0..=1.0).contains(&shape),
            _ => shape > 0.0,
        }
    }
}

/// A validated member of a builtin family.
#[derive(Debug, Clone, PartialEq)]
pub struct Parametric {
    family: Family,
    shape: f64,
    loc: f64,
    scale: f64,
}

impl Parametric {
    pub fn new(family: Family, shape: Option<f64>, loc: f64, scale: f64) -> PoreResult<Self> {
        let fail = |msg: String| Err(PoreError::invalid_parameter(family.name(), msg));

        if !loc.is_finite() {
            return fail(format!("loc must be finite, got {loc}"));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return fail(format!("scale must be finite and > 0, got {scale}"));
        }

        let shape = match (family.shape_name(), shape) {
            (None, None) => f64::NAN,
            (None, Some(s)) => return fail(format!("family takes no shape parameter, got {s}")),
            (Some(name), None) => return fail(format!("missing shape parameter '{name}'")),
            (Some(name), Some(s)) => {
                if !(s.is_finite() && family.shape_is_valid(s)) {
                    return fail(format!("shape '{name}' out of domain, got {s}"));
                }
                s
            }
        };

        Ok(Self {
            family,
            shape,
            loc,
            scale,
        })
    }

    /// Quantile of the standardized (loc = 0, scale = 1) member.
    fn standard_quantile(&self, p: f64) -> f64 {
        let k = self.shape;
        match self.family {
            Family::Norm => standard_normal_quantile(p),
            Family::Uniform => p,
            Family::Expon => -(-p).ln_1p(),
            Family::Logistic => (p / (1.0 - p)).ln(),
            Family::Cauchy => (PI * (p - 0.5)).tan(),
            Family::Rayleigh => (-2.0 * (-p).ln_1p()).sqrt(),
            Family::Halfnorm => standard_normal_quantile(0.5 * (1.0 + p)),
            Family::GumbelR => -(-p.ln()).ln(),
            Family::GumbelL => (-(-p).ln_1p()).ln(),
            Family::Lognorm => (k * standard_normal_quantile(p)).exp(),
            Family::WeibullMin => (-(-p).ln_1p()).powf(1.0 / k),
            Family::WeibullMax => -(-p.ln()).powf(1.0 / k),
            Family::Gamma => inverse_regularized_lower_gamma(k, p),
            Family::Pareto => (1.0 - p).powf(-1.0 / k),
            Family::Triang => {
                if p < k {
                    (k * p).sqrt()
                } else {
                    1.0 - ((1.0 - k) * (1.0 - p)).sqrt()
                }
            }
        }
    }

    fn standard_support_lower(&self) -> f64 {
        match self.family {
            Family::Norm
            | Family::Logistic
            | Family::Cauchy
            | Family::GumbelR
            | Family::GumbelL
            | Family::WeibullMax => f64::NEG_INFINITY,
            Family::Uniform
            | Family::Expon
            | Family::Rayleigh
            | Family::Halfnorm
            | Family::Lognorm
            | Family::WeibullMin
            | Family::Gamma
            | Family::Triang => 0.0,
            Family::Pareto => 1.0,
        }
    }
}

impl Quantile for Parametric {
    fn quantile(&self, p: f64) -> f64 {
        if p.is_nan() || !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        self.loc + self.scale * self.standard_quantile(p)
    }

    fn support_lower(&self) -> f64 {
        self.loc + self.scale * self.standard_support_lower()
    }
}
