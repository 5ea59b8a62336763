//! Pore size distributions.
//!
//! A distribution is anything that can turn a seed (a rank in `[0, 1)`) into a
//! size through its quantile function. The registry maps family names to
//! constructors, so callers select a distribution by name from configuration
//! while the model code only ever sees `dyn Quantile`.

pub mod family;
pub mod registry;
pub mod spec;

pub use family::*;
pub use registry::*;
pub use spec::*;

/// A continuous distribution that can be evaluated through its inverse CDF.
pub trait Quantile: Send + Sync {
    /// Value `x` with `F(x) = p`. Non-decreasing in `p` and deterministic.
    fn quantile(&self, p: f64) -> f64;

    /// Lower bound of the support (`-∞` for unbounded families).
    fn support_lower(&self) -> f64;
}
