//! Special functions backing the quantile evaluations.

pub mod gamma;
pub mod normal;

pub use gamma::*;
pub use normal::*;
