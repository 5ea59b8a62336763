//! Read-only access to per-pore arrays.

use crate::error::{PoreError, PoreResult};
use crate::network::PoreSelection;

/// A container of named per-pore arrays, indexed consistently across keys.
///
/// Models only ever read through this trait; they never write back.
pub trait PoreData {
    /// Number of pores in the container.
    fn pore_count(&self) -> usize;

    /// Numeric array stored under `key`, if any.
    fn array(&self, key: &str) -> Option<&[f64]>;

    /// Boolean label stored under `key`, if any.
    fn label(&self, key: &str) -> Option<&[bool]>;

    /// Numeric array under `key`, verified to hold one value per pore.
    fn pore_array(&self, key: &str) -> PoreResult<&[f64]> {
        let values = self
            .array(key)
            .ok_or_else(|| PoreError::MissingArray { key: key.to_string() })?;
        if values.len() != self.pore_count() {
            return Err(PoreError::dimension_mismatch(key, self.pore_count(), values.len()));
        }
        Ok(values)
    }

    /// Indices of the pores matched by `selection`.
    fn pores(&self, selection: &PoreSelection) -> PoreResult<Vec<usize>> {
        selection.resolve(self)
    }
}
