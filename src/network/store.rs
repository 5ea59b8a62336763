//! In-memory pore network store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PoreError, PoreResult};
use crate::network::{ALL_LABEL, PoreData};

/// Named per-pore arrays and labels for a fixed number of pores.
///
/// Every stored array and label has exactly `pore_count` entries; this is
/// checked on insertion so that index `i` refers to the same pore across keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoreNetwork {
    pore_count: usize,
    #[serde(default)]
    arrays: BTreeMap<String, Vec<f64>>,
    #[serde(default)]
    labels: BTreeMap<String, Vec<bool>>,
}

impl PoreNetwork {
    /// Empty network of `pore_count` pores, labelled `pore.all`.
    pub fn new(pore_count: usize) -> Self {
        let mut labels = BTreeMap::new();
        labels.insert(ALL_LABEL.to_string(), vec![true; pore_count]);
        Self {
            pore_count,
            arrays: BTreeMap::new(),
            labels,
        }
    }

    /// Store `values` under `key`, replacing any previous array.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<f64>) -> PoreResult<()> {
        let key = key.into();
        if values.len() != self.pore_count {
            return Err(PoreError::dimension_mismatch(key, self.pore_count, values.len()));
        }
        self.arrays.insert(key, values);
        Ok(())
    }

    /// Builder form of [`PoreNetwork::insert`].
    pub fn with_array(mut self, key: impl Into<String>, values: Vec<f64>) -> PoreResult<Self> {
        self.insert(key, values)?;
        Ok(self)
    }

    /// Store a boolean label under `key`.
    pub fn set_label(&mut self, key: impl Into<String>, mask: Vec<bool>) -> PoreResult<()> {
        let key = key.into();
        if mask.len() != self.pore_count {
            return Err(PoreError::dimension_mismatch(key, self.pore_count, mask.len()));
        }
        self.labels.insert(key, mask);
        Ok(())
    }

    /// Array keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }
}

impl PoreData for PoreNetwork {
    fn pore_count(&self) -> usize {
        self.pore_count
    }

    fn array(&self, key: &str) -> Option<&[f64]> {
        self.arrays.get(key).map(Vec::as_slice)
    }

    fn label(&self, key: &str) -> Option<&[bool]> {
        self.labels.get(key).map(Vec::as_slice)
    }
}
