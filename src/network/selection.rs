//! Pore subsets.

use serde::{Deserialize, Serialize};

use crate::error::{PoreError, PoreResult};
use crate::network::{ALL_LABEL, PoreData};

/// Which pores a model evaluates.
///
/// Output arrays are aligned with the resolved index list, not with the full
/// pore count, unless the selection is `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoreSelection {
    /// Every pore, in index order.
    #[default]
    All,
    /// Explicit pore indices, evaluated in the given order.
    Indices(Vec<usize>),
    /// Pores whose label entry is `true`, in index order.
    ///
    /// A bare name such as `"internal"` is looked up as `"pore.internal"`.
    Label(String),
}

impl PoreSelection {
    pub fn label(name: impl Into<String>) -> Self {
        PoreSelection::Label(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PoreSelection::All)
    }

    /// Resolve to concrete indices against `data`.
    pub fn resolve<D: PoreData + ?Sized>(&self, data: &D) -> PoreResult<Vec<usize>> {
        let n = data.pore_count();
        match self {
            PoreSelection::All => Ok((0..n).collect()),
            PoreSelection::Indices(indices) => {
                if let Some(&bad) = indices.iter().find(|&&i| i >= n) {
                    return Err(PoreError::dimension_mismatch(
                        format!("pore index {bad}"),
                        n,
                        bad + 1,
                    ));
                }
                Ok(indices.clone())
            }
            PoreSelection::Label(name) => {
                let key = qualified_label(name);
                let Some(mask) = data.label(&key) else {
                    if key == ALL_LABEL {
                        return Ok((0..n).collect());
                    }
                    return Err(PoreError::InvalidSelection {
                        message: format!("unknown label '{key}'"),
                    });
                };
                if mask.len() != n {
                    return Err(PoreError::dimension_mismatch(key, n, mask.len()));
                }
                Ok(mask
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &on)| on.then_some(i))
                    .collect())
            }
        }
    }
}

fn qualified_label(name: &str) -> String {
    if name.starts_with("pore.") {
        name.to_string()
    } else {
        format!("pore.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::PoreNetwork;

    fn network() -> PoreNetwork {
        let mut net = PoreNetwork::new(4);
        net.set_label("pore.internal", vec![false, true, true, false]).unwrap();
        net
    }

    #[test]
    fn all_is_default_and_covers_every_pore() {
        assert_eq!(PoreSelection::default(), PoreSelection::All);
        assert_eq!(network().pores(&PoreSelection::All).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn label_with_and_without_prefix() {
        let net = network();
        assert_eq!(net.pores(&PoreSelection::label("internal")).unwrap(), vec![1, 2]);
        assert_eq!(net.pores(&PoreSelection::label("pore.internal")).unwrap(), vec![1, 2]);
        assert_eq!(net.pores(&PoreSelection::label("all")).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = network().pores(&PoreSelection::label("boundary")).unwrap_err();
        assert!(matches!(err, PoreError::InvalidSelection { .. }));
    }

    #[test]
    fn indices_keep_order_and_reject_out_of_range() {
        let net = network();
        assert_eq!(net.pores(&PoreSelection::Indices(vec![3, 0])).unwrap(), vec![3, 0]);
        let err = net.pores(&PoreSelection::Indices(vec![1, 4])).unwrap_err();
        assert!(matches!(err, PoreError::DimensionMismatch { .. }));
    }

    #[test]
    fn deserializes_from_config() {
        let sel: PoreSelection = serde_json::from_str(r#"{"label": "internal"}"#).unwrap();
        assert_eq!(sel, PoreSelection::label("internal"));
        let sel: PoreSelection = serde_json::from_str(r#""all""#).unwrap();
        assert!(sel.is_all());
    }
}
