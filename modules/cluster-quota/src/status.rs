//! Quota status types for the cluster-wide aggregate.
//!
//! [`ClusterQuotaStatus`] pairs the enforced total with per-namespace
//! slices. Slicing by namespace allows deletion reconciliation inside a
//! single namespace without recalculating across all of them: the slice
//! holds the deltas to subtract. The by-namespace map serializes as a
//! sequence in first-insertion order, so re-serializing the same logical
//! state is byte-stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ordered_map::OrderedMap;

/// Enforced quota and current usage for one scope.
///
/// Quantities are kept as opaque strings (`"10Gi"`, `"4"`); evaluating
/// them is the quota engine's concern, not this crate's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaStatus {
    /// Enforced hard limits per resource name.
    pub hard: BTreeMap<String, String>,
    /// Observed usage per resource name.
    pub used: BTreeMap<String, String>,
}

/// Per-namespace quota status slices in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaStatusByNamespace {
    statuses: OrderedMap<QuotaStatus>,
}

impl QuotaStatusByNamespace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status slice for `namespace`; new namespaces append to the
    /// serialization order, existing ones keep their position.
    pub fn insert(&mut self, namespace: impl Into<String>, status: QuotaStatus) {
        self.statuses.insert(namespace, status);
    }

    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<&QuotaStatus> {
        self.statuses.get(namespace)
    }

    /// Drops the slice for `namespace`; absent namespaces are a no-op.
    pub fn remove(&mut self, namespace: &str) -> Option<QuotaStatus> {
        self.statuses.remove(namespace)
    }

    /// Namespaces in first-insertion order; the basis for the stable
    /// serialized representation.
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<String> {
        self.statuses.ordered_keys()
    }

    /// Iterates `(namespace, status)` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuotaStatus)> {
        self.statuses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

#[derive(Serialize)]
struct NamespaceStatusRef<'a> {
    namespace: &'a str,
    status: &'a QuotaStatus,
}

#[derive(Deserialize)]
struct NamespaceStatus {
    namespace: String,
    #[serde(default)]
    status: QuotaStatus,
}

impl Serialize for QuotaStatusByNamespace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(
            self.iter()
                .map(|(namespace, status)| NamespaceStatusRef { namespace, status }),
        )
    }
}

impl<'de> Deserialize<'de> for QuotaStatusByNamespace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<NamespaceStatus>::deserialize(deserializer)?;
        let mut by_namespace = Self::new();
        for entry in entries {
            by_namespace.insert(entry.namespace, entry.status);
        }
        Ok(by_namespace)
    }
}

/// Enforced cluster quota and its usage, total and sliced by namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterQuotaStatus {
    /// Enforced quota and usage across all selected namespaces.
    pub total: QuotaStatus,
    /// Usage slices per namespace, in first-seen order.
    pub namespaces: QuotaStatusByNamespace,
}
