//! Cluster-wide quota status tracked per namespace.
//!
//! A cluster quota aggregate keeps one status entry per namespace next to
//! the enforced total. Entries live in an insertion-ordered map so that
//! repeated serialization of the same logical state produces byte-stable
//! output — unordered (hash-order) emission would diff as a change on
//! every write and trigger spurious updates in a watch-based
//! reconciliation loop.
//!
//! Both structures are plain in-memory values with no internal locking;
//! an aggregate shared across reconciliation workers must be serialized
//! by its owner.

pub mod ordered_map;
pub mod status;

pub use ordered_map::OrderedMap;
pub use status::{ClusterQuotaStatus, QuotaStatus, QuotaStatusByNamespace};
