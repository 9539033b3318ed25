//! Shared dependency kinds an orchestrator can offer to extensions.
//!
//! Handle-like dependencies are narrow trait objects delivered as
//! `Arc<dyn _>`; configuration dependencies are plain serde structs
//! cloned into each interested extension. The initializer treats all of
//! them opaquely.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Cluster API client handle.
pub trait ClusterClient: Send + Sync {
    /// Host this client is bound to.
    fn api_host(&self) -> &str;
}

/// Cache of known projects for fast existence checks during admission.
pub trait ProjectCache: Send + Sync {
    /// Whether the named project is currently known to the cluster.
    fn contains(&self, project: &str) -> bool;
}

/// Registry of resources covered by quota evaluation.
pub trait QuotaRegistry: Send + Sync {
    /// Whether usage of the named resource is tracked by a quota evaluator.
    fn covers(&self, resource: &str) -> bool;
}

/// Admission-time authorization checks.
pub trait Authorizer: Send + Sync {
    /// Whether the given verb on the resource is allowed in the namespace.
    fn allowed(&self, verb: &str, resource: &str, namespace: &str) -> bool;
}

/// Build-pipeline settings for extensions that provision pipeline support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Automatically instantiate the pipeline template in new projects.
    pub auto_provision: bool,
    /// Namespace holding the pipeline template.
    pub template_namespace: String,
    /// Name of the pipeline template.
    pub template_name: String,
}

/// REST transport settings for extensions that open their own connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Base URL of the API server.
    pub base_url: String,
    /// Per-request timeout in seconds; zero means no timeout.
    pub timeout_secs: u64,
    /// Skip server certificate verification.
    pub insecure: bool,
}

/// The fixed set of shared values offered to extensions.
///
/// Owned by the orchestrator and handed to
/// [`ExtensionInitializer`](crate::ExtensionInitializer) once at startup.
/// Adding a dependency kind here (plus a matching contract and injection
/// clause) never requires changes to existing extensions.
#[derive(Clone)]
pub struct DependencySet {
    pub cluster_client: Arc<dyn ClusterClient>,
    pub project_cache: Arc<dyn ProjectCache>,
    pub quota_registry: Arc<dyn QuotaRegistry>,
    pub authorizer: Arc<dyn Authorizer>,
    pub pipeline_config: PipelineConfig,
    pub transport_config: TransportConfig,
}

#[cfg(test)]
mod tests {
    use super::{PipelineConfig, TransportConfig};

    #[test]
    fn pipeline_config_fields_default_when_absent() {
        let cfg: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PipelineConfig::default());

        let cfg: PipelineConfig =
            serde_json::from_str(r#"{"auto_provision": true, "template_name": "pipeline"}"#)
                .unwrap();
        assert!(cfg.auto_provision);
        assert_eq!(cfg.template_name, "pipeline");
        assert_eq!(cfg.template_namespace, "");
    }

    #[test]
    fn transport_config_fields_default_when_absent() {
        let cfg: TransportConfig =
            serde_json::from_str(r#"{"base_url": "https://api.cluster.local:6443"}"#).unwrap();
        assert_eq!(cfg.base_url, "https://api.cluster.local:6443");
        assert_eq!(cfg.timeout_secs, 0);
        assert!(!cfg.insecure);
    }
}
