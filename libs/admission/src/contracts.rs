//! Capability contracts implemented by admission extensions.
//!
//! Each shared dependency kind has a single-setter contract. An extension
//! implements any subset of them (including none) and advertises the ones
//! it implements by overriding the matching `as_*` hook on
//! [`AdmissionExtension`]. The hooks default to `None`, so the extension
//! set stays open: adding a dependency kind adds a contract and a
//! defaulted hook without touching existing extensions.

use std::sync::Arc;

use crate::deps::{
    Authorizer, ClusterClient, PipelineConfig, ProjectCache, QuotaRegistry, TransportConfig,
};

/// Wants the cluster API client.
pub trait ClusterClientAware {
    fn set_cluster_client(&mut self, client: Arc<dyn ClusterClient>);
}

/// Wants the project cache.
pub trait ProjectCacheAware {
    fn set_project_cache(&mut self, cache: Arc<dyn ProjectCache>);
}

/// Wants the quota registry.
pub trait QuotaRegistryAware {
    fn set_quota_registry(&mut self, registry: Arc<dyn QuotaRegistry>);
}

/// Wants the authorizer.
pub trait AuthorizerAware {
    fn set_authorizer(&mut self, authorizer: Arc<dyn Authorizer>);
}

/// Wants the build-pipeline configuration.
pub trait PipelineConfigAware {
    fn set_pipeline_config(&mut self, config: PipelineConfig);
}

/// Wants the REST transport configuration.
pub trait TransportConfigAware {
    fn set_transport_config(&mut self, config: TransportConfig);
}

/// Post-injection self-check.
///
/// Invoked once per extension after dependency delivery completes. The
/// usual failure is a required dependency that was never supplied.
pub trait Validator {
    /// # Errors
    ///
    /// Returns the extension's own error when its configuration is
    /// incomplete or inconsistent; the orchestrator is expected to abort
    /// startup on it.
    fn validate(&self) -> anyhow::Result<()>;
}

/// An admission extension.
///
/// The `as_*` hooks are the capability detection points: the initializer
/// calls each hook and delivers the dependency only when the hook returns
/// `Some`. Extensions override exactly the hooks for the contracts they
/// implement; the body is always `Some(self)`.
pub trait AdmissionExtension: Send + Sync + 'static {
    /// Stable name used in logs and validation errors.
    fn name(&self) -> &'static str;

    fn as_cluster_client_aware(&mut self) -> Option<&mut dyn ClusterClientAware> {
        None
    }

    fn as_project_cache_aware(&mut self) -> Option<&mut dyn ProjectCacheAware> {
        None
    }

    fn as_quota_registry_aware(&mut self) -> Option<&mut dyn QuotaRegistryAware> {
        None
    }

    fn as_authorizer_aware(&mut self) -> Option<&mut dyn AuthorizerAware> {
        None
    }

    fn as_pipeline_config_aware(&mut self) -> Option<&mut dyn PipelineConfigAware> {
        None
    }

    fn as_transport_config_aware(&mut self) -> Option<&mut dyn TransportConfigAware> {
        None
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::AdmissionExtension;

    struct Bare;

    impl AdmissionExtension for Bare {
        fn name(&self) -> &'static str {
            "bare"
        }
    }

    #[test]
    fn hooks_default_to_none() {
        let mut ext = Bare;
        assert!(ext.as_cluster_client_aware().is_none());
        assert!(ext.as_project_cache_aware().is_none());
        assert!(ext.as_quota_registry_aware().is_none());
        assert!(ext.as_authorizer_aware().is_none());
        assert!(ext.as_pipeline_config_aware().is_none());
        assert!(ext.as_transport_config_aware().is_none());
        assert!(ext.as_validator().is_none());
    }
}
