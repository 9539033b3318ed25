//! Dependency delivery and post-injection validation.

use std::sync::Arc;

use tracing::debug;

use crate::contracts::AdmissionExtension;
use crate::deps::DependencySet;

/// Delivers shared dependencies to the extensions that declare a
/// capability for them.
///
/// Holds the extension slice only for the duration of a call; the
/// orchestrator keeps ownership of both the extensions and the original
/// dependency values.
pub struct ExtensionInitializer {
    deps: DependencySet,
}

impl ExtensionInitializer {
    #[must_use]
    pub fn new(deps: DependencySet) -> Self {
        Self { deps }
    }

    /// Wires each extension with the dependencies it wants.
    ///
    /// Extensions are visited in slice order; contracts are checked in a
    /// fixed order independent of it. Extensions implementing none of the
    /// contracts are left untouched. Infallible and idempotent: a second
    /// call with the same dependency set re-delivers the same values.
    pub fn initialize(&self, extensions: &mut [Box<dyn AdmissionExtension>]) {
        debug!(extensions = extensions.len(), "Phase: initialize");
        for ext in &mut *extensions {
            let name = ext.name();
            if let Some(wants) = ext.as_cluster_client_aware() {
                wants.set_cluster_client(Arc::clone(&self.deps.cluster_client));
                debug!(extension = name, capability = "cluster-client", "delivered");
            }
            if let Some(wants) = ext.as_project_cache_aware() {
                wants.set_project_cache(Arc::clone(&self.deps.project_cache));
                debug!(extension = name, capability = "project-cache", "delivered");
            }
            if let Some(wants) = ext.as_quota_registry_aware() {
                wants.set_quota_registry(Arc::clone(&self.deps.quota_registry));
                debug!(extension = name, capability = "quota-registry", "delivered");
            }
            if let Some(wants) = ext.as_authorizer_aware() {
                wants.set_authorizer(Arc::clone(&self.deps.authorizer));
                debug!(extension = name, capability = "authorizer", "delivered");
            }
            if let Some(wants) = ext.as_pipeline_config_aware() {
                wants.set_pipeline_config(self.deps.pipeline_config.clone());
                debug!(extension = name, capability = "pipeline-config", "delivered");
            }
            if let Some(wants) = ext.as_transport_config_aware() {
                wants.set_transport_config(self.deps.transport_config.clone());
                debug!(extension = name, capability = "transport-config", "delivered");
            }
        }
    }
}

/// An extension's post-injection self-check failed.
///
/// The extension's own error is preserved verbatim as the
/// [`source`](std::error::Error::source).
#[derive(Debug, thiserror::Error)]
#[error("extension '{extension}' failed validation")]
pub struct ValidationError {
    pub extension: String,
    #[source]
    pub source: anyhow::Error,
}

/// Runs the self-check of every extension that declares one.
///
/// Extensions are visited in slice order and the pass stops at the first
/// failure; extensions after the failing one are not consulted.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first extension whose
/// [`Validator::validate`](crate::contracts::Validator::validate) failed.
pub fn validate(extensions: &[Box<dyn AdmissionExtension>]) -> Result<(), ValidationError> {
    debug!(extensions = extensions.len(), "Phase: validate");
    for ext in extensions {
        if let Some(validator) = ext.as_validator() {
            validator.validate().map_err(|source| ValidationError {
                extension: ext.name().to_owned(),
                source,
            })?;
        }
    }
    Ok(())
}
