//! Capability-based initialization for admission extensions.
//!
//! An orchestrator constructs an open set of admission extensions, hands
//! the shared [`DependencySet`] to an [`ExtensionInitializer`], and calls
//! [`ExtensionInitializer::initialize`] once at startup. Each extension
//! receives exactly the dependencies it declares a capability for and
//! nothing else. A follow-up [`validate`] pass lets extensions fail fast
//! on misconfiguration before the orchestrator starts serving.

pub mod contracts;
pub mod deps;
pub mod initializer;

pub use contracts::{
    AdmissionExtension, AuthorizerAware, ClusterClientAware, PipelineConfigAware,
    ProjectCacheAware, QuotaRegistryAware, TransportConfigAware, Validator,
};
pub use deps::{
    Authorizer, ClusterClient, DependencySet, PipelineConfig, ProjectCache, QuotaRegistry,
    TransportConfig,
};
pub use initializer::{ExtensionInitializer, ValidationError, validate};
