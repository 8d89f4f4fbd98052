//! Data model for the aslan environment service API.
//!
//! Environment and service state DTOs with their exact wire mappings, the
//! validated OpenAPI request types, and the mesh-sharing readiness rollup.

pub mod openapi;
pub mod share_env;
pub mod types;

pub use openapi::{
    CommonEnvCfgType, OpenApiApplyYamlServiceReq, OpenApiDeleteYamlServiceFromEnvReq,
    OpenApiEnvCfgArgs, OpenApiScaleServiceReq, ValidationError, WorkloadType, YamlServiceWithKv,
};
pub use share_env::{ShareEnvOp, ShareEnvReady, ShareEnvReadyChecks};
pub use types::{ContainerNotFound, ProductRevision, ServiceDetail, ServiceRevision};
