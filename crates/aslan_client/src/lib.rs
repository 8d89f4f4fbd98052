//! Typed client for the environment API of a remote aslan service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use aslan_env::openapi::{
    OpenApiApplyYamlServiceReq, OpenApiDeleteYamlServiceFromEnvReq, OpenApiEnvCfgArgs,
    OpenApiScaleServiceReq,
};
use aslan_env::share_env::{ShareEnvOp, ShareEnvReady};
use aslan_env::types::ServiceDetail;

pub mod config;
pub mod http_client;

/// Errors surfaced by aslan API calls.
///
/// Transport and decode failures pass through untranslated and there are no
/// retries; callers interpret the failure. Non-2xx responses carry the status
/// code and a bounded snippet of the body.
#[derive(Debug, Error)]
pub enum AslanError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("aslan responded {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid request: {0}")]
    Validation(#[from] aslan_env::openapi::ValidationError),
    #[error("configuration error: {0}")]
    Config(String),
}

/// One deployment environment as reported by the list/detail endpoints.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Environment {
    pub env_name: String,
    pub product_name: String,
    pub namespace: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default)]
    pub production: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub update_by: String,
    #[serde(default)]
    pub update_time: i64,
}

/// Body for switching a workload into dev mode.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct StartDevmodeInfo {
    pub dev_image: String,
}

/// Workload state returned by the dev-mode patch call.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WorkloadInfo {
    pub name: String,
    pub r#type: String,
    #[serde(default)]
    pub status: String,
}

#[async_trait]
pub trait AslanClient: Send + Sync + 'static {
    async fn list_environments(&self, project_name: &str) -> Result<Vec<Environment>, AslanError>;
    async fn get_environment(
        &self,
        env_name: &str,
        project_name: &str,
    ) -> Result<Environment, AslanError>;
    async fn get_service_detail(
        &self,
        project_name: &str,
        service_name: &str,
        env_name: &str,
    ) -> Result<ServiceDetail, AslanError>;
    /// Swap a workload's image for `dev_image` and report the patched state.
    async fn patch_workload(
        &self,
        project_name: &str,
        env_name: &str,
        service_name: &str,
        dev_image: &str,
    ) -> Result<WorkloadInfo, AslanError>;
    /// Restore a workload to its pre-dev-mode image.
    async fn recover_workload(
        &self,
        project_name: &str,
        env_name: &str,
        service_name: &str,
    ) -> Result<(), AslanError>;
    /// Ask the service whether an environment is ready to switch mesh sharing
    /// to `op`.
    async fn check_share_env_ready(
        &self,
        project_name: &str,
        env_name: &str,
        op: ShareEnvOp,
    ) -> Result<ShareEnvReady, AslanError>;
    async fn scale_service(&self, req: &OpenApiScaleServiceReq) -> Result<(), AslanError>;
    async fn apply_yaml_services(
        &self,
        project_name: &str,
        req: &OpenApiApplyYamlServiceReq,
    ) -> Result<(), AslanError>;
    async fn delete_yaml_services(
        &self,
        project_name: &str,
        req: &OpenApiDeleteYamlServiceFromEnvReq,
    ) -> Result<(), AslanError>;
    async fn update_env_cfg(&self, req: &OpenApiEnvCfgArgs) -> Result<(), AslanError>;
}
