//! Request types for the environment OpenAPI surface.
//!
//! Every request validates itself before use: the first missing or invalid
//! field wins and is reported by its wire name. There is no aggregate
//! reporting; the caller fixes the request and resubmits.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A rejected request field, named exactly as it appears on the wire.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// Workload kinds the scale API accepts.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum WorkloadType {
    Deployment,
    StatefulSet,
}

impl WorkloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadType::Deployment => "Deployment",
            WorkloadType::StatefulSet => "StatefulSet",
        }
    }
}

impl std::fmt::Display for WorkloadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Deployment" => Ok(WorkloadType::Deployment),
            "StatefulSet" => Ok(WorkloadType::StatefulSet),
            other => Err(ValidationError(format!(
                "unsupported workload type: {other}"
            ))),
        }
    }
}

/// Kinds of shared environment configuration objects.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum CommonEnvCfgType {
    ConfigMap,
    Secret,
    Ingress,
    #[serde(rename = "PVC")]
    Pvc,
}

/// Scale one workload in an environment to a fixed replica count.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OpenApiScaleServiceReq {
    pub project_key: String,
    pub env_name: String,
    pub workload_name: String,
    pub workload_type: String,
    pub target_replicas: i32,
}

impl OpenApiScaleServiceReq {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("project_key", &self.project_key)?;
        required("env_name", &self.env_name)?;
        required("workload_name", &self.workload_name)?;
        required("workload_type", &self.workload_type)?;
        self.workload_type.parse::<WorkloadType>()?;
        if self.target_replicas < 0 {
            return Err(ValidationError(
                "target_replicas must be greater than or equal to 0".into(),
            ));
        }
        Ok(())
    }
}

/// Apply a set of yaml services to an environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OpenApiApplyYamlServiceReq {
    pub env_name: String,
    pub service_list: Vec<YamlServiceWithKv>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct YamlServiceWithKv {
    pub service_name: String,
}

impl OpenApiApplyYamlServiceReq {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("env_name", &self.env_name)?;
        for service in &self.service_list {
            if service.service_name.is_empty() {
                return Err(ValidationError(
                    "service_name is required for all services".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Remove yaml services from an environment by name.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OpenApiDeleteYamlServiceFromEnvReq {
    pub env_name: String,
    pub service_names: Vec<String>,
}

impl OpenApiDeleteYamlServiceFromEnvReq {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("env_name", &self.env_name)
    }
}

/// Create or update a shared configuration object in an environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OpenApiEnvCfgArgs {
    pub name: String,
    pub env_name: String,
    pub product_name: String,
    #[serde(default)]
    pub service_name: String,
    pub yaml_data: String,
    pub common_env_cfg_type: Option<CommonEnvCfgType>,
    #[serde(default)]
    pub auto_sync: bool,
}

impl OpenApiEnvCfgArgs {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("env_name", &self.env_name)?;
        required("product_name", &self.product_name)?;
        if self.common_env_cfg_type.is_none() {
            return Err(ValidationError("common_env_cfg_type is required".into()));
        }
        required("yaml_data", &self.yaml_data)?;
        Ok(())
    }
}
