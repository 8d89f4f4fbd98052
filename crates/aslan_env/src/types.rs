//! Data-transfer types for the environment service API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A container belonging to a service workload.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
}

/// A rendered variable key/value pair attached to a service revision.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct RenderVariableKv {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub use_global_variable: bool,
}

/// Revision delta for one deployed product inside an environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ProductRevision {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub env_name: String,
    pub product_name: String,
    /// Revision currently running in the environment.
    pub current_revision: i64,
    /// Revision the environment would move to on update.
    pub next_revision: i64,
    pub updatable: bool,
    #[serde(rename = "services")]
    pub service_revisions: Vec<ServiceRevision>,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
}

impl ProductRevision {
    /// True when any service in the product needs an update, falling back to
    /// the product-level flag. A product without service revisions is never
    /// considered updated.
    pub fn groups_updated(&self) -> bool {
        if self.service_revisions.is_empty() {
            return false;
        }
        if self.service_revisions.iter().any(|rev| rev.updatable) {
            return true;
        }
        self.updatable
    }
}

/// Revision delta for a single service within a product.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceRevision {
    pub service_name: String,
    pub r#type: String,
    pub current_revision: i64,
    pub next_revision: i64,
    pub updatable: bool,
    pub deploy_strategy: String,
    pub error: String,
    pub deleted: bool,
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<Container>>,
    pub update_service_tmpl: bool,
    pub variable_yaml: String,
    pub variable_kvs: Vec<RenderVariableKv>,
}

/// Cluster-side view of one running workload.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Workload {
    pub name: String,
    pub r#type: String,
    pub images: Vec<String>,
    pub ready: bool,
    pub replicas: i32,
}

/// Cluster-side view of one ingress.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Ingress {
    pub name: String,
    pub hosts: Vec<String>,
}

/// Cluster-side view of one in-cluster service and its ports.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub name: String,
    pub r#type: String,
    pub ports: Vec<i32>,
}

/// Cluster-side view of one cron job.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CronJob {
    pub name: String,
    pub schedule: String,
    pub images: Vec<String>,
    pub suspend: bool,
}

/// Cluster-side view of one node.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub ip: String,
    pub ready: bool,
    pub labels: Vec<String>,
}

/// Response for the service detail page: every runtime facet of one service
/// inside an environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceDetail {
    pub service_name: String,
    pub scales: Vec<Workload>,
    pub ingress: Vec<Ingress>,
    #[serde(rename = "service_endpoints")]
    pub services: Vec<ServiceEndpoint>,
    pub cron_jobs: Vec<CronJob>,
    pub namespace: String,
    pub env_name: String,
    pub product_name: String,
    pub group_name: String,
}

/// Cluster node listing with the label values available for scheduling.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeResp {
    #[serde(rename = "data")]
    pub nodes: Vec<Node>,
    pub labels: Vec<String>,
}

/// Ingress listing for a whole environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProductIngressInfo {
    pub ingress_infos: Vec<Ingress>,
    pub env_name: String,
}

/// Scale a named resource to an absolute replica count.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScaleArgs {
    pub r#type: String,
    pub product_name: String,
    pub env_name: String,
    pub service_name: String,
    pub name: String,
    pub number: i32,
}

/// Restart a named resource in place.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RestartScaleArgs {
    pub r#type: String,
    pub product_name: String,
    pub env_name: String,
    pub name: String,
    /// Unused by current callers; kept on the wire for older clients.
    pub service_name: String,
}

/// Arguments for updating a single service inside an environment.
#[derive(Clone, Debug, Default)]
pub struct ServiceOptArgs {
    pub env_name: String,
    pub product_name: String,
    pub service_name: String,
    pub service_type: String,
    pub service_rev: Option<ServiceRevision>,
    pub update_by: String,
    pub update_service_tmpl: bool,
}

/// Preview what an update would change for one service.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PreviewServiceArgs {
    pub product_name: String,
    pub env_name: String,
    pub service_name: String,
    pub update_service_revision: bool,
    pub service_modules: Vec<Container>,
    pub variable_kvs: Vec<RenderVariableKv>,
}

/// An environment matched by name during namespace resolution.
#[derive(Clone, Debug, Default)]
pub struct MatchedEnv {
    pub env_name: String,
    pub namespace: String,
}

/// A service's container could not be located in the environment.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("serviceName:{service_name},container:{container}")]
pub struct ContainerNotFound {
    pub service_name: String,
    pub container: String,
    pub env_name: String,
    pub product_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revision(updatable: bool) -> ServiceRevision {
        ServiceRevision {
            service_name: "svc".into(),
            updatable,
            ..ServiceRevision::default()
        }
    }

    #[test]
    fn groups_updated_is_false_without_service_revisions() {
        let pr = ProductRevision {
            updatable: true,
            ..ProductRevision::default()
        };
        assert!(!pr.groups_updated());
    }

    #[test]
    fn groups_updated_when_any_service_is_updatable() {
        let pr = ProductRevision {
            updatable: false,
            service_revisions: vec![revision(false), revision(true)],
            ..ProductRevision::default()
        };
        assert!(pr.groups_updated());
    }

    #[test]
    fn groups_updated_falls_back_to_product_flag() {
        let mut pr = ProductRevision {
            updatable: true,
            service_revisions: vec![revision(false)],
            ..ProductRevision::default()
        };
        assert!(pr.groups_updated());
        pr.updatable = false;
        assert!(!pr.groups_updated());
    }

    #[test]
    fn container_not_found_keeps_compact_message_format() {
        let err = ContainerNotFound {
            service_name: "svc-a".into(),
            container: "main".into(),
            env_name: "dev".into(),
            product_name: "demo".into(),
        };
        assert_eq!(err.to_string(), "serviceName:svc-a,container:main");
    }

    #[test]
    fn service_detail_uses_service_endpoints_wire_key() {
        let detail = ServiceDetail {
            service_name: "svc-a".into(),
            services: vec![ServiceEndpoint {
                name: "svc-a".into(),
                r#type: "ClusterIP".into(),
                ports: vec![8080],
            }],
            ..ServiceDetail::default()
        };
        let value = serde_json::to_value(&detail).expect("serialize");
        assert!(value.get("service_endpoints").is_some());
        assert!(value.get("services").is_none());
    }

    #[test]
    fn product_revision_omits_empty_id() {
        let pr = ProductRevision::default();
        let value = serde_json::to_value(&pr).expect("serialize");
        assert!(value.get("id").is_none());
        assert!(value.get("isPublic").is_some());
    }
}
