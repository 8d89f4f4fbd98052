//! Mesh-sharing readiness model for environments that share a namespace.

use serde::{Deserialize, Serialize};

/// Requested operational mode for mesh-based environment sharing.
///
/// `Unknown` absorbs unrecognized wire values and evaluates with
/// [`ShareEnvOp::Disable`] semantics wherever a mode is consulted, so older
/// control planes keep working against this API.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShareEnvOp {
    Enable,
    Disable,
    #[serde(other)]
    Unknown,
}

impl ShareEnvOp {
    /// Path and query form of the mode. `Unknown` renders as `disable`,
    /// matching how it evaluates.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareEnvOp::Enable => "enable",
            _ => "disable",
        }
    }
}

impl std::fmt::Display for ShareEnvOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the five facts collected by the cluster/mesh inspector.
///
/// All flags are inputs gathered from live infrastructure state (namespace
/// labels, mesh config objects, pod specs, workload status, service
/// selectors). The evaluator only reads them; nothing here re-queries the
/// cluster.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShareEnvReadyChecks {
    pub namespace_has_istio_label: bool,
    #[serde(rename = "virtualservice_deployed")]
    pub virtual_services_deployed: bool,
    pub pods_have_istio_proxy: bool,
    pub workloads_ready: bool,
    pub workloads_have_k8s_service: bool,
}

/// Readiness verdict served to the API layer, recomputed per request.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShareEnvReady {
    pub is_ready: bool,
    pub checks: ShareEnvReadyChecks,
}

impl ShareEnvReady {
    /// Roll the collected checks up into a single verdict for `op`.
    ///
    /// Baseline workload readiness gates everything else. Past that gate,
    /// enabling wants every mesh artifact in place; disabling wants them all
    /// gone. `workloads_have_k8s_service` is an optional condition and never
    /// influences the verdict.
    pub fn check_and_set_ready(&mut self, op: ShareEnvOp) {
        if !self.checks.workloads_ready {
            self.is_ready = false;
            return;
        }

        match op {
            ShareEnvOp::Enable => {
                self.is_ready = self.checks.namespace_has_istio_label
                    && self.checks.virtual_services_deployed
                    && self.checks.pods_have_istio_proxy;
            }
            _ => {
                self.is_ready = !self.checks.namespace_has_istio_label
                    && !self.checks.virtual_services_deployed
                    && !self.checks.pods_have_istio_proxy;
            }
        }
    }
}

/// Load-assignment slice of an Envoy sidecar config dump, read back when
/// inspecting traffic-mirror wiring.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvoyClusterConfigLoadAssignment {
    pub cluster_name: String,
    pub endpoints: Vec<EnvoyLbEndpoints>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvoyLbEndpoints {
    pub lb_endpoints: Vec<EnvoyEndpoints>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvoyEndpoints {
    pub endpoint: EnvoyEndpoint,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvoyEndpoint {
    pub address: EnvoyAddress,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvoyAddress {
    pub socket_address: EnvoySocketAddress,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvoySocketAddress {
    pub protocol: String,
    pub address: String,
    pub port_value: u32,
}
