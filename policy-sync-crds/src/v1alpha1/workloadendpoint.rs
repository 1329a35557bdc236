use std::collections::BTreeMap;

use kube::CustomResource;
use kube::KubeSchema;
use serde::{Deserialize, Serialize};

pub const NAME_GROUP_WORKLOADENDPOINT: &str = "workloadendpoints.policy-sync.dev";

/// Network identity of a single workload. Policy selection runs against
/// `labels`; `workload` ties the endpoint back to the pod it was built from.
#[derive(
    CustomResource, KubeSchema, Serialize, Deserialize, Default, PartialEq, Eq, Clone, Debug,
)]
#[kube(
    group = "policy-sync.dev",
    version = "v1alpha1",
    kind = "WorkloadEndpoint",
    derive = "Default",
    derive = "PartialEq",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEndpointSpec {
    /// Workload identifier in the form `<namespace>.<name>`
    pub workload: String,
    /// Labels used by selector-based policies
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Orchestrator that owns the workload, e.g. `k8s`
    #[serde(default)]
    pub orchestrator: String,
    /// Node hosting the workload
    #[serde(default)]
    pub node: String,
    /// Endpoint name within the workload, usually `eth0`
    #[serde(default)]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_networks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<String>,
}
