use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use tracing::debug;

use crate::{Converter, Error, Result, SyncObject, WorkloadEndpointData};

/// Label carrying the namespace a pod belongs to. Selector-based policies use
/// it to select every pod in a namespace.
pub const K8S_NAMESPACE_LABEL: &str = "calico/k8s_ns";

/// Adapter turning pods into [`WorkloadEndpointData`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PodConverter;

pub fn new_pod_converter() -> PodConverter {
    PodConverter
}

impl PodConverter {
    /// Builds the workload endpoint data for `pod`. The pod's labels are copied
    /// and the namespace label always overrides a user-supplied value.
    pub fn convert_pod(&self, pod: &Pod) -> Result<WorkloadEndpointData> {
        let namespace = pod
            .metadata
            .namespace
            .as_deref()
            .ok_or(Error::InvalidResource("metadata.namespace"))?;
        let name = pod
            .metadata
            .name
            .as_deref()
            .ok_or(Error::InvalidResource("metadata.name"))?;

        let mut labels = pod.labels().clone();
        labels.insert(K8S_NAMESPACE_LABEL.to_string(), namespace.to_string());

        let key = format!("{namespace}.{name}");
        debug!("converted Pod {}/{} to workload {}", namespace, name, key);

        Ok(WorkloadEndpointData { key, labels })
    }
}

impl Converter for PodConverter {
    fn convert(&self, obj: &SyncObject) -> Result<SyncObject> {
        let SyncObject::Pod(pod) = obj else {
            return Err(Error::TypeMismatch {
                expected: "Pod",
                found: obj.kind(),
            });
        };
        self.convert_pod(pod).map(SyncObject::WorkloadEndpointData)
    }

    fn get_key(&self, obj: &SyncObject) -> Result<String> {
        match obj {
            SyncObject::WorkloadEndpointData(data) => Ok(data.key.clone()),
            other => Err(Error::TypeMismatch {
                expected: "WorkloadEndpointData",
                found: other.kind(),
            }),
        }
    }
}
