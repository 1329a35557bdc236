use std::sync::Arc;

use k8s_openapi::api::{
    core::v1::{Namespace, Pod},
    networking::v1::NetworkPolicy,
};

use crate::WorkloadEndpointData;

/// Values flowing through the sync engine, either as watched input or as the
/// output of a [`Converter`](crate::Converter).
#[derive(Debug, Clone, PartialEq)]
pub enum SyncObject {
    Pod(Arc<Pod>),
    Namespace(Arc<Namespace>),
    NetworkPolicy(Arc<NetworkPolicy>),
    WorkloadEndpointData(WorkloadEndpointData),
}

impl SyncObject {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pod(_) => "Pod",
            Self::Namespace(_) => "Namespace",
            Self::NetworkPolicy(_) => "NetworkPolicy",
            Self::WorkloadEndpointData(_) => "WorkloadEndpointData",
        }
    }
}

impl From<Pod> for SyncObject {
    fn from(pod: Pod) -> Self {
        Self::Pod(Arc::new(pod))
    }
}

impl From<Arc<Pod>> for SyncObject {
    fn from(pod: Arc<Pod>) -> Self {
        Self::Pod(pod)
    }
}

impl From<Namespace> for SyncObject {
    fn from(ns: Namespace) -> Self {
        Self::Namespace(Arc::new(ns))
    }
}

impl From<Arc<Namespace>> for SyncObject {
    fn from(ns: Arc<Namespace>) -> Self {
        Self::Namespace(ns)
    }
}

impl From<NetworkPolicy> for SyncObject {
    fn from(np: NetworkPolicy) -> Self {
        Self::NetworkPolicy(Arc::new(np))
    }
}

impl From<Arc<NetworkPolicy>> for SyncObject {
    fn from(np: Arc<NetworkPolicy>) -> Self {
        Self::NetworkPolicy(np)
    }
}

impl From<WorkloadEndpointData> for SyncObject {
    fn from(data: WorkloadEndpointData) -> Self {
        Self::WorkloadEndpointData(data)
    }
}
