use std::path::Path;

use k8s_openapi::api::core::v1::Pod;
use policy_sync_converter::{PodConverter, merge_workload_endpoint_data};
use policy_sync_crds::v1alpha1::workloadendpoint::WorkloadEndpoint;
use tracing::info;

use crate::manifest;

pub(crate) fn run(endpoint: &Path, pod: &Path) -> anyhow::Result<()> {
    let wep: WorkloadEndpoint = manifest::read_one(endpoint)?;
    let pod: Pod = manifest::read_one(pod)?;
    let merged = merge(wep, &pod)?;
    print!("{}", serde_yaml::to_string(&merged)?);
    Ok(())
}

fn merge(mut wep: WorkloadEndpoint, pod: &Pod) -> anyhow::Result<WorkloadEndpoint> {
    let data = PodConverter.convert_pod(pod)?;
    let key = data.key.clone();
    merge_workload_endpoint_data(&mut wep, data)?;
    info!("merged labels into workload endpoint {}", key);
    Ok(wep)
}
