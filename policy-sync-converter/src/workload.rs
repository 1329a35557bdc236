use std::collections::BTreeMap;

use policy_sync_crds::v1alpha1::workloadendpoint::WorkloadEndpoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

/// The fields of a [`WorkloadEndpoint`] the policy controller is responsible
/// for syncing.
#[derive(Serialize, Deserialize, Default, PartialEq, Eq, Clone, Debug)]
pub struct WorkloadEndpointData {
    pub key: String,
    pub labels: BTreeMap<String, String>,
}

/// Projects the controller-owned fields out of a persisted endpoint. The labels
/// are cloned so the result never shares storage with the live object.
pub fn build_workload_endpoint_data(wep: &WorkloadEndpoint) -> WorkloadEndpointData {
    WorkloadEndpointData {
        key: wep.spec.workload.clone(),
        labels: wep.spec.labels.clone(),
    }
}

/// Writes `upd` back onto `wep`.
///
/// The labels are replaced wholesale rather than merged key by key. Fails with
/// [`Error::KeyMismatch`] and leaves `wep` untouched when `upd` belongs to a
/// different workload.
pub fn merge_workload_endpoint_data(
    wep: &mut WorkloadEndpoint,
    upd: WorkloadEndpointData,
) -> Result<()> {
    if wep.spec.workload != upd.key {
        warn!(
            "refusing to merge data for {} into workload endpoint {}",
            upd.key, wep.spec.workload
        );
        return Err(Error::KeyMismatch {
            endpoint: wep.spec.workload.clone(),
            update: upd.key,
        });
    }
    debug!(
        "replacing {} labels on workload endpoint {}",
        upd.labels.len(),
        upd.key
    );
    wep.spec.labels = upd.labels;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use policy_sync_crds::v1alpha1::workloadendpoint::{WorkloadEndpoint, WorkloadEndpointSpec};

    use super::*;

    fn make_endpoint(workload: &str, labels: BTreeMap<String, String>) -> WorkloadEndpoint {
        WorkloadEndpoint::new(
            "wep-a",
            WorkloadEndpointSpec {
                workload: workload.into(),
                labels,
                orchestrator: "k8s".into(),
                node: "node-a".into(),
                endpoint: "eth0".into(),
                ip_networks: vec!["10.0.0.5/32".into()],
                ..Default::default()
            },
        )
    }

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_projects_key_and_labels() {
        let wep = make_endpoint("prod.web-1", labels(&[("app", "web")]));
        let data = build_workload_endpoint_data(&wep);
        assert_eq!(data.key, "prod.web-1");
        assert_eq!(data.labels, labels(&[("app", "web")]));
    }

    #[test]
    fn test_build_does_not_alias_endpoint_labels() {
        let mut wep = make_endpoint("prod.web-1", labels(&[("app", "web")]));
        let mut data = build_workload_endpoint_data(&wep);

        data.labels.insert("tier".into(), "frontend".into());
        wep.spec.labels.insert("owner".into(), "team-a".into());

        assert_eq!(data.labels, labels(&[("app", "web"), ("tier", "frontend")]));
        assert_eq!(
            wep.spec.labels,
            labels(&[("app", "web"), ("owner", "team-a")])
        );
    }

    #[test]
    fn test_merge_replaces_labels() {
        let mut wep = make_endpoint("prod.web-1", labels(&[("app", "web"), ("stale", "yes")]));
        let upd = WorkloadEndpointData {
            key: "prod.web-1".into(),
            labels: labels(&[("app", "api"), ("calico/k8s_ns", "prod")]),
        };

        merge_workload_endpoint_data(&mut wep, upd).expect("merge");

        assert_eq!(
            wep.spec.labels,
            labels(&[("app", "api"), ("calico/k8s_ns", "prod")])
        );
        assert_eq!(wep.spec.node, "node-a");
        assert_eq!(wep.spec.ip_networks, vec!["10.0.0.5/32".to_string()]);
    }

    #[test]
    fn test_merge_empty_labels_clears_endpoint() {
        let mut wep = make_endpoint("prod.web-1", labels(&[("app", "web")]));
        let upd = WorkloadEndpointData {
            key: "prod.web-1".into(),
            labels: BTreeMap::new(),
        };

        merge_workload_endpoint_data(&mut wep, upd).expect("merge");
        assert!(wep.spec.labels.is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let upd = WorkloadEndpointData {
            key: "prod.web-1".into(),
            labels: labels(&[("app", "web"), ("calico/k8s_ns", "prod")]),
        };

        let mut once = make_endpoint("prod.web-1", labels(&[("old", "value")]));
        merge_workload_endpoint_data(&mut once, upd.clone()).expect("first merge");

        let mut twice = once.clone();
        merge_workload_endpoint_data(&mut twice, upd).expect("second merge");

        assert_eq!(once.spec.labels, twice.spec.labels);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_key_mismatch_leaves_endpoint_unchanged() {
        let mut wep = make_endpoint("prod.web-1", labels(&[("app", "web")]));
        let before = wep.clone();
        let upd = WorkloadEndpointData {
            key: "prod.web-2".into(),
            labels: labels(&[("app", "other")]),
        };

        let err = merge_workload_endpoint_data(&mut wep, upd).unwrap_err();

        assert!(matches!(
            err,
            Error::KeyMismatch { ref endpoint, ref update }
                if endpoint == "prod.web-1" && update == "prod.web-2"
        ));
        assert_eq!(wep, before);
    }

    #[test]
    fn test_build_then_merge_round_trip() {
        let mut wep = make_endpoint("prod.web-1", labels(&[("app", "web")]));
        let before = wep.clone();
        let data = build_workload_endpoint_data(&wep);

        merge_workload_endpoint_data(&mut wep, data).expect("merge");
        assert_eq!(wep, before);
    }

    #[test]
    fn test_data_serializes_with_plain_field_names() {
        let data = WorkloadEndpointData {
            key: "prod.web-1".into(),
            labels: labels(&[("app", "web")]),
        };
        let json = serde_json::to_value(&data).expect("json");
        assert_eq!(
            json,
            serde_json::json!({"key": "prod.web-1", "labels": {"app": "web"}})
        );
    }
}
