use std::path::Path;

use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use policy_sync_converter::{Converter, PodConverter, SyncObject, WorkloadEndpointData};
use tabled::{Table, Tabled, settings::Style};
use tracing::{error, info};

use crate::{cli::OutputFormat, manifest};

#[derive(Tabled)]
struct WorkloadRow {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "LABELS")]
    labels: String,
}

impl From<&WorkloadEndpointData> for WorkloadRow {
    fn from(data: &WorkloadEndpointData) -> Self {
        let labels = data
            .labels
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",");
        Self {
            key: data.key.clone(),
            labels,
        }
    }
}

pub(crate) fn run(file: &Path, output: OutputFormat) -> anyhow::Result<()> {
    let pods: Vec<Pod> = manifest::read_all(file)?;
    let converted = convert_all(&PodConverter, pods);
    println!("{}", render(&converted, output)?);
    Ok(())
}

pub(crate) fn run_keys(file: &Path) -> anyhow::Result<()> {
    let pods: Vec<Pod> = manifest::read_all(file)?;
    let converter = PodConverter;
    for pod in pods {
        let name = pod.name_any();
        let key = converter
            .convert(&pod.into())
            .and_then(|obj| converter.get_key(&obj));
        match key {
            Ok(key) => println!("{key}"),
            Err(e) => error!(%e, "skipping Pod {}", name),
        }
    }
    Ok(())
}

/// Converts every pod, logging and skipping the ones that fail so one bad
/// object does not hide the rest.
fn convert_all<C: Converter>(converter: &C, pods: Vec<Pod>) -> Vec<WorkloadEndpointData> {
    let mut result = Vec::with_capacity(pods.len());
    for pod in pods {
        let name = pod.name_any();
        match converter.convert(&pod.into()) {
            Ok(SyncObject::WorkloadEndpointData(data)) => result.push(data),
            Ok(other) => error!(
                "converter returned unexpected {} for Pod {}",
                other.kind(),
                name
            ),
            Err(e) => error!(%e, "skipping Pod {}", name),
        }
    }
    info!("converted {} pods", result.len());
    result
}

fn render(data: &[WorkloadEndpointData], output: OutputFormat) -> anyhow::Result<String> {
    let rendered = match output {
        OutputFormat::Table => {
            let rows: Vec<WorkloadRow> = data.iter().map(WorkloadRow::from).collect();
            Table::new(rows).with(Style::empty()).to_string()
        }
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
    };
    Ok(rendered)
}
