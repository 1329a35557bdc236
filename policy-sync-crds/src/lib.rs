use thiserror::Error;

pub mod v1alpha1;

use kube::CustomResourceExt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("yaml error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Renders the WorkloadEndpoint CRD as a YAML document.
pub fn workloadendpoint_crd_yaml() -> Result<String> {
    Ok(format!(
        "---\n{}",
        serde_yaml::to_string(&v1alpha1::workloadendpoint::WorkloadEndpoint::crd())?
    ))
}

pub fn crd_gen_workloadendpoint() -> Result<()> {
    print!("{}", workloadendpoint_crd_yaml()?);
    Ok(())
}
