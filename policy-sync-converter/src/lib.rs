mod error;
mod object;
mod pod;
mod workload;

pub use error::Error;
pub use object::SyncObject;
pub use pod::{K8S_NAMESPACE_LABEL, PodConverter, new_pod_converter};
pub use workload::{
    WorkloadEndpointData, build_workload_endpoint_data, merge_workload_endpoint_data,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Capability set shared by every object-kind adapter the sync engine drives.
///
/// Implementations only accept the [`SyncObject`] variants they understand and
/// return [`Error::TypeMismatch`] for everything else, so a single malformed
/// object never takes the controller down.
pub trait Converter {
    /// Converts a watched Kubernetes object into the reduced form the
    /// controller syncs.
    fn convert(&self, obj: &SyncObject) -> Result<SyncObject>;

    /// Returns the key identifying a value previously produced by
    /// [`Converter::convert`].
    fn get_key(&self, obj: &SyncObject) -> Result<String>;
}
