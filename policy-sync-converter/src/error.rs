use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot handle object of kind {found}, expected {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("bad attempt to merge data for {update} into workload endpoint {endpoint}")]
    KeyMismatch { endpoint: String, update: String },

    #[error("encountered invalid resource: missing {0}")]
    InvalidResource(&'static str),
}
