use thiserror::Error;
use vlsi_sat::io::ParseError;
use vlsi_sat::model::InstanceError;

pub(crate) type VlsiResult<T> = Result<T, VlsiError>;

#[derive(Error, Debug)]
pub(crate) enum VlsiError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance file could not be parsed, more details: {0}")]
    InvalidInstanceFile(#[from] ParseError),
    #[error("The instance cannot be packed, more details: {0}")]
    InvalidInstance(#[from] InstanceError),
}
