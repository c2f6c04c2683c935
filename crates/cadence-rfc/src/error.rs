use thiserror::Error;

use crate::recur::expand::StreamError;
use crate::recur::parse::ParseErrors;

/// RFC parsing and expansion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseErrors),

    #[error("Recurrence stream error: {0}")]
    Stream(#[from] StreamError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
