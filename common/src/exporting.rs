use thiserror::Error;

use crate::msgpack::EncodeError;
use crate::tracing::Trace;

pub mod agent;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Encode(#[from] EncodeError)
}

pub trait Exporter {
    fn export(&mut self, traces: &[Trace]) -> Result<(), ExportError>;
}
