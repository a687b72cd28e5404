use log::debug;

use crate::client::{AgentRequest, Client};
use crate::encoding::{PayloadFormat, TraceEncoder};
use crate::tracing::Trace;
use super::{ExportError, Exporter};

/// Encodes finished traces and submits the assembled payload through a
/// [`Client`].
pub struct AgentExporter {
    client: Box<dyn Client + Send + Sync>,
    encoder: Box<dyn TraceEncoder + Send>,
    format: PayloadFormat
}

impl AgentExporter {
    pub fn new(client: Box<dyn Client + Send + Sync>, format: PayloadFormat) -> Self {
        Self {
            client,
            encoder: format.encoder(),
            format
        }
    }

    fn flush(&mut self, traces: &[Trace]) -> Result<(), ExportError> {
        for trace in traces {
            self.encoder.encode(trace)?;
        }

        let trace_count = self.encoder.trace_count();
        let endpoint = self.encoder.endpoint();
        let body = self.encoder.payload()?;

        debug!("flushing {trace_count} traces ({} bytes) to {endpoint}", body.len());

        self.client.request(AgentRequest {
            endpoint,
            trace_count,
            body
        });

        Ok(())
    }
}

impl Exporter for AgentExporter {
    fn export(&mut self, traces: &[Trace]) -> Result<(), ExportError> {
        if traces.is_empty() {
            return Ok(());
        }

        let result = self.flush(traces);

        if result.is_err() {
            // A failed batch is unsendable. The next one starts from scratch.
            self.encoder = self.format.encoder();
        }

        result
    }
}
