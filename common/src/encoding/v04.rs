use crate::msgpack::{self, EncodeError};
use crate::tracing::Span;
use super::{encode_trace, TraceEncoder, WriteString};

/// v0.4 encoder: the payload is a plain array of traces and every string
/// field is embedded verbatim at its point of use.
pub struct InlineEncoder {
    traces: Vec<u8>,
    trace_count: u32
}

struct InlineStrings;

impl WriteString for InlineStrings {
    fn write_str(&mut self, wr: &mut Vec<u8>, s: &str) -> Result<(), EncodeError> {
        msgpack::write_str(wr, s)?;

        Ok(())
    }
}

impl InlineEncoder {
    pub fn new() -> Self {
        Self {
            traces: Vec::new(),
            trace_count: 0
        }
    }
}

impl Default for InlineEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceEncoder for InlineEncoder {
    fn encode(&mut self, spans: &[Span]) -> Result<(), EncodeError> {
        encode_trace(&mut self.traces, spans, &mut InlineStrings)?;

        self.trace_count += 1;

        Ok(())
    }

    fn payload(&mut self) -> Result<Vec<u8>, EncodeError> {
        let total = msgpack::array_header_len(self.trace_count) + self.traces.len();
        let mut buf = Vec::with_capacity(total);

        msgpack::write_array_len(&mut buf, self.trace_count)?;
        buf.extend_from_slice(&self.traces);

        debug_assert_eq!(buf.len(), total);

        self.traces.clear();
        self.trace_count = 0;

        Ok(buf)
    }

    fn endpoint(&self) -> &'static str {
        "/v0.4/traces"
    }

    fn trace_count(&self) -> u32 {
        self.trace_count
    }
}
