use crate::msgpack::{self, EncodeError};
use crate::tracing::Span;

pub mod v04;
pub mod v05;

pub use v04::InlineEncoder;
pub use v05::DictionaryEncoder;

// Every span is a fixed-arity array: service, name, resource, trace_id,
// span_id, parent_id, start, duration, error, meta, metrics, type.
const SPAN_FIELDS: u32 = 12;

/// Selects the agent payload format produced by [`PayloadFormat::encoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadFormat {
    /// Inline strings. The baseline format every payload consumer accepts.
    #[default]
    V04,
    /// Strings deduplicated through a batch-wide dictionary.
    V05
}

impl PayloadFormat {
    pub fn encoder(self) -> Box<dyn TraceEncoder + Send> {
        match self {
            PayloadFormat::V04 => Box::new(InlineEncoder::new()),
            PayloadFormat::V05 => Box::new(DictionaryEncoder::new())
        }
    }
}

/// Accumulates traces into a batch and assembles agent payloads from it.
///
/// One instance owns its batch state exclusively. Callers invoke `encode`
/// zero or more times, then `payload` once per flush cycle.
pub trait TraceEncoder {
    /// Appends one trace to the current batch.
    fn encode(&mut self, spans: &[Span]) -> Result<(), EncodeError>;

    /// Assembles the finished buffer and resets the batch.
    fn payload(&mut self) -> Result<Vec<u8>, EncodeError>;

    /// Agent endpoint that accepts this encoder's payloads.
    fn endpoint(&self) -> &'static str;

    /// Traces accumulated since the last payload.
    fn trace_count(&self) -> u32;
}

// The two formats share the span layout and differ only in how string
// fields reach the wire: written in place, or interned and referenced.
trait WriteString {
    fn write_str(&mut self, wr: &mut Vec<u8>, s: &str) -> Result<(), EncodeError>;
}

fn encode_trace<S: WriteString>(wr: &mut Vec<u8>, spans: &[Span], strings: &mut S) -> Result<(), EncodeError> {
    msgpack::write_array_len(wr, msgpack::container_len(spans.len())?)?;

    for span in spans {
        encode_span(wr, span, strings)?;
    }

    Ok(())
}

fn encode_span<S: WriteString>(wr: &mut Vec<u8>, span: &Span, strings: &mut S) -> Result<(), EncodeError> {
    msgpack::write_array_len(wr, SPAN_FIELDS)?;

    strings.write_str(wr, &span.service)?;
    strings.write_str(wr, &span.name)?;
    strings.write_str(wr, &span.resource)?;
    msgpack::write_id(wr, span.trace_id)?;
    msgpack::write_id(wr, span.span_id)?;
    msgpack::write_id(wr, span.parent_id)?;
    msgpack::write_int(wr, span.start)?;
    msgpack::write_int(wr, span.duration)?;
    msgpack::write_int(wr, span.error as i64)?;

    msgpack::write_map_len(wr, msgpack::container_len(span.meta.len())?)?;

    for (k, v) in &span.meta {
        strings.write_str(wr, k)?;
        strings.write_str(wr, v)?;
    }

    msgpack::write_map_len(wr, msgpack::container_len(span.metrics.len())?)?;

    for (k, v) in &span.metrics {
        strings.write_str(wr, k)?;
        msgpack::write_f64(wr, *v)?;
    }

    strings.write_str(wr, span.span_type.as_deref().unwrap_or(""))?;

    Ok(())
}
