use hashbrown::HashMap;

use crate::msgpack::{self, EncodeError};
use crate::tracing::Span;
use super::{encode_trace, TraceEncoder, WriteString};

/// v0.5 encoder: string fields become integer indexes into a string table
/// accumulated alongside the traces, and the payload is the 2-element
/// container `[string_table, trace_table]`.
pub struct DictionaryEncoder {
    traces: Vec<u8>,
    strings: StringTable,
    trace_count: u32
}

// The byte region is the wire table itself: strings are appended already
// encoded, in first-seen order, so assembly only has to prefix a header.
struct StringTable {
    bytes: Vec<u8>,
    index: HashMap<String, u32>
}

impl StringTable {
    fn new() -> Self {
        Self {
            bytes: Vec::new(),
            index: HashMap::new()
        }
    }

    fn intern(&mut self, s: &str) -> Result<u32, EncodeError> {
        if let Some(&idx) = self.index.get(s) {
            return Ok(idx);
        }

        let idx = msgpack::container_len(self.index.len())?;

        msgpack::write_str(&mut self.bytes, s)?;
        self.index.insert(s.to_owned(), idx);

        Ok(idx)
    }

    fn clear(&mut self) {
        self.bytes.clear();
        self.index.clear();
    }
}

impl WriteString for StringTable {
    fn write_str(&mut self, wr: &mut Vec<u8>, s: &str) -> Result<(), EncodeError> {
        let idx = self.intern(s)?;

        msgpack::write_uint(wr, idx as u64)?;

        Ok(())
    }
}

impl DictionaryEncoder {
    pub fn new() -> Self {
        Self {
            traces: Vec::new(),
            strings: StringTable::new(),
            trace_count: 0
        }
    }
}

impl Default for DictionaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceEncoder for DictionaryEncoder {
    fn encode(&mut self, spans: &[Span]) -> Result<(), EncodeError> {
        encode_trace(&mut self.traces, spans, &mut self.strings)?;

        self.trace_count += 1;

        Ok(())
    }

    fn payload(&mut self) -> Result<Vec<u8>, EncodeError> {
        let string_count = msgpack::container_len(self.strings.index.len())?;
        let total = 1
            + msgpack::array_header_len(string_count)
            + self.strings.bytes.len()
            + msgpack::array_header_len(self.trace_count)
            + self.traces.len();
        let mut buf = Vec::with_capacity(total);

        msgpack::write_array_len(&mut buf, 2)?;
        msgpack::write_array_len(&mut buf, string_count)?;
        buf.extend_from_slice(&self.strings.bytes);
        msgpack::write_array_len(&mut buf, self.trace_count)?;
        buf.extend_from_slice(&self.traces);

        debug_assert_eq!(buf.len(), total);

        self.traces.clear();
        self.strings.clear();
        self.trace_count = 0;

        Ok(buf)
    }

    fn endpoint(&self) -> &'static str {
        "/v0.5/traces"
    }

    fn trace_count(&self) -> u32 {
        self.trace_count
    }
}
