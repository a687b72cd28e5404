use std::io::Write;

use thiserror::Error;

pub use rmp::encode::{write_f64, write_str, ValueWriteError};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Write(#[from] ValueWriteError),
    #[error("container length {0} exceeds the u32 wire range")]
    Length(usize)
}

/// Writes an integer using the narrowest MessagePack form that holds it.
pub fn write_int<W: Write>(wr: &mut W, n: i64) -> Result<(), ValueWriteError> {
    rmp::encode::write_sint(wr, n).map(|_| ())
}

pub fn write_uint<W: Write>(wr: &mut W, n: u64) -> Result<(), ValueWriteError> {
    rmp::encode::write_uint(wr, n).map(|_| ())
}

/// Writes a span identifier with the fixed `uint 64` form. Identifiers are
/// compared and parsed downstream and must keep a stable width.
pub fn write_id<W: Write>(wr: &mut W, id: u64) -> Result<(), ValueWriteError> {
    rmp::encode::write_u64(wr, id)
}

pub fn write_array_len<W: Write>(wr: &mut W, len: u32) -> Result<(), ValueWriteError> {
    rmp::encode::write_array_len(wr, len).map(|_| ())
}

pub fn write_map_len<W: Write>(wr: &mut W, len: u32) -> Result<(), ValueWriteError> {
    rmp::encode::write_map_len(wr, len).map(|_| ())
}

/// Number of bytes an array or map header of the given length occupies.
pub fn array_header_len(len: u32) -> usize {
    if len <= 15 {
        1
    } else if len <= u16::MAX as u32 {
        3
    } else {
        5
    }
}

pub fn container_len(len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::Length(len))
}
