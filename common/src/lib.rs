pub mod client;
pub mod encoding;
pub mod exporting;
pub mod msgpack;
pub mod tracing;
