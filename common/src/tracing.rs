use hashbrown::HashMap;

pub type Meta = HashMap<String, String>;
pub type Metrics = HashMap<String, f64>;
pub type Trace = Vec<Span>;

#[derive(Debug, Clone, Default)]
pub struct Span {
    pub span_type: Option<String>,
    pub trace_id: u64,
    pub span_id: u64,
    pub parent_id: u64,
    pub name: String,
    pub resource: String,
    pub service: String,
    pub error: i32,
    pub start: i64,
    pub duration: i64,
    pub meta: Meta,
    pub metrics: Metrics
}
