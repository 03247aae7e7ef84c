//! Analytics sink adapters

pub mod buffer;
pub mod tracing_sink;

pub use buffer::BufferingAnalyticsSink;
pub use tracing_sink::TracingAnalyticsSink;
