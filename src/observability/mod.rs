//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → FileSpanExporter → zmarks-otlp.json
//! ```
//!
//! Spans are written as OTLP JSON lines and the file rotates by size. The
//! filter comes from the `trace_level` plugin option (default `info`).
//!
//! Host web requests complete in a later `update` call than the one that
//! issued them; [`TraceContext`] carries the issuing span through the
//! request's context map so both ends land in the same trace.
//!
//! - `init`: subscriber setup
//! - [`context`]: trace context propagation through `web_request`
//! - `tracer`: provider and file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

pub mod context;
mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use context::TraceContext;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "zmarks";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "zmarks-otlp.json";
