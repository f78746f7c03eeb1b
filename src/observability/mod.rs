//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → TraceFileExporter → refdoc-otlp.json
//! ```
//!
//! Every state operation opens a `debug_span!`, so the trace file shows each
//! key press with the navigation, search or bookmark work it caused. The file
//! rotates at 10 MB and keeps three backups.
//!
//! The filter comes from `RUST_LOG` if set, then the `trace_level` plugin
//! option, then `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
