//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name recorded on every span.
const SERVICE_NAME: &str = "refdoc";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "refdoc-otlp.json";

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Builds the span filter: `RUST_LOG` wins over `trace_level`, which wins over
/// the `info` default. An unparsable directive falls back to the default.
fn build_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = trace_level.unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Installs the global subscriber exporting spans to
/// `~/.local/share/zellij/refdoc/refdoc-otlp.json`.
///
/// Returns `false` when tracing could not be set up (data directory not
/// writable, or a subscriber already installed). The viewer works the same
/// either way.
pub fn init_tracing(config: &Config) -> bool {
    let dir = data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return false;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(build_filter(config.trace_level.as_deref()))
        .with(otel_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(build_filter(Some("refdoc=loud")).to_string(), DEFAULT_LEVEL);
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
        assert_eq!(build_filter(None).to_string(), DEFAULT_LEVEL);
    }
}
