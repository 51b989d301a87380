//! Subscriber setup.

use super::tracer;
use super::{SERVICE_NAME, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when the configuration does not name one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting to
/// `~/.local/share/zellij/zmarks/zmarks-otlp.json`.
///
/// Tracing is best effort: if the data directory cannot be created, or a
/// subscriber is already installed, this does nothing. An unparsable
/// `trace_level` falls back to [`DEFAULT_TRACE_LEVEL`].
///
/// ```rust
/// use zmarks::observability::init_tracing;
/// use zmarks::Config;
///
/// let config = Config {
///     trace_level: Some("zmarks=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = config
        .trace_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
