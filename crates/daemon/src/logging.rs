// Logging setup
//
// stdout through a non-blocking writer; the returned guard must live until
// exit or buffered lines are lost.

use crate::config::LogFormat;
use crate::telemetry;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

pub fn init(format: LogFormat) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Telemetry failures are reported once the subscriber exists
    let (otel_layer, otel_error) = match telemetry::layer() {
        Ok(layer) => (layer, None),
        Err(e) => (None, Some(e)),
    };

    let registry = tracing_subscriber::registry()
        .with(otel_layer)
        .with(env_filter);

    match format {
        // Production: JSON structured logging
        LogFormat::Json => registry.with(fmt::layer().json().with_writer(writer)).try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(writer))
            .try_init()?,
    }

    if let Some(e) = otel_error {
        tracing::warn!(error = ?e, "Failed to initialize OpenTelemetry (continuing without it)");
    }

    Ok(guard)
}
