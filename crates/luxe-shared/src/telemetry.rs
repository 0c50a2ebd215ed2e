//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;
use crate::error::AppError;

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process when file output is enabled.
pub fn init_telemetry(settings: &LogSettings, app_name: &str) -> Result<Option<WorkerGuard>, AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match settings.dir.as_deref() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{}.log", app_name));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    let result = if settings.format == "pretty" {
        registry.with(fmt::layer().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))?;
    Ok(guard)
}
