use anyhow::Result;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &config.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    if config.format == "json" {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_thread_ids(true);
        match file {
            Some(file) => registry.with(fmt_layer.with_writer(file)).init(),
            None => registry.with(fmt_layer).init(),
        }
    } else {
        let fmt_layer = fmt::layer().with_span_events(FmtSpan::CLOSE);
        match file {
            Some(file) => registry.with(fmt_layer.with_writer(file)).init(),
            None => registry.with(fmt_layer).init(),
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(())
}
