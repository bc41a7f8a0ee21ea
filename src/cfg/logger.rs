use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::json;
use tracing::{Event, Subscriber};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, FmtContext, FormatEvent, FormatFields, format::Writer},
    layer::SubscriberExt,
};

#[derive(Debug, Deserialize, Clone)]
struct LoggerConfig {
    logger: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct LogConfig {
    /// EnvFilter directive, e.g. "info" or "msc_decoder_rs=debug".
    level: String,
    /// "stdout", "stderr" or "file".
    output: String,
    #[serde(default)]
    show_target: bool,
    #[serde(default)]
    show_line: bool,
    file: Option<LogFileConfig>,
}

#[derive(Debug, Deserialize, Clone)]
struct LogFileConfig {
    directory: String,
    prefix: String,
    rotation: Option<String>,
}

/// One JSON object per event, fields flattened by the visitor below.
struct JsonFormatter {
    config: Arc<LogConfig>,
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let mut entry = serde_json::Map::new();
        entry.insert(
            "timestamp".to_string(),
            json!(chrono::Utc::now().to_rfc3339()),
        );
        entry.insert("level".to_string(), json!(meta.level().to_string()));
        if self.config.show_target {
            entry.insert("target".to_string(), json!(meta.target()));
        }
        if self.config.show_line {
            entry.insert("line".to_string(), json!(meta.line()));
        }
        entry.insert("fields".to_string(), serde_json::Value::Object(visitor.fields));

        writeln!(writer, "{}", serde_json::Value::Object(entry))
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(
        &mut self,
        field: &tracing::field::Field,
        value: &dyn std::fmt::Debug,
    ) {
        self.fields
            .insert(field.name().to_string(), json!(format!("{value:?}")));
    }
}

/// Initialize the global tracing subscriber from a YAML logger config.
///
/// The returned guard must stay alive for buffered log lines to flush.
pub fn init_logger(config_path: &Path) -> Result<WorkerGuard> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read logger config {config_path:?}"))?;
    let config: LoggerConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse logger config {config_path:?}"))?;
    let config = Arc::new(config.logger);

    let (writer, guard) = match config.output.as_str() {
        "stdout" => tracing_appender::non_blocking(std::io::stdout()),
        "stderr" => tracing_appender::non_blocking(std::io::stderr()),
        "file" => {
            let file = config
                .file
                .as_ref()
                .context("output = file requires a file section")?;
            let rotation = match file.rotation.as_deref() {
                Some("minutely") => Rotation::MINUTELY,
                Some("hourly") => Rotation::HOURLY,
                Some("daily") => Rotation::DAILY,
                _ => Rotation::NEVER,
            };
            tracing_appender::non_blocking(RollingFileAppender::new(
                rotation,
                &file.directory,
                &file.prefix,
            ))
        },
        other => return Err(anyhow!("invalid log output {other:?}")),
    };

    let filter = EnvFilter::try_new(&config.level)
        .context("failed to parse log level from config")?;

    let layer = fmt::layer()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .event_format(JsonFormatter {
            config: Arc::clone(&config),
        });

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global default subscriber")?;

    Ok(guard)
}
