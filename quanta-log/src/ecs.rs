//! ECS JSON event formatter

use serde_json::{Map, Value};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// ECS schema version written to every record
pub const ECS_VERSION: &str = "1.6.0";

/// Formats each event as a single-line JSON object with ECS field names
///
/// Event fields other than `message` are copied as top-level keys; they
/// never replace the ECS keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcsFormat {
    timer: SystemTime,
}

impl<S, N> FormatEvent<S, N> for EcsFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        let mut timestamp = String::new();
        self.timer.format_time(&mut Writer::new(&mut timestamp))?;

        let mut fields = FieldVisitor::default();
        event.record(&mut fields);

        let mut record = Map::new();
        record.insert("@timestamp".into(), timestamp.into());
        record.insert(
            "log.level".into(),
            meta.level().as_str().to_ascii_lowercase().into(),
        );
        record.insert("message".into(), fields.message.unwrap_or_default().into());
        record.insert("ecs.version".into(), ECS_VERSION.into());
        record.insert("log.logger".into(), meta.target().into());
        let mut origin = Map::new();
        if let Some(file) = meta.file() {
            origin.insert("file.name".into(), file.into());
        }
        if let Some(line) = meta.line() {
            origin.insert("file.line".into(), line.into());
        }
        if !origin.is_empty() {
            record.insert("log.origin".into(), origin.into());
        }
        if let Some(scope) = ctx.event_scope() {
            let spans: Vec<Value> = scope.from_root().map(|span| span.name().into()).collect();
            record.insert("span.names".into(), spans.into());
        }

        for (key, value) in fields.values {
            record.entry(key).or_insert(value);
        }

        writeln!(writer, "{}", Value::Object(record))
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    values: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.values.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}").into());
    }
}
