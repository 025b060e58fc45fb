//! Bridge from `tracing` events to a [`Logger`].

use std::fmt::{self, Write as _};

use deskshell_core::{LogLevel, Logger};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Forwards every `tracing` event to a [`Logger`].
///
/// The event's `message` becomes the log message; any other fields are
/// appended as `key=value` pairs.  `tracing` has no fatal level, so this layer
/// never produces [`LogLevel::Fatal`] and never terminates the process.
pub struct LoggerLayer<L> {
    logger: L,
}

impl<L> LoggerLayer<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }
}

fn to_log_level(level: &Level) -> LogLevel {
    match *level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warning,
        _ => LogLevel::Error,
    }
}

impl<S, L> Layer<S> for LoggerLayer<L>
where
    S: Subscriber,
    L: Logger + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger
            .log(to_log_level(event.metadata().level()), &visitor.finish());
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}
