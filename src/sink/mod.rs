// src/sink/mod.rs: Structured sinks backed by tracing-subscriber
//
// A `Sink` owns a private `tracing::Dispatch` and hands events to it directly,
// so no global subscriber is ever installed and several sinks can live side by
// side in one process.

pub mod capture;
pub mod console;
pub mod json;

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat};
use tracing::callsite::{DefaultCallsite, Identifier};
use tracing::field::{Field, FieldSet, Value, Visit};
use tracing::metadata::Kind;
use tracing::{Dispatch, Event, Level, Metadata};
use tracing_subscriber::fmt::format::{DefaultFields, FormatEvent};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::Registry;

use crate::core::severity::Severity;
use crate::infra::errors::LogError;

pub use capture::CaptureBuffer;
pub use console::ConsoleFormat;
pub use json::JsonFormat;

/// Console timestamp layout: `YYYY-MM-DD HH:MM:SS`.
pub const CONSOLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How a sink renders the wall-clock time of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormat {
    /// RFC 3339 with millisecond precision and local offset.
    Rfc3339,
    /// A validated strftime pattern.
    Strftime(String),
}

impl TimeFormat {
    /// Validates a strftime pattern up front so rendering can never fail.
    pub fn strftime(pattern: impl Into<String>) -> Result<Self, LogError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LogError::InvalidTimeFormat(pattern));
        }
        Ok(Self::Strftime(pattern))
    }

    pub fn console_default() -> Self {
        Self::Strftime(CONSOLE_TIME_FORMAT.to_string())
    }

    pub fn render(&self, now: &DateTime<Local>) -> String {
        match self {
            Self::Rfc3339 => now.to_rfc3339_opts(SecondsFormat::Millis, false),
            Self::Strftime(pattern) => now.format(pattern).to_string(),
        }
    }
}

/// Destination that renders a leveled, timestamped message.
#[derive(Clone, Debug)]
pub struct Sink {
    dispatch: Dispatch,
}

impl Sink {
    /// Color-coded console output on stdout.
    pub fn console() -> Self {
        Self::console_to(std::io::stdout, true)
    }

    pub fn console_to<W>(make_writer: W, color: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::from_format(ConsoleFormat::new(color), make_writer)
    }

    /// One JSON object per line with RFC 3339 timestamps.
    pub fn json<W>(make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::json_with_time_format(make_writer, TimeFormat::Rfc3339)
    }

    pub fn json_with_time_format<W>(make_writer: W, time_format: TimeFormat) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::from_format(JsonFormat::new(time_format), make_writer)
    }

    /// Wires any event formatter and writer into a dedicated fmt subscriber.
    pub fn from_format<E, W>(format: E, make_writer: W) -> Self
    where
        E: FormatEvent<Registry, DefaultFields> + Send + Sync + 'static,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(make_writer)
            .event_format(format)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// The sink's private dispatcher, for emitting `tracing` events with
    /// structured fields through `tracing::dispatcher::with_default`.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Writes one already formatted message.
    ///
    /// The event is handed straight to the dispatcher instead of going through
    /// the `tracing` macros, so the crate-wide `max_level_*` features cannot
    /// drop a message the logger's threshold admitted.
    pub(crate) fn emit(&self, severity: Severity, message: &str) {
        let metadata = event_metadata(severity);
        if !self.dispatch.enabled(metadata) {
            return;
        }
        let Some(field) = metadata.fields().field("message") else {
            return;
        };
        let values = [(&field, Some(&message as &dyn Value))];
        let value_set = metadata.fields().value_set(&values);
        self.dispatch.event(&Event::new(metadata, &value_set));
    }
}

macro_rules! event_callsite {
    ($callsite:ident, $metadata:ident, $level:expr) => {
        static $callsite: DefaultCallsite = DefaultCallsite::new(&$metadata);
        static $metadata: Metadata<'static> = Metadata::new(
            "levellog event",
            "levellog",
            $level,
            Some(file!()),
            Some(line!()),
            Some(module_path!()),
            FieldSet::new(&["message"], Identifier(&$callsite)),
            Kind::EVENT,
        );
    };
}

event_callsite!(INFO_CALLSITE, INFO_METADATA, Level::INFO);
event_callsite!(WARN_CALLSITE, WARN_METADATA, Level::WARN);
event_callsite!(ERROR_CALLSITE, ERROR_METADATA, Level::ERROR);

fn event_metadata(severity: Severity) -> &'static Metadata<'static> {
    match severity {
        Severity::Info => &INFO_METADATA,
        Severity::Warning => &WARN_METADATA,
        Severity::Error => &ERROR_METADATA,
    }
}

/// Splits an event into its message and its remaining fields.
#[derive(Default)]
pub(crate) struct EventFields {
    pub message: String,
    pub extra: Vec<(&'static str, String)>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.extra.push((field.name(), format!("{value:?}")));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.extra.push((field.name(), format!("{value:?}")));
        }
    }
}
