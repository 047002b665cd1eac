// src/sink/console.rs: Human-readable console lines

use std::fmt;

use chrono::Local;
use crossterm::style::{StyledContent, Stylize};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::{EventFields, TimeFormat};
use crate::core::severity::Severity;

/// Renders `<time> <LVL> [key="value" ...] > <message>`.
///
/// The message always closes the line. String field values are quoted.
#[derive(Debug, Clone)]
pub struct ConsoleFormat {
    color: bool,
    time_format: TimeFormat,
}

impl ConsoleFormat {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            time_format: TimeFormat::console_default(),
        }
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }
}

fn colored_tag(severity: Severity) -> StyledContent<&'static str> {
    let tag = severity.short_tag();
    match severity {
        Severity::Info => tag.green(),
        Severity::Warning => tag.yellow(),
        Severity::Error => tag.red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let severity = Severity::from_level(event.metadata().level());
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let time = self.time_format.render(&Local::now());
        if self.color {
            write!(writer, "{} {}", time.as_str().dim(), colored_tag(severity))?;
        } else {
            write!(writer, "{} {}", time, severity.short_tag())?;
        }

        for (name, value) in &fields.extra {
            if self.color {
                write!(writer, " {}={}", name.cyan(), value)?;
            } else {
                write!(writer, " {name}={value}")?;
            }
        }

        writeln!(writer, " > {}", fields.message)
    }
}
