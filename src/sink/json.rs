// src/sink/json.rs: One JSON object per event

use std::fmt;

use chrono::Local;
use serde::Serialize;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::{EventFields, TimeFormat};
use crate::core::severity::Severity;

#[derive(Debug, Clone)]
pub struct JsonFormat {
    time_format: TimeFormat,
}

impl JsonFormat {
    pub fn new(time_format: TimeFormat) -> Self {
        Self { time_format }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(TimeFormat::Rfc3339)
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    level: &'static str,
    time: String,
    message: &'a str,
}

impl<S, N> FormatEvent<S, N> for JsonFormat
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
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let entry = JsonEntry {
            level: Severity::from_level(event.metadata().level()).as_str(),
            time: self.time_format.render(&Local::now()),
            message: &fields.message,
        };
        let line = serde_json::to_string(&entry).map_err(|_| fmt::Error)?;
        writeln!(writer, "{line}")
    }
}
