// src/infra/config.rs: Logger configuration loading (TOML)

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::MakeWriter;

use crate::core::severity::Severity;
use crate::infra::errors::LogError;
use crate::sink::{ConsoleFormat, JsonFormat, Sink, TimeFormat};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Severity,

    #[serde(default)]
    pub sink: SinkConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkFormat {
    #[default]
    Console,
    Json,
}

impl FromStr for SinkFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            _ => Err(LogError::InvalidSinkFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SinkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("console"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub format: SinkFormat,

    /// Console only; ignored by the JSON sink.
    #[serde(default = "default_true")]
    pub color: bool,

    /// strftime override. Console defaults to `%Y-%m-%d %H:%M:%S`, JSON to RFC 3339.
    #[serde(default)]
    pub time_format: Option<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            format: SinkFormat::Console,
            color: true,
            time_format: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl SinkConfig {
    fn resolve_time_format(&self) -> Result<TimeFormat, LogError> {
        match (&self.time_format, self.format) {
            (Some(pattern), _) => TimeFormat::strftime(pattern.as_str()),
            (None, SinkFormat::Console) => Ok(TimeFormat::console_default()),
            (None, SinkFormat::Json) => Ok(TimeFormat::Rfc3339),
        }
    }

    /// Sink writing to stdout.
    pub fn build(&self) -> Result<Sink, LogError> {
        self.build_to(std::io::stdout)
    }

    pub fn build_to<W>(&self, make_writer: W) -> Result<Sink, LogError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let time_format = self.resolve_time_format()?;
        let sink = match self.format {
            SinkFormat::Console => Sink::from_format(
                ConsoleFormat::new(self.color).with_time_format(time_format),
                make_writer,
            ),
            SinkFormat::Json => Sink::from_format(JsonFormat::new(time_format), make_writer),
        };
        Ok(sink)
    }
}

impl LoggerConfig {
    pub fn load_from(path: &Path) -> Result<Self, LogError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, LogError> {
        let config: LoggerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LogError> {
        self.sink.resolve_time_format().map(|_| ())
    }
}
