// src/cli/mod.rs: CLI definition (clap derive)

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::fmt::MakeWriter;

use crate::core::logger::Logger;
use crate::core::severity::Severity;
use crate::infra::config::{LoggerConfig, SinkFormat};
use crate::infra::errors::LogError;

#[derive(Parser, Debug)]
#[command(name = "levellog", about = "Emit a leveled log line", version)]
pub struct Cli {
    /// Config file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum severity to emit (info, warn, error)
    #[arg(short, long)]
    pub level: Option<Severity>,

    /// Output format (console or json)
    #[arg(short, long)]
    pub format: Option<SinkFormat>,

    /// Disable ANSI colors on the console sink
    #[arg(long)]
    pub no_color: bool,

    /// Severity of the message
    pub severity: Severity,

    /// Message words, joined with spaces
    #[arg(required = true, trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Loads the config file (or defaults) and applies flag overrides.
    pub fn resolve_config(&self) -> Result<LoggerConfig, LogError> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load_from(path)?,
            None => LoggerConfig::default(),
        };
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(format) = self.format {
            config.sink.format = format;
        }
        if self.no_color {
            config.sink.color = false;
        }
        Ok(config)
    }

    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    run_with_writer(cli, std::io::stdout)
}

/// Same as [`run`], but the sink writes to `make_writer` instead of stdout.
pub fn run_with_writer<W>(cli: &Cli, make_writer: W) -> anyhow::Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let config = cli.resolve_config()?;
    let sink = config.sink.build_to(make_writer)?;
    let logger = Logger::with_sink(config.level, sink);
    crate::logger_log!(logger, cli.severity, "{}", cli.message());
    Ok(())
}
