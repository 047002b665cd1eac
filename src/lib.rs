// src/lib.rs: Library root for levellog

pub mod cli;
pub mod core;
pub mod infra;
pub mod sink;

pub use crate::core::logger::{LevelLogger, Logger};
pub use crate::core::severity::Severity;
pub use crate::infra::config::{LoggerConfig, SinkConfig, SinkFormat};
pub use crate::infra::errors::LogError;
pub use crate::sink::{CaptureBuffer, Sink, TimeFormat};
