// src/core/logger.rs: Level-gated logging facade

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::core::severity::Severity;
use crate::infra::config::LoggerConfig;
use crate::infra::errors::LogError;
use crate::sink::Sink;

/// Forwards messages at or above a minimum severity to a structured sink.
///
/// The threshold is an atomic, so a shared `&Logger` (or `Arc<Logger>`) can be
/// re-levelled while other threads are logging. Each emitted line is written
/// to the sink in one piece.
///
/// ```
/// use levellog::{logger_info, logger_warning, Logger, Severity, Sink, CaptureBuffer};
///
/// let buffer = CaptureBuffer::new();
/// let logger = Logger::with_sink(Severity::Warning, Sink::json(buffer.clone()));
///
/// logger_info!(logger, "suppressed {}", 1);
/// assert!(buffer.is_empty());
///
/// logger_warning!(logger, "disk at {:.1}%", 93.27);
/// assert!(buffer.contents().contains("\"message\":\"disk at 93.3%\""));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    sink: Sink,
}

impl Logger {
    /// Logger writing color-coded console lines to stdout.
    pub fn new(level: Severity) -> Self {
        Self::with_sink(level, Sink::console())
    }

    pub fn with_sink(level: Severity, sink: Sink) -> Self {
        Self {
            level: AtomicU8::new(level.rank()),
            sink,
        }
    }

    /// Builds the threshold and the stdout sink from configuration.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LogError> {
        Ok(Self::with_sink(config.level, config.sink.build()?))
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Emits `args` at `severity` if it clears the current threshold.
    /// Suppressed calls never format their arguments.
    ///
    /// The message is rendered before it reaches the sink, so an argument
    /// whose `Display` itself logs is safe.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }
        match args.as_str() {
            Some(message) => self.sink.emit(severity, message),
            None => self.sink.emit(severity, &args.to_string()),
        }
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.log_level()
    }

    pub fn log_level(&self) -> Severity {
        Severity::from_rank_saturating(self.level.load(Ordering::Acquire))
    }

    /// Replaces the threshold; applies to every call issued afterwards.
    pub fn set_log_level(&self, level: Severity) {
        self.level.store(level.rank(), Ordering::Release);
    }
}

/// The leveled logging surface, for code that should not care which logger
/// it is handed.
pub trait LevelLogger: Send + Sync {
    fn info(&self, args: fmt::Arguments<'_>);
    fn warning(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
    fn set_log_level(&self, level: Severity);
}

impl LevelLogger for Logger {
    fn info(&self, args: fmt::Arguments<'_>) {
        Logger::info(self, args);
    }

    fn warning(&self, args: fmt::Arguments<'_>) {
        Logger::warning(self, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        Logger::error(self, args);
    }

    fn set_log_level(&self, level: Severity) {
        Logger::set_log_level(self, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CaptureBuffer;

    fn test_logger(level: Severity) -> (Logger, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        (Logger::with_sink(level, Sink::json(buffer.clone())), buffer)
    }

    #[test]
    fn test_initial_level() {
        let (logger, _) = test_logger(Severity::Info);
        assert_eq!(logger.log_level(), Severity::Info);
    }

    #[test]
    fn test_emits_iff_at_or_above_threshold() {
        for threshold in Severity::ALL {
            let (logger, buffer) = test_logger(threshold);
            for severity in Severity::ALL {
                buffer.clear();
                logger.log(severity, format_args!("test"));
                assert_eq!(
                    !buffer.is_empty(),
                    severity >= threshold,
                    "severity {severity} at threshold {threshold}"
                );
            }
        }
    }

    #[test]
    fn test_is_enabled_tracks_set_level() {
        let (logger, _) = test_logger(Severity::Error);
        assert!(!logger.is_enabled(Severity::Warning));
        logger.set_log_level(Severity::Warning);
        assert!(logger.is_enabled(Severity::Warning));
        assert!(!logger.is_enabled(Severity::Info));
    }

    #[test]
    fn test_suppressed_call_does_not_format() {
        struct Exploding;
        impl fmt::Display for Exploding {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("suppressed arguments must not be formatted");
            }
        }

        let (logger, buffer) = test_logger(Severity::Error);
        logger.info(format_args!("{}", Exploding));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_sink_output_agrees_with_is_enabled() {
        for threshold in Severity::ALL {
            let (logger, buffer) = test_logger(threshold);
            for severity in Severity::ALL {
                buffer.clear();
                logger.log(severity, format_args!("{severity} at {threshold}"));
                assert_eq!(logger.is_enabled(severity), !buffer.is_empty());
            }
        }
    }

    struct Nested<'a>(&'a Logger);

    impl fmt::Display for Nested<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            crate::logger_warning!(self.0, "rendering nested value");
            f.write_str("nested")
        }
    }

    #[test]
    fn test_argument_that_logs_to_same_logger() {
        let (logger, buffer) = test_logger(Severity::Info);
        crate::logger_error!(logger, "outer {}", Nested(&logger));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2, "got {lines:?}");
        assert!(lines[0].contains("\"message\":\"rendering nested value\""));
        assert!(lines[1].contains("\"message\":\"outer nested\""));
    }

    #[test]
    fn test_argument_that_logs_to_another_logger() {
        let (audit, audit_buffer) = test_logger(Severity::Info);
        let (logger, buffer) = test_logger(Severity::Info);
        crate::logger_info!(logger, "request {}", Nested(&audit));

        assert_eq!(audit_buffer.lines().len(), 1);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"message\":\"request nested\""));
    }

    #[derive(Default)]
    struct RecordingLogger {
        level: AtomicU8,
        records: std::sync::Mutex<Vec<(Severity, String)>>,
    }

    impl RecordingLogger {
        fn record(&self, severity: Severity, args: fmt::Arguments<'_>) {
            if severity.rank() >= self.level.load(Ordering::Acquire) {
                self.records.lock().unwrap().push((severity, args.to_string()));
            }
        }
    }

    impl LevelLogger for RecordingLogger {
        fn info(&self, args: fmt::Arguments<'_>) {
            self.record(Severity::Info, args);
        }

        fn warning(&self, args: fmt::Arguments<'_>) {
            self.record(Severity::Warning, args);
        }

        fn error(&self, args: fmt::Arguments<'_>) {
            self.record(Severity::Error, args);
        }

        fn set_log_level(&self, level: Severity) {
            self.level.store(level.rank(), Ordering::Release);
        }
    }

    fn check_disk(log: &dyn LevelLogger, used_percent: u8) {
        log.set_log_level(Severity::Warning);
        log.info(format_args!("checking disk"));
        if used_percent > 90 {
            log.warning(format_args!("disk at {used_percent}%"));
        }
    }

    #[test]
    fn test_level_logger_accepts_a_test_double() {
        let double = RecordingLogger::default();
        check_disk(&double, 95);
        assert_eq!(
            *double.records.lock().unwrap(),
            vec![(Severity::Warning, "disk at 95%".to_string())]
        );
    }

    #[test]
    fn test_level_logger_for_logger_delegates() {
        let (logger, buffer) = test_logger(Severity::Info);
        check_disk(&logger, 95);
        assert_eq!(logger.log_level(), Severity::Warning);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"level\":\"warn\""));
    }

    #[test]
    fn test_logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
