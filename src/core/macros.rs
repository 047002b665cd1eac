//! Format-string macros bound to a [`Logger`](crate::Logger) instance.
//!
//! Each macro captures its arguments with `format_args!` and hands them to the
//! logger, so a call below the threshold never pays for formatting.
//!
//! ```
//! # use levellog::{logger_error, Logger, Severity, Sink, CaptureBuffer};
//! # let logger = Logger::with_sink(Severity::Info, Sink::json(CaptureBuffer::new()));
//! let err = std::io::Error::other("timeout");
//! logger_error!(logger, "Failed: {}", err);
//! ```

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! logger_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}
