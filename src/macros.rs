//! Call-site capture macros
//!
//! These wrap the leveled operations so that the source file, line, and
//! module of the call site travel with the record. Messages take `format!`
//! semantics.
//!
//! # Examples
//!
//! ```
//! use pattern_logger::prelude::*;
//! use pattern_logger::{debug, warning};
//!
//! let logger = Logger::new();
//! debug!(logger, "starting up");
//!
//! let port = 8080;
//! warning!(logger, "port {} already bound", port);
//! ```
//!
//! The `static_*` variants route through the process-wide facade:
//!
//! ```
//! use pattern_logger::static_debug;
//!
//! pattern_logger::facade::create_default();
//! static_debug!("no wiring required");
//! pattern_logger::facade::reset();
//! ```

/// Log a debug message on `$logger`, capturing the call site.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log a warning message on `$logger`, capturing the call site.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log an error message on `$logger`, capturing the call site.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log an error message with a cause appended, capturing the call site.
///
/// ```
/// # use pattern_logger::prelude::*;
/// # use pattern_logger::error_with_cause;
/// # let logger = Logger::new();
/// let cause = std::io::Error::other("connection reset");
/// error_with_cause!(logger, cause, "request failed");
/// ```
#[macro_export]
macro_rules! error_with_cause {
    ($logger:expr, $cause:expr, $($arg:tt)+) => {
        $logger.error_with_cause(file!(), line!(), module_path!(), format!($($arg)+), $cause)
    };
}

/// Open a debug-severity stream on `$logger`, capturing the call site.
#[macro_export]
macro_rules! debug_stream {
    ($logger:expr) => {
        $logger.debug_stream(file!(), line!(), module_path!())
    };
}

/// Open a warning-severity stream on `$logger`, capturing the call site.
#[macro_export]
macro_rules! warning_stream {
    ($logger:expr) => {
        $logger.warning_stream(file!(), line!(), module_path!())
    };
}

/// Open an error-severity stream on `$logger`, capturing the call site.
#[macro_export]
macro_rules! error_stream {
    ($logger:expr) => {
        $logger.error_stream(file!(), line!(), module_path!())
    };
}

/// Log a debug message through the process-wide facade.
#[macro_export]
macro_rules! static_debug {
    ($($arg:tt)+) => {
        $crate::facade::debug(file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log a warning message through the process-wide facade.
#[macro_export]
macro_rules! static_warning {
    ($($arg:tt)+) => {
        $crate::facade::warning(file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log an error message through the process-wide facade.
#[macro_export]
macro_rules! static_error {
    ($($arg:tt)+) => {
        $crate::facade::error(file!(), line!(), module_path!(), format!($($arg)+))
    };
}

/// Log an error with a cause through the process-wide facade.
#[macro_export]
macro_rules! static_error_with_cause {
    ($cause:expr, $($arg:tt)+) => {
        $crate::facade::error_with_cause(
            file!(),
            line!(),
            module_path!(),
            format!($($arg)+),
            $cause,
        )
    };
}

/// Open a debug-severity stream through the process-wide facade.
#[macro_export]
macro_rules! static_debug_stream {
    () => {
        $crate::facade::debug_stream(file!(), line!(), module_path!())
    };
}

/// Open a warning-severity stream through the process-wide facade.
#[macro_export]
macro_rules! static_warning_stream {
    () => {
        $crate::facade::warning_stream(file!(), line!(), module_path!())
    };
}

/// Open an error-severity stream through the process-wide facade.
#[macro_export]
macro_rules! static_error_stream {
    () => {
        $crate::facade::error_stream(file!(), line!(), module_path!())
    };
}
