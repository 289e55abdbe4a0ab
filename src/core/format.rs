//! Template-driven record formatting
//!
//! A record is rendered through a printf-like template where `%` introduces
//! a one-character directive:
//!
//! | Directive | Output |
//! |-----------|-----------------------------------|
//! | `%t` | current local time (per [`TimeFormat`]) |
//! | `%f` | source file basename |
//! | `%l` | source line |
//! | `%M` | calling method |
//! | `%p` | severity tag (`DEBUG`/`WARN`/`ERROR`) |
//! | `%m` | message |
//! | `%n` | newline |
//! | `%%` | literal `%` |
//!
//! Any other character after `%` is a defined no-op and contributes nothing.
//! A trailing unterminated `%` is dropped.
//!
//! The template and the time format are process-wide and mutated through
//! [`set_log_format`] / [`set_time_format`]. Set them before concurrent
//! logging starts; later mutation is safe (the options live behind a lock)
//! but records in flight may render with either value.

use super::record::LogRecord;
use chrono::Local;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt::Write as _;

/// Default record template: `[time] [file:line] [tag] message\n`.
pub const DEFAULT_LOG_FORMAT: &str = "[%t] [%f:%l] [%p] %m%n";

/// A strftime-style time format plus the byte length its output is expected
/// to fit in, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pub format: Cow<'static, str>,
    pub size_in_bytes: u16,
}

/// Default time format: `31-12-2025 23:59:59`.
pub const DEFAULT_TIME_FORMAT: TimeFormat = TimeFormat {
    format: Cow::Borrowed("%d-%m-%Y %T"),
    size_in_bytes: 20,
};

impl Default for TimeFormat {
    fn default() -> Self {
        DEFAULT_TIME_FORMAT
    }
}

/// Snapshot of the process-wide formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub log_format: Cow<'static, str>,
    pub time_format: TimeFormat,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            log_format: Cow::Borrowed(DEFAULT_LOG_FORMAT),
            time_format: DEFAULT_TIME_FORMAT,
        }
    }
}

static OPTIONS: RwLock<FormatOptions> = RwLock::new(FormatOptions {
    log_format: Cow::Borrowed(DEFAULT_LOG_FORMAT),
    time_format: DEFAULT_TIME_FORMAT,
});

/// Replace the process-wide record template.
pub fn set_log_format(format: impl Into<Cow<'static, str>>) {
    OPTIONS.write().log_format = format.into();
}

/// Replace the process-wide time format.
pub fn set_time_format(format: TimeFormat) {
    OPTIONS.write().time_format = format;
}

/// Snapshot the current process-wide options.
pub fn options() -> FormatOptions {
    OPTIONS.read().clone()
}

/// Render `record` with the current process-wide options.
pub fn render(record: &LogRecord) -> String {
    render_with(record, &options())
}

/// Render `record` with explicit options.
pub fn render_with(record: &LogRecord, options: &FormatOptions) -> String {
    let template = options.log_format.as_ref();
    let mut out = String::with_capacity(template.len() + record.message.len());
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push_str(&rendered_time(&options.time_format)),
            Some('f') => out.push_str(&record.file),
            // Writing an integer into a String cannot fail.
            Some('l') => {
                let _ = write!(out, "{}", record.line);
            }
            Some('M') => out.push_str(&record.method),
            Some('p') => out.push_str(record.tag()),
            Some('m') => out.push_str(&record.message),
            Some('n') => out.push('\n'),
            Some('%') => out.push('%'),
            // Unknown directive: consumed, contributes nothing.
            Some(_) => {}
            // Trailing unterminated '%': dropped.
            None => {}
        }
    }

    out
}

/// Format the current local time, capped at `size_in_bytes - 1` bytes.
///
/// The cap mirrors the fixed `strftime` buffer of classic loggers: an
/// overlong custom format truncates silently (on a char boundary) rather
/// than growing the output. An invalid format string renders as an empty
/// timestamp instead of failing the logging call.
fn rendered_time(time_format: &TimeFormat) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(time_format.format.as_ref())).is_err() {
        out.clear();
        return out;
    }

    let cap = usize::from(time_format.size_in_bytes.saturating_sub(1));
    if out.len() > cap {
        let mut end = cap;
        while end > 0 && !out.is_char_boundary(end) {
            end -= 1;
        }
        out.truncate(end);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Severity;

    fn sample_record() -> LogRecord {
        LogRecord::new(Severity::Error, "app.cpp", 42, "run", "boom".into())
    }

    fn fixed_options(template: &'static str) -> FormatOptions {
        FormatOptions {
            log_format: Cow::Borrowed(template),
            time_format: DEFAULT_TIME_FORMAT,
        }
    }

    #[test]
    fn test_default_template_round_trip() {
        let rendered = render_with(&sample_record(), &FormatOptions::default());

        // Non-empty timestamp inside the first bracket pair.
        let time = rendered
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .expect("timestamp bracket");
        assert!(!time.is_empty());

        // Then file:line, tag, message, trailing newline, in order.
        let after_time = rendered.find("] ").expect("end of timestamp");
        let tail = &rendered[after_time..];
        assert!(tail.contains("app.cpp:42"));
        let tag_pos = tail.find("ERROR").expect("tag");
        let msg_pos = tail.find("boom").expect("message");
        assert!(tail.find("app.cpp:42").unwrap() < tag_pos);
        assert!(tag_pos < msg_pos);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_unknown_directive_is_noop() {
        let record = LogRecord::new(Severity::Debug, "f.rs", 1, "m", "hi".into());
        assert_eq!(render_with(&record, &fixed_options("%x%m")), "hi");
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!(render_with(&sample_record(), &fixed_options("100%%")), "100%");
    }

    #[test]
    fn test_trailing_percent_dropped() {
        assert_eq!(render_with(&sample_record(), &fixed_options("%m%")), "boom");
    }

    #[test]
    fn test_method_directive() {
        assert_eq!(render_with(&sample_record(), &fixed_options("%M")), "run");
    }

    #[test]
    fn test_literal_text_copied() {
        let rendered = render_with(&sample_record(), &fixed_options("at %f line %l."));
        assert_eq!(rendered, "at app.cpp line 42.");
    }

    #[test]
    fn test_time_truncates_to_size() {
        let options = FormatOptions {
            log_format: Cow::Borrowed("%t"),
            time_format: TimeFormat {
                format: Cow::Borrowed("%Y-%m-%d %H:%M:%S"),
                size_in_bytes: 5,
            },
        };
        let rendered = render_with(&sample_record(), &options);
        // Fits within the buffer minus the terminator byte.
        assert_eq!(rendered.len(), 4);
    }

    #[test]
    fn test_default_time_fits_declared_size() {
        let options = FormatOptions {
            log_format: Cow::Borrowed("%t"),
            time_format: DEFAULT_TIME_FORMAT,
        };
        let rendered = render_with(&sample_record(), &options);
        assert!(!rendered.is_empty());
        assert!(rendered.len() < usize::from(DEFAULT_TIME_FORMAT.size_in_bytes));
    }

    #[test]
    fn test_process_wide_setters() {
        set_log_format("<%p> %m%n");
        let rendered = render(&sample_record());
        assert_eq!(rendered, "<ERROR> boom\n");

        set_time_format(TimeFormat {
            format: Cow::Borrowed("%Y"),
            size_in_bytes: 8,
        });
        set_log_format("[%t] %m%n");
        let rendered = render(&sample_record());
        // A bare year: four digits inside the brackets.
        let time = rendered
            .strip_prefix('[')
            .and_then(|rest| rest.split(']').next())
            .expect("timestamp bracket");
        assert_eq!(time.len(), 4);
        assert!(time.chars().all(|c| c.is_ascii_digit()));

        // Restore defaults for any test that reads the global options.
        set_log_format(DEFAULT_LOG_FORMAT);
        set_time_format(DEFAULT_TIME_FORMAT);
    }
}
