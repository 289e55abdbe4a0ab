//! Standard file/console sink
//!
//! Routes a formatted record to the output file and/or the console streams
//! according to the configured [`SinkMode`]. Warning and error records go
//! to stderr, everything else to stdout. There is no buffering beyond what
//! the OS provides and no fsync.

use crate::core::config::{EngineConfig, FileMode, SinkMode};
use crate::core::error::{LoggerError, Result};
use crate::core::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

pub struct SinkWriter {
    mode: SinkMode,
    file: Option<File>,
}

impl SinkWriter {
    /// Open the sinks described by `config`.
    ///
    /// A file that fails to open disables file output for this writer and
    /// surfaces a diagnostic on stderr; the writer stays usable for console
    /// output. The file is not touched at all when the mode excludes it.
    pub fn open(config: &EngineConfig) -> Self {
        let file = if config.mode.includes_file() {
            match Self::open_file(config) {
                Ok(file) => Some(file),
                Err(e) => {
                    eprintln!("[LOGGER WARNING] {}; file output disabled", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            mode: config.mode,
            file,
        }
    }

    fn open_file(config: &EngineConfig) -> Result<File> {
        let path = config.file_path.as_ref().ok_or_else(|| {
            LoggerError::file_open(
                "<unset>",
                io::Error::new(io::ErrorKind::NotFound, "no output file path configured"),
            )
        })?;

        let mut options = OpenOptions::new();
        options.create(true);
        match config.file_mode {
            FileMode::Append => options.append(true),
            FileMode::Truncate => options.write(true).truncate(true),
        };

        options
            .open(path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
    }

    /// Whether file output is active (mode includes the file and it opened).
    pub fn file_enabled(&self) -> bool {
        self.file.is_some()
    }
}

impl Sink for SinkWriter {
    fn write(&self, text: &str, route_to_error: bool) -> Result<()> {
        if self.mode.includes_file() {
            if let Some(file) = &self.file {
                let mut handle: &File = file;
                handle.write_all(text.as_bytes())?;
            }
        }

        if self.mode.includes_console() {
            if route_to_error {
                io::stderr().lock().write_all(text.as_bytes())?;
            } else {
                io::stdout().lock().write_all(text.as_bytes())?;
            }
        }

        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(file) = &self.file {
            let mut handle: &File = file;
            handle.flush()?;
        }
        if self.mode.includes_console() {
            io::stdout().lock().flush()?;
            io::stderr().lock().flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.mode {
            SinkMode::File => "file",
            SinkMode::Console => "console",
            SinkMode::Both => "file+console",
            SinkMode::None => "none",
        }
    }
}
