use std::cell::RefCell;
use std::fs::File;
use std::io::{Result as IoResult, Write};
use std::path::Path;
use std::sync::Mutex;

/// Receiver for non-fatal warnings emitted while converting.
///
/// Conversions never consult process-wide logging state; callers hand a
/// sink to every operation that may warn.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

impl<F> WarningSink for F
where
    F: Fn(&str),
{
    fn warn(&self, message: &str) {
        self(message);
    }
}

/// Writes warnings to stderr and optionally mirrors them into a log file.
#[derive(Debug, Default)]
pub struct StderrSink {
    prefix: Option<String>,
    file: Option<Mutex<File>>,
}

impl StderrSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: None,
            file: None,
        }
    }

    /// Prepends `prefix: ` to every message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Mirrors warnings into `path` as `warning: <message>` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created.
    pub fn with_log_file(mut self, path: &Path) -> IoResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.file = Some(Mutex::new(file));
        Ok(self)
    }

    fn format(&self, message: &str) -> String {
        self.prefix
            .as_ref()
            .map_or_else(|| message.to_owned(), |p| format!("{p}: {message}"))
    }
}

impl WarningSink for StderrSink {
    fn warn(&self, message: &str) {
        let message = self.format(message);
        eprintln!("{message}");
        if let Some(writer) = &self.file
            && let Ok(mut file) = writer.lock()
        {
            let _ = writeln!(file, "warning: {message}");
        }
    }
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: RefCell<Vec<String>>,
}

impl CollectingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

/// Discards every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl WarningSink for SilentSink {
    fn warn(&self, _message: &str) {}
}
