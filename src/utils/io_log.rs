//! Timestamped transcript of protocol traffic.
//!
//! Each line is `<local RFC 3339 time> <tag>: <text>` where the tag is `R`
//! for lines received from the GUI, `S` for lines sent to it, `A` for
//! annotations from the engine itself, and `E` for input errors.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Local, SecondsFormat};

pub struct IoLog {
    sink: Option<Box<dyn Write>>,
}

impl IoLog {
    /// A log that writes nothing.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self { sink: Some(writer) }
    }

    /// Append to (or create) the file at `path`.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self::from_writer(Box::new(BufWriter::new(file))))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn received(&mut self, line: &str) -> io::Result<()> {
        self.write_entry('R', line)
    }

    pub fn sent(&mut self, line: &str) -> io::Result<()> {
        self.write_entry('S', line)
    }

    pub fn note(&mut self, text: &str) -> io::Result<()> {
        self.write_entry('A', text)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.write_entry('E', text)
    }

    fn write_entry(&mut self, tag: char, text: &str) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let stamp = Local::now().to_rfc3339_opts(SecondsFormat::Millis, false);
        writeln!(sink, "{stamp} {tag}: {text}")?;
        sink.flush()
    }
}

impl Default for IoLog {
    fn default() -> Self {
        Self::disabled()
    }
}
