//! `Console`: Stdout-backed terminal sink.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::Print;

use super::{markup, OutputBuffer, Terminal};

/// Width used when stdout is not attached to a terminal.
pub const DEFAULT_WIDTH: usize = 80;

/// A sink that buffers drawn text and prints it to stdout on [`flush`].
///
/// Face markers are stripped on the way out; they carry no styling here.
///
/// [`flush`]: Console::flush
#[derive(Debug, Default)]
pub struct Console {
    buffer: OutputBuffer,
}

impl Console {
    /// Create a console sink with an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: OutputBuffer::new(),
        }
    }

    /// Current width of the attached terminal in columns.
    ///
    /// Falls back to [`DEFAULT_WIDTH`] when the size cannot be queried.
    pub fn width(&self) -> usize {
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => usize::from(cols),
            _ => DEFAULT_WIDTH,
        }
    }

    /// Text drawn since the last flush.
    pub fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    /// Print everything drawn so far and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        queue!(stdout, Print(markup::strip(self.buffer.as_str())))?;
        stdout.flush()?;
        self.buffer.clear();
        Ok(())
    }
}

impl Terminal for Console {
    fn write(&mut self, text: &str) {
        self.buffer.write(text);
    }

    fn string_width(&self, text: &str) -> usize {
        self.buffer.string_width(text)
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("console flush on drop failed: {e}");
        }
    }
}
