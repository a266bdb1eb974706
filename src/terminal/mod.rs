//! Terminal sinks: where widgets write their output.
//!
//! Widgets only ever need two things from a terminal: a place to append text
//! and a way to measure how many columns a string will occupy. The
//! [`Terminal`] trait captures exactly that. [`OutputBuffer`] collects output
//! in memory and [`Console`] forwards it to stdout.

mod console;
pub mod markup;
mod output;

pub use console::{Console, DEFAULT_WIDTH};
pub use output::OutputBuffer;

/// A text sink that widgets draw into.
///
/// Implementations must measure text the same way they will later display
/// it, including treating face markers as zero-width.
pub trait Terminal {
    /// Append `text` verbatim.
    fn write(&mut self, text: &str);

    /// Number of display columns `text` occupies.
    fn string_width(&self, text: &str) -> usize;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }

    fn string_width(&self, text: &str) -> usize {
        (**self).string_width(text)
    }
}
