//! Section: A titled header line followed by child widgets.

use tracing::trace;

use super::traits::Widget;
use crate::error::{ensure, LayoutError};
use crate::terminal::markup::FACE_HEADER;
use crate::terminal::Terminal;

/// Configuration for section framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionConfig {
    /// One column in this many is kept free as a right margin.
    /// Zero disables the margin.
    pub margin_divisor: usize,
    /// Character repeated to fill the header line. Must be one column wide.
    pub fill: char,
    /// Face marker written at the start of the header line.
    pub face: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            margin_divisor: 20,
            fill: '-',
            face: FACE_HEADER.to_owned(),
        }
    }
}

/// A framed group of widgets.
///
/// Draws a header line of dashes ending in the bracketed title, then each
/// child in turn, all narrowed by the section's right margin.
pub struct Section {
    /// Optional title.
    name: Option<String>,
    /// Children, drawn in order.
    components: Vec<Box<dyn Widget>>,
    /// Configuration.
    config: SectionConfig,
}

impl Section {
    /// Create a section with a title.
    pub fn titled(name: impl Into<String>) -> Self {
        Self::with_config(Some(name.into()), SectionConfig::default())
    }

    /// Create a section whose header is a bare dashed line.
    pub fn untitled() -> Self {
        Self::with_config(None, SectionConfig::default())
    }

    /// Create a section with custom configuration.
    pub const fn with_config(name: Option<String>, config: SectionConfig) -> Self {
        Self {
            name,
            components: Vec::new(),
            config,
        }
    }

    /// Append a child widget.
    pub fn add_component(&mut self, component: impl Widget + 'static) {
        self.components.push(Box::new(component));
    }

    /// Number of child widgets.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the section has no children.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The section name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Title as shown in the header: `[name]`, or empty.
    pub fn title(&self) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map_or_else(String::new, |name| format!("[{name}]"))
    }

    /// Width left for the header and children once the margin is taken.
    pub const fn inner_width(&self, width: usize) -> usize {
        match width.checked_div(self.config.margin_divisor) {
            Some(margin) => width - margin,
            None => width,
        }
    }

    /// Verify the header fits and return the title width.
    fn check_header(&self, terminal: &dyn Terminal, title: &str, inner_width: usize) -> Result<usize, LayoutError> {
        let mut buf = [0; 4];
        let fill_width = terminal.string_width(self.config.fill.encode_utf8(&mut buf));
        if fill_width != 1 {
            return Err(LayoutError::FillWidth {
                fill: self.config.fill,
                width: fill_width,
            });
        }

        let needed = terminal.string_width(title);
        if needed > inner_width {
            return Err(LayoutError::TitleOverflow {
                needed,
                available: inner_width,
            });
        }
        Ok(needed)
    }

    fn draw_header(&self, terminal: &mut dyn Terminal, inner_width: usize) {
        let title = self.title();
        let title_width = ensure(self.check_header(terminal, &title, inner_width));
        let fill_width = inner_width - title_width;

        let mut header = String::with_capacity(self.config.face.len() + fill_width + title.len() + 1);
        header.push_str(&self.config.face);
        header.extend(std::iter::repeat(self.config.fill).take(fill_width));
        header.push_str(&title);
        header.push('\n');
        terminal.write(&header);
    }
}

impl Widget for Section {
    fn draw(&self, terminal: &mut dyn Terminal, width: usize) {
        let inner_width = self.inner_width(width);
        trace!(section = self.name(), width, inner_width, "section layout");

        self.draw_header(terminal, inner_width);
        for component in &self.components {
            component.draw(terminal, inner_width);
        }
    }

    fn check(&self, terminal: &dyn Terminal, width: usize) -> Result<(), LayoutError> {
        let inner_width = self.inner_width(width);
        self.check_header(terminal, &self.title(), inner_width)?;
        self.components
            .iter()
            .try_for_each(|component| component.check(terminal, inner_width))
    }
}

impl std::fmt::Debug for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("components", &self.components.len())
            .field("config", &self.config)
            .finish()
    }
}
