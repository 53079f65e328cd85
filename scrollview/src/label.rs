use crate::text::display_width;
use crate::types::Style;

/// A content child: one or more lines of text stacked into the content
/// area. Height defaults to the number of text lines but can be set
/// explicitly, e.g. to reserve blank rows below short text.
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    height: Option<u16>,
    style: Style,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            height: None,
            style: Style::default(),
        }
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn style_ref(&self) -> &Style {
        &self.style
    }

    /// Width in display cells of the widest text line.
    pub fn width(&self) -> u16 {
        self.text
            .lines()
            .map(display_width)
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }

    /// Rows this label occupies in the content area.
    pub fn rows(&self) -> u16 {
        match self.height {
            Some(h) => h,
            // lines() yields nothing for an empty string, but an empty
            // label still occupies one row.
            None => (self.text.lines().count().max(1)).min(u16::MAX as usize) as u16,
        }
    }
}
