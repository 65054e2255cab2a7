//! Responsive layout context.
//!
//! Encapsulates terminal dimensions so render functions can make
//! responsive decisions; a compact width collapses the header nav behind
//! the menu toggle, the terminal analog of a phone-width viewport.

/// Width below which the nav links collapse behind the menu toggle.
pub const COMPACT_WIDTH: u16 = 80;

/// Widest column the page content will use; larger terminals get margins.
pub const MAX_CONTENT_WIDTH: u16 = 100;

/// Terminal dimensions for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Compact terminals collapse the nav and tighten paddings.
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH
    }

    /// Usable width for page text, after side margins.
    pub fn content_width(&self) -> u16 {
        let margin = if self.is_compact() { 2 } else { 4 };
        self.width.saturating_sub(margin * 2).min(MAX_CONTENT_WIDTH)
    }

    /// Left margin that centers the content column.
    pub fn content_x(&self) -> u16 {
        (self.width.saturating_sub(self.content_width())) / 2
    }
}
