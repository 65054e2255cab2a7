//! Navigation state: the section menu and the active section link.

use crate::config::HEADER_SCROLLED_ROWS;

/// The five sections of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

/// Row range of one rendered section within the virtual page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: SectionId,
    /// First row of the section.
    pub top: usize,
    /// Rows occupied, so the section spans `[top, top + height)`.
    pub height: usize,
}

/// Pick the section whose half-open row interval contains
/// `scroll + lookahead`. Returns `None` when no interval matches; the
/// caller keeps the previously active link in that case so the highlight
/// never flickers between sections.
pub fn active_section(
    scroll: usize,
    lookahead: usize,
    sections: &[SectionBounds],
) -> Option<SectionId> {
    let probe = scroll + lookahead;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id)
}

/// Whether the header should use its "scrolled" treatment.
pub fn header_scrolled(scroll: usize) -> bool {
    scroll > HEADER_SCROLLED_ROWS
}

/// Open/closed state of the compact-width section menu. While the menu is
/// open, page scrolling is suspended by the caller.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: bool,
    /// Highlighted row inside the open menu.
    pub selected: usize,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Always ends in the opposite of the current state.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    /// Close the menu. Closing an already closed menu is a no-op.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SectionId::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(SectionId::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: SectionId::Home,
                top: 0,
                height: 20,
            },
            SectionBounds {
                id: SectionId::About,
                top: 20,
                height: 30,
            },
            SectionBounds {
                id: SectionId::Projects,
                top: 50,
                height: 40,
            },
        ]
    }

    #[test]
    fn test_active_section_contains_probe() {
        assert_eq!(active_section(0, 8, &page()), Some(SectionId::Home));
        assert_eq!(active_section(15, 8, &page()), Some(SectionId::About));
        assert_eq!(active_section(45, 8, &page()), Some(SectionId::Projects));
    }

    #[test]
    fn test_interval_is_half_open() {
        // probe 20 is the first row of About, not the end of Home
        assert_eq!(active_section(12, 8, &page()), Some(SectionId::About));
    }

    #[test]
    fn test_past_the_last_section_matches_nothing() {
        assert_eq!(active_section(100, 8, &page()), None);
    }

    #[test]
    fn test_empty_section_list_matches_nothing() {
        assert_eq!(active_section(0, 8, &[]), None);
    }

    #[test]
    fn test_menu_toggle_always_flips() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut menu = MenuState::default();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut menu = MenuState::default();
        menu.select_prev();
        assert_eq!(menu.selected, SectionId::ALL.len() - 1);
        menu.select_next();
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_header_scrolled_threshold() {
        assert!(!header_scrolled(0));
        assert!(!header_scrolled(HEADER_SCROLLED_ROWS));
        assert!(header_scrolled(HEADER_SCROLLED_ROWS + 1));
    }
}
