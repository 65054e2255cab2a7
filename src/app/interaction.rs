//! Clickable-region registry.
//!
//! Components register hit areas while rendering; the event loop queries
//! the registry on mouse events to decide what a click means. Later
//! registrations win, so overlays (the section menu) naturally shadow the
//! page beneath them.

use ratatui::layout::Rect;

use crate::state::form::FieldKind;
use crate::state::nav::SectionId;
use crate::state::tabs::TimelineTab;

/// An action triggered by clicking a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Swallow the click without doing anything (overlay body).
    Ignore,
    /// Flip light/dark.
    ToggleTheme,
    /// Open/close the compact-width section menu.
    ToggleMenu,
    /// A header nav link.
    NavLink(SectionId),
    /// An entry inside the open section menu.
    MenuItem(SectionId),
    /// A project filter button, by option index.
    FilterSelect(usize),
    /// A timeline tab button.
    TabSelect(TimelineTab),
    /// Focus one contact form field.
    FocusField(FieldKind),
    /// The contact form submit control.
    Submit,
    /// The floating back-to-top control.
    BackToTop,
}

/// Hit areas registered during the last render.
#[derive(Debug, Clone, Default)]
pub struct HitRegistry {
    areas: Vec<(Rect, ClickAction)>,
}

impl HitRegistry {
    /// Drop all regions. Called at the top of every render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, area: Rect, action: ClickAction) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((area, action));
        }
    }

    /// The action under `(x, y)`, if any. The most recently registered
    /// matching region wins.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|(area, _)| {
                x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
            })
            .map(|(_, action)| *action)
    }
}
