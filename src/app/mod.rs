//! Application state and the adapter layer that wires the view-state
//! machines to events.
//!
//! The state machines in [`crate::state`] are pure; [`App`] owns the
//! mutable instances, feeds them ticks and input, and tracks the page
//! geometry the renderer measured last frame.

mod handlers;
pub mod interaction;

pub use interaction::{ClickAction, HitRegistry};

use crate::config::{
    self, NAV_LOOKAHEAD_ROWS, REVEAL_THRESHOLD, SCROLL_THROTTLE_TICKS, TYPEWRITER_PHRASES,
};
use crate::models::ProjectRecord;
use crate::state::filter::{filter_projects, FilterState};
use crate::state::form::{FieldKind, FormState};
use crate::state::nav::{self, MenuState, SectionBounds, SectionId};
use crate::state::reveal::{RevealSet, RevealTarget};
use crate::state::tabs::TimelineTab;
use crate::state::theme::ThemeSetting;
use crate::state::throttle::Throttle;
use crate::state::typewriter::TypewriterState;
use crate::storage::SettingsStore;

/// Rows reserved for the header bar above the page viewport.
pub const HEADER_ROWS: u16 = 2;

/// What keyboard input currently goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page-level navigation keys.
    #[default]
    Page,
    /// Typing into one contact form field.
    Field(FieldKind),
    /// The contact form submit control.
    Submit,
}

/// Page geometry measured during the last render: section row ranges,
/// reveal targets, and the total page height.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<SectionBounds>,
    pub targets: Vec<RevealTarget>,
    pub total_rows: usize,
}

/// Top-level application state.
pub struct App {
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
    pub width: u16,
    pub height: u16,

    pub theme: ThemeSetting,
    /// Settings store, or None when no config directory is available;
    /// the theme then lasts only for the session.
    pub settings: Option<SettingsStore>,
    pub projects: Vec<ProjectRecord>,

    /// Scroll offset into the virtual page, in rows.
    pub scroll: usize,
    pub active_section: SectionId,
    pub menu: MenuState,
    pub typewriter: TypewriterState,
    pub filter: FilterState,
    pub tab: TimelineTab,
    pub form: FormState,
    pub reveal: RevealSet,
    pub focus: Focus,

    pub page: PageLayout,
    pub hits: HitRegistry,
    scroll_gate: Throttle,
}

impl App {
    pub fn new(
        theme: ThemeSetting,
        settings: Option<SettingsStore>,
        projects: Vec<ProjectRecord>,
    ) -> Self {
        let phrases = TYPEWRITER_PHRASES.iter().map(|s| s.to_string()).collect();
        Self {
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            width: 0,
            height: 0,
            theme,
            settings,
            projects,
            scroll: 0,
            active_section: SectionId::Home,
            menu: MenuState::default(),
            typewriter: TypewriterState::new(phrases),
            filter: FilterState::default(),
            tab: TimelineTab::default(),
            form: FormState::default(),
            reveal: RevealSet::default(),
            focus: Focus::Page,
            page: PageLayout::default(),
            hits: HitRegistry::default(),
            scroll_gate: Throttle::new(SCROLL_THROTTLE_TICKS),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.mark_dirty();
    }

    /// Rows of page visible below the header.
    pub fn viewport_rows(&self) -> usize {
        self.height.saturating_sub(HEADER_ROWS) as usize
    }

    pub fn max_scroll(&self) -> usize {
        self.page.total_rows.saturating_sub(self.viewport_rows())
    }

    /// One tick of the event loop: drive the timer-based machines and, on
    /// the throttled schedule, the scroll-derived state.
    pub fn on_tick(&mut self) {
        self.tick_count += 1;
        let tick = self.tick_count;

        if self.typewriter.advance(tick) {
            self.mark_dirty();
        }
        if self.form.advance(tick) {
            self.mark_dirty();
        }
        let visible_cards = filter_projects(&self.projects, self.filter.selection()).len();
        if self.filter.stagger_running(visible_cards, tick) {
            self.mark_dirty();
        }
        if self.scroll_gate.ready(tick) {
            self.evaluate_scroll();
        }
    }

    /// Throttled scroll evaluation: active nav link plus reveals. When no
    /// section interval matches the probe, the previous active link stays.
    fn evaluate_scroll(&mut self) {
        if let Some(id) = nav::active_section(self.scroll, NAV_LOOKAHEAD_ROWS, &self.page.sections)
        {
            if id != self.active_section {
                self.active_section = id;
                self.mark_dirty();
            }
        }
        let viewport = self.viewport_rows();
        if self
            .reveal
            .check(&self.page.targets, self.scroll, viewport, REVEAL_THRESHOLD)
        {
            self.mark_dirty();
        }
    }

    /// Scroll by a signed number of rows. Suspended while the menu is open.
    pub fn scroll_by(&mut self, delta: i64) {
        if self.menu.is_open() {
            return;
        }
        let max = self.max_scroll() as i64;
        let next = (self.scroll as i64 + delta).clamp(0, max);
        if next as usize != self.scroll {
            self.scroll = next as usize;
            self.mark_dirty();
        }
    }

    pub fn scroll_to_top(&mut self) {
        if self.scroll != 0 {
            self.scroll = 0;
            self.mark_dirty();
        }
    }

    /// Jump to a section: closes the menu and marks the link active
    /// immediately rather than waiting for the next throttled evaluation.
    pub fn scroll_to_section(&mut self, id: SectionId) {
        self.menu.close();
        if let Some(bounds) = self.page.sections.iter().find(|s| s.id == id) {
            self.scroll = bounds.top.min(self.max_scroll());
        }
        self.active_section = id;
        self.mark_dirty();
    }

    /// Flip the theme and persist the new value synchronously. A failed
    /// write is logged and swallowed; the theme still applies.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
        if let Some(store) = &self.settings {
            if let Err(err) = store.save_theme(self.theme) {
                tracing::warn!(%err, "theme not persisted");
            }
        }
        self.mark_dirty();
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        self.mark_dirty();
    }

    /// Move keyboard focus, blurring (and so re-validating) the field being
    /// left.
    pub fn set_focus(&mut self, focus: Focus) {
        if let Focus::Field(kind) = self.focus {
            if focus != Focus::Field(kind) {
                self.form.blur(kind);
            }
        }
        self.focus = focus;
        self.mark_dirty();
    }

    /// Row ranges of the projects currently passing the filter, used by the
    /// renderer for the card stagger.
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        filter_projects(&self.projects, self.filter.selection())
    }

    /// Jump target for digit keys 1..=5.
    pub fn section_by_number(n: u8) -> Option<SectionId> {
        SectionId::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    /// Initial projects path, relative to the working directory.
    pub fn default_projects_path() -> &'static str {
        config::PROJECTS_FILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_page() -> App {
        let mut app = App::new(ThemeSetting::Dark, None, Vec::new());
        app.update_terminal_dimensions(100, 42);
        app.page = PageLayout {
            sections: vec![
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
            ],
            targets: vec![RevealTarget::new("about", 20, 30)],
            total_rows: 200,
        };
        app
    }

    #[test]
    fn test_scroll_clamped_to_page() {
        let mut app = app_with_page();
        app.scroll_by(-10);
        assert_eq!(app.scroll, 0);
        app.scroll_by(10_000);
        assert_eq!(app.scroll, app.max_scroll());
    }

    #[test]
    fn test_open_menu_suspends_scroll() {
        let mut app = app_with_page();
        app.toggle_menu();
        app.scroll_by(5);
        assert_eq!(app.scroll, 0);
        app.toggle_menu();
        app.scroll_by(5);
        assert_eq!(app.scroll, 5);
    }

    #[test]
    fn test_scroll_to_section_sets_active_and_closes_menu() {
        let mut app = app_with_page();
        app.toggle_menu();
        app.scroll_to_section(SectionId::About);
        assert!(!app.menu.is_open());
        assert_eq!(app.active_section, SectionId::About);
        assert_eq!(app.scroll, 20);
    }

    #[test]
    fn test_active_link_kept_when_nothing_matches() {
        let mut app = app_with_page();
        app.scroll_to_section(SectionId::About);
        // Scroll far past every section; ticks past the throttle window.
        app.scroll = 150;
        for _ in 0..(SCROLL_THROTTLE_TICKS * 3) {
            app.on_tick();
        }
        assert_eq!(app.active_section, SectionId::About);
    }

    #[test]
    fn test_tick_updates_active_link() {
        let mut app = app_with_page();
        app.scroll = 30;
        for _ in 0..(SCROLL_THROTTLE_TICKS * 3) {
            app.on_tick();
        }
        assert_eq!(app.active_section, SectionId::About);
    }

    #[test]
    fn test_blur_on_focus_change() {
        let mut app = app_with_page();
        app.set_focus(Focus::Field(FieldKind::Email));
        app.form.input(FieldKind::Email, 'x');
        app.set_focus(Focus::Page);
        assert!(app.form.field(FieldKind::Email).error.is_some());
    }

    #[test]
    fn test_section_by_number() {
        assert_eq!(App::section_by_number(1), Some(SectionId::Home));
        assert_eq!(App::section_by_number(5), Some(SectionId::Contact));
        assert_eq!(App::section_by_number(0), None);
        assert_eq!(App::section_by_number(6), None);
    }

    #[test]
    fn test_theme_toggle_without_store_still_applies() {
        let mut app = app_with_page();
        let before = app.theme;
        app.toggle_theme();
        assert_eq!(app.theme, before.flipped());
        app.toggle_theme();
        assert_eq!(app.theme, before);
    }
}
