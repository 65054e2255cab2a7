//! Keyboard and mouse event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::state::form::FieldKind;
use crate::state::nav::SectionId;

use super::{App, ClickAction, Focus};

/// Mouse wheel step, in rows.
const WHEEL_ROWS: i64 = 3;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Almost every key press changes something visible.
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.menu.is_open() {
            self.handle_menu_key(key);
            return;
        }

        match self.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Field(kind) => self.handle_field_key(kind, key),
            Focus::Submit => self.handle_submit_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.menu.close(),
            KeyCode::Up | KeyCode::Char('k') => self.menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.select_next(),
            KeyCode::Enter => {
                let id = SectionId::ALL[self.menu.selected];
                self.scroll_to_section(id);
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let viewport = self.viewport_rows() as i64;
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Char('b') => {
                if self.reveal.back_to_top {
                    self.scroll_to_top();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-viewport),
            KeyCode::PageDown => self.scroll_by(viewport),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_by(i64::MAX / 2),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(id) = Self::section_by_number(c as u8 - b'0') {
                    self.scroll_to_section(id);
                }
            }
            KeyCode::Left => self.cycle_section_control(false),
            KeyCode::Right => self.cycle_section_control(true),
            KeyCode::Enter => {
                if self.active_section == SectionId::Contact {
                    self.set_focus(Focus::Field(FieldKind::Name));
                }
            }
            _ => {}
        }
    }

    /// Left/Right act on whichever selector the reader is looking at: the
    /// project filter on the Projects section, the timeline tabs on the
    /// Experience section.
    fn cycle_section_control(&mut self, forward: bool) {
        match self.active_section {
            SectionId::Projects => {
                if forward {
                    self.filter.select_next(self.tick_count);
                } else {
                    self.filter.select_prev(self.tick_count);
                }
            }
            SectionId::Experience => self.tab = self.tab.other(),
            _ => {}
        }
    }

    fn handle_field_key(&mut self, kind: FieldKind, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::Page),
            KeyCode::Tab | KeyCode::Enter => self.set_focus(next_focus(kind)),
            KeyCode::BackTab => self.set_focus(prev_focus(kind)),
            KeyCode::Backspace => self.form.backspace(kind),
            KeyCode::Char(c) => self.form.input(kind, c),
            _ => {}
        }
    }

    fn handle_submit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::Page),
            KeyCode::Tab => self.set_focus(Focus::Field(FieldKind::Name)),
            KeyCode::BackTab => self.set_focus(Focus::Field(FieldKind::Message)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.form.submit(self.tick_count);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_by(-WHEEL_ROWS);
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(WHEEL_ROWS);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.mark_dirty();
                let action = self.hits.hit_test(mouse.column, mouse.row);
                // Any click outside the open menu closes it and is
                // swallowed, even if it lands on another control.
                if self.menu.is_open()
                    && !matches!(action, Some(ClickAction::MenuItem(_) | ClickAction::Ignore))
                {
                    self.menu.close();
                    return;
                }
                if let Some(action) = action {
                    self.apply_click(action);
                }
            }
            _ => {}
        }
    }

    fn apply_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::Ignore => {}
            ClickAction::ToggleTheme => self.toggle_theme(),
            ClickAction::ToggleMenu => self.toggle_menu(),
            ClickAction::NavLink(id) | ClickAction::MenuItem(id) => self.scroll_to_section(id),
            ClickAction::FilterSelect(index) => self.filter.select(index, self.tick_count),
            ClickAction::TabSelect(tab) => self.tab = tab,
            ClickAction::FocusField(kind) => self.set_focus(Focus::Field(kind)),
            ClickAction::Submit => {
                self.set_focus(Focus::Submit);
                self.form.submit(self.tick_count);
            }
            ClickAction::BackToTop => self.scroll_to_top(),
        }
    }
}

/// Focus order: Name -> Email -> Subject -> Message -> Submit.
fn next_focus(kind: FieldKind) -> Focus {
    match kind {
        FieldKind::Name => Focus::Field(FieldKind::Email),
        FieldKind::Email => Focus::Field(FieldKind::Subject),
        FieldKind::Subject => Focus::Field(FieldKind::Message),
        FieldKind::Message => Focus::Submit,
    }
}

fn prev_focus(kind: FieldKind) -> Focus {
    match kind {
        FieldKind::Name => Focus::Page,
        FieldKind::Email => Focus::Field(FieldKind::Name),
        FieldKind::Subject => Focus::Field(FieldKind::Email),
        FieldKind::Message => Focus::Field(FieldKind::Subject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::theme::ThemeSetting;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(ThemeSetting::Dark, None, Vec::new());
        app.update_terminal_dimensions(100, 42);
        app
    }

    #[test]
    fn test_q_quits_from_page_focus() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_q_into_field_does_not_quit() {
        let mut app = app();
        app.set_focus(Focus::Field(FieldKind::Name));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.form.field(FieldKind::Name).value, "q");
    }

    #[test]
    fn test_escape_closes_open_menu() {
        let mut app = app();
        app.toggle_menu();
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_tab_moves_through_fields_to_submit() {
        let mut app = app();
        app.set_focus(Focus::Field(FieldKind::Name));
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn test_tab_away_from_field_blurs_it() {
        let mut app = app();
        app.set_focus(Focus::Field(FieldKind::Name));
        app.handle_key(key(KeyCode::Char('A')));
        app.handle_key(key(KeyCode::Tab));
        // One character fails the min-2 rule, surfaced by the blur.
        assert!(app.form.field(FieldKind::Name).error.is_some());
    }

    #[test]
    fn test_click_outside_closes_menu() {
        let mut app = app();
        app.toggle_menu();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_click_on_other_control_closes_menu_without_firing_it() {
        let mut app = app();
        app.hits.register(Rect::new(0, 0, 4, 1), ClickAction::ToggleTheme);
        app.toggle_menu();
        let before = app.theme;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert!(!app.menu.is_open(), "menu stayed open after outside click");
        // The click is swallowed by the close; the control does not fire.
        assert_eq!(app.theme, before);
    }

    #[test]
    fn test_menu_item_click_still_selects_while_open() {
        let mut app = app();
        app.page.sections = vec![crate::state::nav::SectionBounds {
            id: SectionId::About,
            top: 20,
            height: 30,
        }];
        app.page.total_rows = 200;
        app.toggle_menu();
        app.hits
            .register(Rect::new(10, 10, 20, 1), ClickAction::MenuItem(SectionId::About));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert!(!app.menu.is_open());
        assert_eq!(app.active_section, SectionId::About);
        assert_eq!(app.scroll, 20);
    }

    #[test]
    fn test_click_on_registered_region_triggers_action() {
        let mut app = app();
        app.hits.register(Rect::new(0, 0, 4, 1), ClickAction::ToggleTheme);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let before = app.theme;
        app.handle_mouse(click);
        assert_eq!(app.theme, before.flipped());
    }

    #[test]
    fn test_wheel_ignored_while_menu_open() {
        let mut app = app();
        app.page.total_rows = 500;
        app.toggle_menu();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel);
        assert_eq!(app.scroll, 0);
    }
}
