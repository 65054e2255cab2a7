//! The fixed header bar: brand, nav links (or the compact menu control),
//! and the theme toggle.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ClickAction};
use crate::state::nav::{self, SectionId};
use crate::state::theme::ThemeSetting;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

const BRAND: &str = " HK ";
const MENU_LABEL: &str = "☰ Menu";
const LINK_GAP: &str = "  ";

fn theme_label(theme: ThemeSetting) -> &'static str {
    match theme {
        ThemeSetting::Dark => "◐ dark",
        ThemeSetting::Light => "◑ light",
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext, palette: &Palette) {
    let mut spans = vec![Span::styled(
        BRAND,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    let mut x = BRAND.width() as u16;

    if ctx.is_compact() {
        spans.push(Span::raw(LINK_GAP));
        x += LINK_GAP.width() as u16;
        spans.push(Span::styled(MENU_LABEL, Style::default().fg(palette.fg)));
        app.hits.register(
            Rect {
                x: area.x + x,
                y: area.y,
                width: MENU_LABEL.width() as u16,
                height: 1,
            },
            ClickAction::ToggleMenu,
        );
    } else {
        for id in SectionId::ALL {
            spans.push(Span::raw(LINK_GAP));
            x += LINK_GAP.width() as u16;
            let label = id.label();
            let style = if id == app.active_section {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.dim)
            };
            spans.push(Span::styled(label, style));
            app.hits.register(
                Rect {
                    x: area.x + x,
                    y: area.y,
                    width: label.width() as u16,
                    height: 1,
                },
                ClickAction::NavLink(id),
            );
            x += label.width() as u16;
        }
    }

    // Theme toggle, right aligned.
    let toggle = theme_label(app.theme);
    let toggle_width = toggle.width() as u16;
    if area.width > toggle_width + 1 {
        let toggle_x = area.x + area.width - toggle_width - 1;
        frame.render_widget(
            Paragraph::new(Span::styled(toggle, Style::default().fg(palette.dim))),
            Rect {
                x: toggle_x,
                y: area.y,
                width: toggle_width,
                height: 1,
            },
        );
        app.hits.register(
            Rect {
                x: toggle_x,
                y: area.y,
                width: toggle_width,
                height: 1,
            },
            ClickAction::ToggleTheme,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width.saturating_sub(toggle_width + 1),
            height: 1,
        },
    );

    // The separator shifts to the accent once the page has scrolled.
    let separator_color = if nav::header_scrolled(app.scroll) {
        palette.accent
    } else {
        palette.border
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(separator_color),
        )),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );
}
