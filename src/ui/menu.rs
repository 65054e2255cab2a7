//! The compact-width section menu, drawn as a centered overlay.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, ClickAction};
use crate::state::nav::SectionId;
use crate::ui::theme::Palette;

const MENU_WIDTH: u16 = 30;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let height = SectionId::ALL.len() as u16 + 2;
    let width = MENU_WIDTH.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let boxed = Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    };

    frame.render_widget(Clear, boxed);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(" Sections ");
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let mut lines = Vec::new();
    for (i, id) in SectionId::ALL.into_iter().enumerate() {
        let selected = i == app.menu.selected;
        let style = if selected {
            Style::default()
                .fg(palette.accent)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", id.label()),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // The box itself swallows clicks; the rows on top of it select.
    app.hits.register(boxed, ClickAction::Ignore);
    for (i, id) in SectionId::ALL.into_iter().enumerate() {
        let row = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        if row.y < inner.y + inner.height {
            app.hits.register(row, ClickAction::MenuItem(id));
        }
    }
}
