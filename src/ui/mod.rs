//! Rendering: the header bar, the scrolled page window, and the overlays.

pub mod components;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod menu;
pub mod page;
pub mod sections;
pub mod theme;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::{App, ClickAction, HEADER_ROWS};
use self::layout::LayoutContext;
use self::theme::Palette;

const BACK_TO_TOP_LABEL: &str = " ↑ top ";

/// Draw one frame. Rebuilds the page, refreshes the geometry snapshot on
/// the [`App`], and re-registers every click region from scratch.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let palette = Palette::for_theme(app.theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let built = page::build(app, &ctx, &palette);
    app.page = page::layout_of(&built);
    app.scroll = app.scroll.min(app.max_scroll());

    app.hits.clear();

    let header_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: HEADER_ROWS.min(area.height),
    };
    let body_area = Rect {
        x: area.x,
        y: area.y + header_area.height,
        width: area.width,
        height: area.height.saturating_sub(header_area.height),
    };

    header::render(frame, header_area, app, &ctx, &palette);
    page::draw(frame, body_area, app, &built, &ctx);

    if app.reveal.back_to_top {
        let label_width = BACK_TO_TOP_LABEL.chars().count() as u16;
        if area.width > label_width && area.height > 1 {
            let rect = Rect {
                x: area.x + area.width - label_width - 1,
                y: area.y + area.height - 1,
                width: label_width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    BACK_TO_TOP_LABEL,
                    Style::default()
                        .fg(palette.bg)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                rect,
            );
            app.hits.register(rect, ClickAction::BackToTop);
        }
    }

    // Drawn last so its regions shadow everything underneath.
    if app.menu.is_open() {
        menu::render(frame, body_area, app, &palette);
    }
}
