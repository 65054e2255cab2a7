//! The experience/education section with its two-tab timeline.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::{App, ClickAction};
use crate::models::{TimelineEntry, EDUCATION, EXPERIENCE};
use crate::state::nav::SectionId;
use crate::state::tabs::TimelineTab;
use crate::ui::components::selector::{build_selector, SelectorItem};
use crate::ui::helpers::wrap;
use crate::ui::page::{heading, PageAction, SectionBlock};
use crate::ui::theme::Palette;

pub const REVEAL_ID: &str = "experience";

fn entries_for(tab: TimelineTab) -> &'static [TimelineEntry] {
    match tab {
        TimelineTab::Experience => EXPERIENCE,
        TimelineTab::Education => EDUCATION,
    }
}

pub fn build(app: &App, width: usize, palette: &Palette) -> SectionBlock {
    let mut lines = heading("Experience", palette);
    let mut actions = Vec::new();

    let items = vec![
        SelectorItem::new(
            TimelineTab::Experience.label(),
            ClickAction::TabSelect(TimelineTab::Experience),
        ),
        SelectorItem::new(
            TimelineTab::Education.label(),
            ClickAction::TabSelect(TimelineTab::Education),
        ),
    ];
    let (selector_line, regions) = build_selector(&items, app.tab.index(), palette);
    let selector_row = lines.len();
    lines.push(selector_line);
    for (x_offset, region_width, action) in regions {
        actions.push(PageAction {
            row: selector_row,
            x_offset,
            width: region_width,
            action,
        });
    }
    lines.push(Line::default());

    let revealed = app.reveal.is_revealed(REVEAL_ID);
    let title_style = if revealed {
        Style::default()
            .fg(palette.fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };
    let dim = if revealed {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.border)
    };
    let accent = if revealed {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    // Only the active tab's timeline is visible.
    let body_start = lines.len();
    for entry in entries_for(app.tab) {
        lines.push(Line::from(Span::styled(entry.period, accent)));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", entry.title, entry.place),
            title_style,
        )));
        for row in wrap(entry.summary, width.saturating_sub(3)) {
            lines.push(Line::from(Span::styled(format!("   {row}"), dim)));
        }
        lines.push(Line::default());
    }
    let body_height = (lines.len() - body_start).max(1);

    lines.push(Line::default());

    SectionBlock {
        id: SectionId::Experience,
        lines,
        targets: vec![(REVEAL_ID.to_string(), body_start, body_height)],
        actions,
    }
}
