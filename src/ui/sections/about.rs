//! The about section.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::state::nav::SectionId;
use crate::ui::helpers::wrap;
use crate::ui::page::{heading, SectionBlock};
use crate::ui::theme::Palette;

pub const REVEAL_ID: &str = "about";

const PARAGRAPHS: &[&str] = &[
    "I started writing code to automate the boring parts of my coursework \
     and never really stopped. These days I work across the stack, with a \
     soft spot for tooling, terminals, and anything that runs fast.",
    "Outside the editor you'll find me contributing to open source, \
     tinkering with machine learning models, or explaining to friends why \
     their website really does need dark mode.",
];

const DRIVES: &[&str] = &[
    "Building things people actually use",
    "Readable code over clever code",
    "Learning one new thing per project",
];

pub fn build(app: &App, width: usize, palette: &Palette) -> SectionBlock {
    let revealed = app.reveal.is_revealed(REVEAL_ID);
    let body = if revealed {
        Style::default().fg(palette.fg)
    } else {
        Style::default().fg(palette.border)
    };
    let dim = if revealed {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.border)
    };

    let mut lines = heading("About", palette);
    let body_start = lines.len();

    for (i, paragraph) in PARAGRAPHS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        for row in wrap(paragraph, width) {
            lines.push(Line::from(Span::styled(row, body)));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("What drives me:", body)));
    for item in DRIVES {
        lines.push(Line::from(Span::styled(format!("  • {item}"), dim)));
    }

    let body_height = lines.len() - body_start;
    lines.push(Line::default());
    lines.push(Line::default());

    SectionBlock {
        id: SectionId::About,
        lines,
        targets: vec![(REVEAL_ID.to_string(), body_start, body_height)],
        actions: Vec::new(),
    }
}
