//! The landing section: greeting, the typewriter line, and key hints.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::state::nav::SectionId;
use crate::ui::helpers::wrap;
use crate::ui::page::SectionBlock;
use crate::ui::theme::Palette;

const INTRO: &str = "I'm a computer science student who likes building small, \
                     sharp tools and the occasional over-engineered side project. \
                     Scroll down to see what I've been up to.";

pub fn build(app: &App, width: usize, palette: &Palette) -> SectionBlock {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Hi, my name is",
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            "Hariom Kr",
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                app.typewriter.visible_text(),
                Style::default().fg(palette.accent),
            ),
            Span::styled("▌", Style::default().fg(palette.accent)),
        ]),
        Line::default(),
    ];

    for row in wrap(INTRO, width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(palette.dim),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "m menu · 1-5 jump · t theme · q quit",
        Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::default());
    lines.push(Line::default());

    SectionBlock {
        id: SectionId::Home,
        lines,
        targets: Vec::new(),
        actions: Vec::new(),
    }
}
