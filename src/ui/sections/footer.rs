//! Footer rows appended after the last section.

use chrono::{Datelike, Local};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::Palette;

pub fn build(width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let year = Local::now().year();
    vec![
        Line::default(),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(palette.border),
        )),
        Line::from(Span::styled(
            format!("© {year} Hariom Kr"),
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            "Built with Rust · ratatui",
            Style::default().fg(palette.dim),
        )),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::theme::ThemeSetting;

    #[test]
    fn test_footer_carries_current_year() {
        let palette = Palette::for_theme(ThemeSetting::Dark);
        let lines = build(40, &palette);
        let year = Local::now().year().to_string();
        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect();
        assert!(flat.contains(&year));
    }
}
