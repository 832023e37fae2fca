//! Display model to terminal text.
//!
//! Spans become crossterm-styled strings; tables and panels are laid out by
//! comfy-table, which measures the pre-styled cells without their escape
//! codes.

use comfy_table::{Cell, CellAlignment, ContentArrangement, modifiers, presets};
use crossterm::style::{Color, ContentStyle, Stylize};
use pitwall_core::screen::{Align, Line, Panel, Span, Style, Table, Tone};

fn color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Red,
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Blue => Color::Blue,
        Tone::Cyan => Color::Cyan,
        Tone::Magenta => Color::Magenta,
        Tone::White => Color::White,
        Tone::Grey => Color::DarkGrey,
        Tone::Orange => Color::Rgb {
            r: 255,
            g: 135,
            b: 0,
        },
        Tone::Gold => Color::Rgb {
            r: 255,
            g: 215,
            b: 0,
        },
        Tone::Violet => Color::Rgb {
            r: 175,
            g: 95,
            b: 255,
        },
    }
}

fn content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::new();
    if let Some(fg) = style.fg {
        out = out.with(color(fg));
    }
    if let Some(bg) = style.bg {
        out = out.on(color(bg));
    }
    if style.bold {
        out = out.bold();
    }
    if style.dim {
        out = out.dim();
    }
    if style.italic {
        out = out.italic();
    }
    out
}

/// Text of `span`, wrapped in escape codes when `styled`.
pub fn paint(span: &Span, styled: bool) -> String {
    if !styled || span.style == Style::default() || span.text.is_empty() {
        return span.text.clone();
    }
    content_style(span.style).apply(span.text.as_str()).to_string()
}

pub fn line(line: &Line, styled: bool) -> String {
    line.spans.iter().map(|s| paint(s, styled)).collect()
}

fn heading(text: &str, tone: Tone, styled: bool) -> String {
    paint(
        &Span::styled(text, Style::new().fg(tone).bold().italic()),
        styled,
    )
}

fn alignment(align: Align) -> CellAlignment {
    match align {
        Align::Left => CellAlignment::Left,
        Align::Center => CellAlignment::Center,
        Align::Right => CellAlignment::Right,
    }
}

fn new_table(styled: bool) -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    if !styled {
        table.force_no_tty();
    }
    table
}

/// Title line plus a rounded, fully ruled table.
pub fn table(table: &Table, styled: bool) -> String {
    let mut out = new_table(styled);
    out.load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(table.columns.iter().map(|c| {
            paint(
                &Span::styled(c.header.as_str(), Style::new().fg(table.border).bold()),
                styled,
            )
        }));

    for row in &table.rows {
        out.add_row(row.iter().map(|span| paint(span, styled)));
    }
    for (idx, column) in table.columns.iter().enumerate() {
        if let Some(col) = out.column_mut(idx) {
            col.set_cell_alignment(alignment(column.align));
        }
    }

    let mut text = String::new();
    if let Some(title) = &table.title {
        text.push_str(&heading(title, table.border, styled));
        text.push('\n');
    }
    text.push_str(&out.to_string());
    text
}

/// Framed block: title on top, body lines, subtitle bottom right.
pub fn panel(panel: &Panel, styled: bool) -> String {
    let mut out = new_table(styled);
    out.load_preset(presets::UTF8_BORDERS_ONLY)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    match panel.width {
        Some(width) => {
            out.set_width(width)
                .set_content_arrangement(ContentArrangement::Dynamic);
        }
        None => {
            out.set_content_arrangement(ContentArrangement::Disabled);
        }
    }

    if let Some(title) = &panel.title {
        out.add_row(vec![
            Cell::new(heading(title, panel.border, styled)).set_alignment(CellAlignment::Center),
        ]);
    }
    for body in &panel.body {
        out.add_row(vec![line(body, styled)]);
    }
    if let Some(subtitle) = &panel.subtitle {
        let text = paint(&Span::styled(subtitle.as_str(), Style::new().dim()), styled);
        out.add_row(vec![Cell::new(text).set_alignment(CellAlignment::Right)]);
    }
    out.to_string()
}

#[cfg(test)]
mod tests {
    use pitwall_core::screen::Column;

    use super::*;

    #[test]
    fn test_paint_plain_when_unstyled() {
        let span = Span::styled("SOFT", Style::new().fg(Tone::Red).bold());
        assert_eq!(paint(&span, false), "SOFT");
    }

    #[test]
    fn test_paint_emits_escape_codes_when_styled() {
        let span = Span::styled("SOFT", Style::new().fg(Tone::Red));
        let painted = paint(&span, true);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("SOFT"));
    }

    #[test]
    fn test_table_renders_title_header_and_cells() {
        let mut t = Table::new(vec![
            Column::new("Pos"),
            Column::new("Load (Size)").align(Align::Right),
        ])
        .title("TRACK LIMITS (garage)");
        t.add_row(vec![Span::plain("1"), Span::plain("12 B")]);
        let text = table(&t, false);

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("TRACK LIMITS (garage)"));
        assert!(text.contains("Pos"));
        assert!(text.contains("12 B"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_panel_renders_title_body_and_subtitle() {
        let p = Panel::new(vec![Line::plain("Engine Map (CPU)"), Line::blank()])
            .title("VF-24 TELEMETRY")
            .subtitle("Chassis: Linux")
            .width(60);
        let text = panel(&p, false);
        assert!(text.contains("VF-24 TELEMETRY"));
        assert!(text.contains("Engine Map (CPU)"));
        assert!(text.contains("Chassis: Linux"));
        assert!(text.lines().all(|l| l.chars().count() <= 60));
    }
}
