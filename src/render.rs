// File: src/render.rs
//! Plain-text and JSON renderings of a timetable, used by `timegrid print`.
use crate::config::Config;
use crate::model::{DayCode, PeriodCategory, PeriodCode};
use crate::timetable::Timetable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_weekend: bool,
    pub show_evening: bool,
    /// Display columns per day cell.
    pub cell_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_weekend: true,
            show_evening: true,
            cell_width: 14,
        }
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            show_weekend: cfg.show_weekend,
            show_evening: cfg.show_evening,
            cell_width: cfg.cell_width as usize,
        }
    }
}

/// Day columns to draw, in render order.
pub fn visible_days(show_weekend: bool) -> Vec<DayCode> {
    DayCode::all()
        .filter(|d| show_weekend || !d.is_weekend())
        .collect()
}

/// Period rows to draw, in render order.
pub fn visible_periods(show_evening: bool) -> Vec<PeriodCode> {
    PeriodCode::all()
        .filter(|p| show_evening || p.category() != PeriodCategory::Evening)
        .collect()
}

/// Pads or truncates `text` to exactly `width` display columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    if text.width() <= width {
        out.push_str(text);
        used = text.width();
    } else if width > 0 {
        let limit = width - 1;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > limit {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn rule(
    left: char,
    mid: char,
    right: char,
    time_width: usize,
    cell_width: usize,
    n: usize,
) -> String {
    let mut line = String::new();
    line.push(left);
    line.push_str(&"─".repeat(time_width));
    for _ in 0..n {
        line.push(mid);
        line.push_str(&"─".repeat(cell_width));
    }
    line.push(right);
    line
}

/// Draws the grid with box characters. Each period row is at least two lines
/// tall (code, then clock range) and grows to fit every occupant of its cells.
pub fn render_text(timetable: &Timetable, opts: &RenderOptions) -> String {
    let days = visible_days(opts.show_weekend);
    let periods = visible_periods(opts.show_evening);
    let cw = opts.cell_width.max(3);
    let tw = periods
        .iter()
        .map(|p| p.time_range().width())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut lines = Vec::new();
    lines.push(rule('┌', '┬', '┐', tw, cw, days.len()));

    let mut header = format!("│{}", fit("", tw));
    for d in &days {
        header.push('│');
        header.push_str(&fit(d.display_name(), cw));
    }
    header.push('│');
    lines.push(header);

    for p in &periods {
        lines.push(rule('├', '┼', '┤', tw, cw, days.len()));

        let cells: Vec<Vec<String>> = days
            .iter()
            .map(|d| {
                timetable
                    .cell_occupants(*d, *p)
                    .iter()
                    .map(|c| c.name.clone())
                    .collect()
            })
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(2);

        for row in 0..height {
            let time_cell = match row {
                0 => p.code().to_string(),
                1 => p.time_range(),
                _ => String::new(),
            };
            let mut line = format!("│{}", fit(&time_cell, tw));
            for names in &cells {
                line.push('│');
                line.push_str(&fit(names.get(row).map(String::as_str).unwrap_or(""), cw));
            }
            line.push('│');
            lines.push(line);
        }
    }

    lines.push(rule('└', '┴', '┘', tw, cw, days.len()));
    lines.join("\n")
}

/// Pretty JSON array of every course, in insertion order.
pub fn render_json(timetable: &Timetable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(timetable.all_courses())
}
