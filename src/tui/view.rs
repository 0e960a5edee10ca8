// File: src/tui/view.rs
use crate::model::{CodeTokenKind, Course, PeriodCategory, parse_time_code, tokenize_time_code};
use crate::tui::state::{AppState, FormField, InputMode};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};
use std::hash::{Hash, Hasher};
use unicode_width::UnicodeWidthStr;

const TIME_COLUMN_WIDTH: u16 = 12;
const DETAILS_WIDTH: u16 = 34;
const FORM_LABEL_WIDTH: usize = 12;

const COURSE_PALETTE: [Color; 8] = [
    Color::LightCyan,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightBlue,
    Color::LightRed,
    Color::Cyan,
    Color::Green,
];

/// Stable accent color for a course, derived from its name.
fn course_color(name: &str) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.hash(&mut hasher);
    COURSE_PALETTE[(hasher.finish() % COURSE_PALETTE.len() as u64) as usize]
}

fn category_style(category: PeriodCategory) -> Style {
    match category {
        PeriodCategory::Regular => Style::default(),
        PeriodCategory::Noon => Style::default().bg(Color::Rgb(48, 44, 24)),
        PeriodCategory::Evening => Style::default().bg(Color::Rgb(24, 28, 52)),
    }
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" h/j/k/l or arrows:Move  Tab:Next course in cell  n:Jump to now"),
        ]),
        Line::from(vec![
            Span::styled(
                " COURSES ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" a:Add  d:Remove selected  C:Clear all"),
        ]),
        Line::from(vec![
            Span::styled(
                " VIEW ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" w:Toggle weekend  e:Toggle evening periods"),
        ]),
        Line::from(vec![
            Span::styled(
                " TIME CODE ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Day MTWRFSU + period 1-4,n,5-9,a-d  e.g. T3T4R3R4"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(DETAILS_WIDTH)])
        .split(v_chunks[0]);

    draw_grid(f, state, h_chunks[0]);
    draw_details(f, state, h_chunks[1]);

    // --- Footer ---
    let footer_area = v_chunks[1];
    if state.show_full_help {
        let help = Paragraph::new(full_help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        f.render_widget(help, footer_area);
    } else {
        let status_style = match state.mode {
            InputMode::ConfirmRemove(_) | InputMode::ConfirmClear => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };
        let status = Paragraph::new(Span::styled(state.message.clone(), status_style))
            .block(Block::default().borders(Borders::ALL).title(" Status "));

        let hints = match state.mode {
            InputMode::Adding => "Tab:Next field  Enter:Add  Esc:Cancel",
            InputMode::ConfirmRemove(_) | InputMode::ConfirmClear => "y:Confirm  any key:Cancel",
            InputMode::Normal => "a:Add  d:Remove  C:Clear  w/e:Weekend/Evening  ?:Help  q:Quit",
        };
        let help = Paragraph::new(hints)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title(" Actions "));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(footer_area);
        f.render_widget(status, chunks[0]);
        f.render_widget(help, chunks[1]);
    }

    if state.mode == InputMode::Adding {
        draw_form(f, state);
    }
}

fn draw_grid(f: &mut Frame, state: &AppState, area: Rect) {
    let days = state.days();
    let periods = state.periods();
    let selected = state.selected_slot();
    let now = state.now_slot;

    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(days.iter().map(|d| {
        let style = if now.is_some_and(|s| s.day == *d) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Cell::from(Span::styled(d.display_name(), style))
    }));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = periods
        .iter()
        .map(|p| {
            let base = category_style(p.category());
            let time_style = if now.is_some_and(|s| s.period == *p) {
                base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                base.fg(Color::Gray)
            };
            let mut cells = vec![
                Cell::from(Text::from(vec![
                    Line::from(p.code().to_string()),
                    Line::from(p.time_range()),
                ]))
                .style(time_style),
            ];

            let mut height = 2;
            for d in &days {
                let occupants = state.timetable.cell_occupants(*d, *p);
                height = height.max(occupants.len());

                let is_selected = selected.is_some_and(|s| s.day == *d && s.period == *p);
                let lines: Vec<Line> = occupants
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        let mut style = Style::default().fg(course_color(&c.name));
                        if is_selected && i == state.selected_occupant {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Line::from(Span::styled(c.name.clone(), style))
                    })
                    .collect();

                let cell_style = if is_selected {
                    base.bg(Color::DarkGray)
                } else {
                    base
                };
                cells.push(Cell::from(Text::from(lines)).style(cell_style));
            }
            Row::new(cells).height(height as u16)
        })
        .collect();

    let mut widths = vec![Constraint::Length(TIME_COLUMN_WIDTH)];
    widths.extend(days.iter().map(|_| Constraint::Fill(1)));

    let title = format!(
        " Timetable ({} courses, {} cells) ",
        state.timetable.len(),
        state.timetable.occupied_slots()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);
}

fn course_lines(course: &Course, marked: bool) -> Vec<Line<'static>> {
    let marker = if marked { "> " } else { "  " };
    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(
            course.name.clone(),
            Style::default()
                .fg(course_color(&course.name))
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let summary = course.summary();
    for (i, text) in summary.lines().skip(1).enumerate() {
        let style = if i == 0 {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("  {}", text), style)));
    }
    lines.push(Line::from(""));
    lines
}

fn draw_details(f: &mut Frame, state: &AppState, area: Rect) {
    let title = match state.selected_slot() {
        Some(slot) => format!(
            " {} {} ({}) ",
            slot.day_name(),
            slot.period.code(),
            slot.time_range()
        ),
        None => " Details ".to_string(),
    };

    let occupants = state.selected_occupants();
    let lines: Vec<Line> = if occupants.is_empty() {
        vec![Line::from(Span::styled(
            "Empty cell.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        occupants
            .iter()
            .enumerate()
            .flat_map(|(i, c)| course_lines(c, i == state.selected_occupant))
            .collect()
    };

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(p, area);
}

/// Time-code field with accepted pairs highlighted and skipped characters dimmed.
fn time_code_spans(input: &str) -> Vec<Span<'static>> {
    let chars: Vec<char> = input.chars().collect();
    tokenize_time_code(input)
        .into_iter()
        .map(|t| {
            let text: String = chars[t.start..t.end].iter().collect();
            let style = match t.kind {
                CodeTokenKind::Slot(_) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                CodeTokenKind::Ignored => Style::default().fg(Color::DarkGray),
            };
            Span::styled(text, style)
        })
        .collect()
}

fn draw_form(f: &mut Frame, state: &AppState) {
    let area = centered_rect(60, 40, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add Course ")
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let label_style = if field == state.form.active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$}", field.label(), width = FORM_LABEL_WIDTH),
            label_style,
        )];
        let value = state.form.value(field);
        if field == FormField::Time {
            spans.extend(time_code_spans(value));
        } else {
            spans.push(Span::raw(value.to_string()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let time = state.form.value(FormField::Time);
    if !time.trim().is_empty() {
        let preview = match parse_time_code(time) {
            Ok(slots) => Span::styled(
                slots
                    .iter()
                    .map(|s| format!("{} {}", s.day_name(), s.period.code()))
                    .collect::<Vec<_>>()
                    .join(", "),
                Style::default().fg(Color::Green),
            ),
            Err(e) => Span::styled(e.to_string(), Style::default().fg(Color::Red)),
        };
        lines.push(Line::from(preview));
    }

    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(p, area);

    // Cursor inside the active field
    let active = state.form.value(state.form.active);
    let before: String = active.chars().take(state.form.cursor_position).collect();
    let row = FormField::ALL
        .iter()
        .position(|field| *field == state.form.active)
        .unwrap_or(0) as u16;
    let x = area.x + 1 + FORM_LABEL_WIDTH as u16 + before.width() as u16;
    let y = area.y + 1 + row;
    if x < area.right().saturating_sub(1) {
        f.set_cursor_position((x, y));
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
