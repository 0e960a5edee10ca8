// Text and JSON output of `timegrid print`.
use timegrid::Timetable;
use timegrid::render::{RenderOptions, fit, render_json, render_text, visible_days, visible_periods};

#[test]
fn test_full_grid_layout() {
    let tt = Timetable::new();
    let out = render_text(&tt, &RenderOptions::default());
    let lines: Vec<&str> = out.lines().collect();

    // top + header + 14 * (separator + 2 lines) + bottom
    assert_eq!(lines.len(), 1 + 1 + 14 * 3 + 1);
    assert!(lines[1].contains("Mon") && lines[1].contains("Sun"));
    assert!(out.contains("12:10-13:00"));
    assert!(out.contains("21:30-22:20"));
}

#[test]
fn test_hidden_columns_and_rows() {
    let tt = Timetable::new();
    let opts = RenderOptions {
        show_weekend: false,
        show_evening: false,
        cell_width: 10,
    };
    let out = render_text(&tt, &opts);
    assert!(!out.contains("Sat"));
    assert!(!out.contains("Sun"));
    assert!(!out.contains("18:30-19:20"));
    assert!(out.contains("17:30-18:20"));

    assert_eq!(visible_days(false).len(), 5);
    assert_eq!(visible_periods(false).len(), 10);
}

#[test]
fn test_course_appears_in_its_cells() {
    let mut tt = Timetable::new();
    tt.add_course("Calculus", "T3R3", None, None).unwrap();
    tt.add_course("Physics", "T3", None, None).unwrap();
    let out = render_text(&tt, &RenderOptions::default());

    assert_eq!(out.matches("Calculus").count(), 2);
    assert_eq!(out.matches("Physics").count(), 1);

    // Both names sit in the same row block, Calculus on the first line
    let lines: Vec<&str> = out.lines().collect();
    let calc_line = lines.iter().position(|l| l.contains("Calculus")).unwrap();
    let phys_line = lines.iter().position(|l| l.contains("Physics")).unwrap();
    assert_eq!(phys_line, calc_line + 1);
}

#[test]
fn test_all_lines_have_equal_width() {
    let mut tt = Timetable::new();
    tt.add_course("微積分一", "M1", None, None).unwrap();
    tt.add_course("A very long course name indeed", "M1", None, None).unwrap();
    let out = render_text(&tt, &RenderOptions::default());

    let widths: Vec<usize> = out
        .lines()
        .map(unicode_width::UnicodeWidthStr::width)
        .collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
}

#[test]
fn test_fit_pads_and_truncates_by_display_width() {
    assert_eq!(fit("abc", 5), "abc  ");
    assert_eq!(fit("abcdef", 4), "abc…");
    // Each CJK character is two columns wide
    assert_eq!(fit("微積分", 4), "微… ");
    assert_eq!(fit("anything", 0), "");
}

#[test]
fn test_json_snapshot() {
    let mut tt = Timetable::new();
    tt.add_course("Calc", "T3t4", Some("Room 101"), None).unwrap();
    let json = render_json(&tt).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let course = &value[0];
    assert_eq!(course["id"], 1);
    assert_eq!(course["name"], "Calc");
    assert_eq!(course["raw_time_code"], "T3t4");
    assert_eq!(course["location"], "Room 101");
    assert!(course["instructor"].is_null());
    assert_eq!(course["schedule"][1]["day"], "T");
    assert_eq!(course["schedule"][1]["period"], "4");
}
