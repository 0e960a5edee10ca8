// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::config::Config;
use crate::context::AppContext;
use crate::error::ValidationError;
use crate::model::{Course, CourseId, DayCode, PeriodCode, Slot};
use crate::render::{visible_days, visible_periods};
use crate::timetable::Timetable;
use chrono::{Datelike, NaiveDateTime};
use std::sync::Arc;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputMode {
    Normal,
    Adding,
    ConfirmRemove(CourseId),
    ConfirmClear,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum FormField {
    Name,
    Time,
    Location,
    Instructor,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Time,
        FormField::Location,
        FormField::Instructor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Course",
            FormField::Time => "Time",
            FormField::Location => "Location",
            FormField::Instructor => "Instructor",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// The four text fields of the add-course form.
#[derive(Debug, Clone)]
pub struct CourseForm {
    pub fields: [String; 4],
    pub active: FormField,
    pub cursor_position: usize,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            fields: Default::default(),
            active: FormField::Name,
            cursor_position: 0,
        }
    }
}

impl CourseForm {
    pub fn value(&self, field: FormField) -> &str {
        &self.fields[field.index()]
    }

    fn active_buffer(&mut self) -> &mut String {
        &mut self.fields[self.active.index()]
    }

    fn focus(&mut self, field: FormField) {
        self.active = field;
        self.cursor_position = self.value(field).chars().count();
    }
}

pub struct AppState {
    pub ctx: Arc<dyn AppContext>,
    pub timetable: Timetable,

    // Grid cursor, as indices into the visible days / periods
    pub cursor_day: usize,
    pub cursor_period: usize,
    /// Which occupant of the focused cell is selected.
    pub selected_occupant: usize,

    pub mode: InputMode,
    pub form: CourseForm,
    pub message: String,
    pub show_full_help: bool,

    pub show_weekend: bool,
    pub show_evening: bool,
    pub config: Config,

    /// Cell containing the current wall-clock time, if any.
    pub now_slot: Option<Slot>,
}

impl AppState {
    pub fn new_with_ctx(ctx: Arc<dyn AppContext>, config: Config) -> Self {
        Self {
            ctx,
            timetable: Timetable::new(),
            cursor_day: 0,
            cursor_period: 0,
            selected_occupant: 0,
            mode: InputMode::Normal,
            form: CourseForm::default(),
            message: "Press 'a' to add a course.".to_string(),
            show_full_help: false,
            show_weekend: config.show_weekend,
            show_evening: config.show_evening,
            config,
            now_slot: None,
        }
    }

    pub fn days(&self) -> Vec<DayCode> {
        visible_days(self.show_weekend)
    }

    pub fn periods(&self) -> Vec<PeriodCode> {
        visible_periods(self.show_evening)
    }

    pub fn selected_slot(&self) -> Option<Slot> {
        let day = *self.days().get(self.cursor_day)?;
        let period = *self.periods().get(self.cursor_period)?;
        Some(Slot::new(day, period))
    }

    pub fn selected_occupants(&self) -> Vec<&Course> {
        match self.selected_slot() {
            Some(slot) => self.timetable.cell_occupants(slot.day, slot.period),
            None => vec![],
        }
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_occupants()
            .get(self.selected_occupant)
            .copied()
    }

    // --- NAVIGATION ---
    pub fn move_left(&mut self) {
        self.cursor_day = self.cursor_day.saturating_sub(1);
        self.selected_occupant = 0;
    }

    pub fn move_right(&mut self) {
        if self.cursor_day + 1 < self.days().len() {
            self.cursor_day += 1;
        }
        self.selected_occupant = 0;
    }

    pub fn move_up(&mut self) {
        self.cursor_period = self.cursor_period.saturating_sub(1);
        self.selected_occupant = 0;
    }

    pub fn move_down(&mut self) {
        if self.cursor_period + 1 < self.periods().len() {
            self.cursor_period += 1;
        }
        self.selected_occupant = 0;
    }

    /// Cycles through overlapping courses of the focused cell.
    pub fn next_occupant(&mut self) {
        let count = self.selected_occupants().len();
        if count > 0 {
            self.selected_occupant = (self.selected_occupant + 1) % count;
        } else {
            self.selected_occupant = 0;
        }
    }

    /// Moves the cursor to `slot` when it is visible.
    pub fn focus_slot(&mut self, slot: Slot) -> bool {
        let day_idx = self.days().iter().position(|d| *d == slot.day);
        let period_idx = self.periods().iter().position(|p| *p == slot.period);
        if let (Some(d), Some(p)) = (day_idx, period_idx) {
            self.cursor_day = d;
            self.cursor_period = p;
            self.selected_occupant = 0;
            true
        } else {
            false
        }
    }

    pub fn update_clock(&mut self, now: NaiveDateTime) {
        self.now_slot = PeriodCode::at(now.time())
            .map(|p| Slot::new(DayCode::from_weekday(now.weekday()), p));
    }

    // --- VIEW TOGGLES ---
    pub fn toggle_weekend(&mut self) {
        let slot = self.selected_slot();
        self.show_weekend = !self.show_weekend;
        self.restore_cursor(slot);
    }

    pub fn toggle_evening(&mut self) {
        let slot = self.selected_slot();
        self.show_evening = !self.show_evening;
        self.restore_cursor(slot);
    }

    // Keep the cursor on the same cell if it is still visible, else clamp it.
    fn restore_cursor(&mut self, previous: Option<Slot>) {
        if let Some(slot) = previous
            && self.focus_slot(slot)
        {
            return;
        }
        self.cursor_day = self.cursor_day.min(self.days().len().saturating_sub(1));
        self.cursor_period = self
            .cursor_period
            .min(self.periods().len().saturating_sub(1));
        self.selected_occupant = 0;
    }

    /// Config reflecting the current view toggles.
    pub fn updated_config(&self) -> Config {
        Config {
            show_weekend: self.show_weekend,
            show_evening: self.show_evening,
            ..self.config.clone()
        }
    }

    // --- FORM ---
    pub fn start_adding(&mut self) {
        self.form = CourseForm::default();
        self.mode = InputMode::Adding;
        self.message = "New course...".to_string();
    }

    pub fn next_field(&mut self) {
        let idx = (self.form.active.index() + 1) % FormField::ALL.len();
        self.form.focus(FormField::ALL[idx]);
    }

    pub fn previous_field(&mut self) {
        let len = FormField::ALL.len();
        let idx = (self.form.active.index() + len - 1) % len;
        self.form.focus(FormField::ALL[idx]);
    }

    /// Adds the course described by the form. On failure the form stays open
    /// and the offending field gets focus.
    pub fn submit_form(&mut self) -> Result<CourseId, ValidationError> {
        let result = self.timetable.add_course(
            self.form.value(FormField::Name),
            self.form.value(FormField::Time),
            Some(self.form.value(FormField::Location)),
            Some(self.form.value(FormField::Instructor)),
        );

        match result {
            Ok(id) => {
                if let Some(course) = self.timetable.get(id) {
                    self.message = format!("Added '{}'.", course.name);
                    if let Some(first) = course.schedule.first().copied() {
                        self.focus_slot(first);
                    }
                }
                self.form = CourseForm::default();
                self.mode = InputMode::Normal;
            }
            Err(e) => {
                self.message = e.to_string();
                let field = match e {
                    ValidationError::MissingName => FormField::Name,
                    _ => FormField::Time,
                };
                self.form.focus(field);
            }
        }
        result
    }

    pub fn cancel_form(&mut self) {
        self.form = CourseForm::default();
        self.mode = InputMode::Normal;
        self.message = String::new();
    }

    pub fn enter_char(&mut self, new_char: char) {
        let cursor = self.form.cursor_position;
        let buffer = self.form.active_buffer();
        let byte_index = buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(cursor)
            .unwrap_or(buffer.len());

        buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.form.cursor_position;
        if cursor != 0 {
            let buffer = self.form.active_buffer();
            let before = buffer.chars().take(cursor - 1);
            let after = buffer.chars().skip(cursor);
            let updated: String = before.chain(after).collect();
            *buffer = updated;
            self.move_cursor_left();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.form.cursor_position = self.form.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.form.value(self.form.active).chars().count();
        self.form.cursor_position = (self.form.cursor_position + 1).min(len);
    }

    // --- REMOVAL ---
    pub fn request_remove(&mut self) {
        if let Some(course) = self.selected_course() {
            let id = course.id;
            let label = match course.details() {
                Some(details) => format!("\"{}\" ({})", course.name, details),
                None => format!("\"{}\"", course.name),
            };
            self.mode = InputMode::ConfirmRemove(id);
            self.message = format!("Remove course {}? (y/n)", label);
        } else {
            self.message = "No course in this cell.".to_string();
        }
    }

    pub fn confirm_remove(&mut self, id: CourseId) {
        let name = self.timetable.get(id).map(|c| c.name.clone());
        if self.timetable.remove_course(id) {
            self.message = format!("Removed '{}'.", name.unwrap_or_default());
        }
        self.selected_occupant = 0;
        self.mode = InputMode::Normal;
    }

    pub fn request_clear(&mut self) {
        if self.timetable.is_empty() {
            self.message = "Timetable is already empty.".to_string();
            return;
        }
        self.mode = InputMode::ConfirmClear;
        self.message = format!("Clear all {} courses? (y/n)", self.timetable.len());
    }

    pub fn confirm_clear(&mut self) {
        self.timetable.clear_all();
        self.selected_occupant = 0;
        self.mode = InputMode::Normal;
        self.message = "Timetable cleared.".to_string();
    }

    pub fn cancel_prompt(&mut self) {
        self.mode = InputMode::Normal;
        self.message = String::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new_with_ctx(Arc::new(TestContext::new()), Config::default())
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn form_submission_adds_and_focuses_course() {
        let mut s = state();
        s.start_adding();
        type_str(&mut s, "Calculus");
        s.next_field();
        type_str(&mut s, "R3R4");
        assert!(s.submit_form().is_ok());
        assert_eq!(s.mode, InputMode::Normal);
        assert_eq!(
            s.selected_slot(),
            Some(Slot::new(DayCode::Thu, PeriodCode::P3))
        );
        assert_eq!(s.selected_course().unwrap().name, "Calculus");
    }

    #[test]
    fn invalid_form_keeps_mode_and_focuses_time() {
        let mut s = state();
        s.start_adding();
        type_str(&mut s, "Calculus");
        s.next_field();
        type_str(&mut s, "zz");
        assert_eq!(s.submit_form(), Err(ValidationError::InvalidTimeCode));
        assert_eq!(s.mode, InputMode::Adding);
        assert_eq!(s.form.active, FormField::Time);
        assert!(s.timetable.is_empty());
    }

    #[test]
    fn editing_in_the_middle_of_a_field() {
        let mut s = state();
        s.start_adding();
        type_str(&mut s, "Calc");
        s.move_cursor_left();
        s.move_cursor_left();
        s.delete_char();
        s.enter_char('X');
        assert_eq!(s.form.value(FormField::Name), "CXlc");
    }

    #[test]
    fn hiding_weekend_keeps_cursor_in_range() {
        let mut s = state();
        for _ in 0..10 {
            s.move_right();
        }
        assert_eq!(s.selected_slot().unwrap().day, DayCode::Sun);
        s.toggle_weekend();
        assert_eq!(s.selected_slot().unwrap().day, DayCode::Fri);
        assert!(!s.updated_config().show_weekend);
    }

    #[test]
    fn overlapping_courses_cycle_and_remove() {
        let mut s = state();
        let a = s.timetable.add_course("A", "M1", None, None).unwrap();
        s.timetable.add_course("B", "M1", None, None).unwrap();
        s.next_occupant();
        assert_eq!(s.selected_course().unwrap().name, "B");
        s.next_occupant();
        assert_eq!(s.selected_course().unwrap().id, a);

        s.request_remove();
        assert_eq!(s.mode, InputMode::ConfirmRemove(a));
        assert_eq!(s.message, "Remove course \"A\"? (y/n)");
        s.confirm_remove(a);
        assert_eq!(s.timetable.len(), 1);
        assert_eq!(s.selected_course().unwrap().name, "B");
    }

    #[test]
    fn remove_prompt_names_location_and_instructor() {
        let mut s = state();
        s.timetable
            .add_course("Calc", "M1", Some("Room 101"), Some("Dr. Lin"))
            .unwrap();
        s.request_remove();
        assert_eq!(s.message, "Remove course \"Calc\" (Room 101 • Dr. Lin)? (y/n)");
    }

    #[test]
    fn clock_maps_to_slot() {
        let mut s = state();
        // 2026-10-15 is a Thursday
        let now = NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        s.update_clock(now);
        assert_eq!(s.now_slot, Some(Slot::new(DayCode::Thu, PeriodCode::P3)));
    }
}
