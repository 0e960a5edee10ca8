// File: src/timetable.rs
use crate::error::ValidationError;
use crate::model::course::normalize_optional;
use crate::model::{Course, CourseId, DayCode, PeriodCode, Slot, parse_time_code};
use std::collections::HashSet;

/// The session's courses, in insertion order.
///
/// Overlapping courses are allowed: a cell simply lists every course whose
/// schedule contains it, first-inserted first.
#[derive(Debug, Clone)]
pub struct Timetable {
    courses: Vec<Course>,
    next_id: u64,
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl Timetable {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates the raw form fields and appends a new course.
    ///
    /// Name and time code are checked (in that order) before anything is
    /// stored, so a rejected call leaves the timetable untouched.
    pub fn add_course(
        &mut self,
        name: &str,
        time_code: &str,
        location: Option<&str>,
        instructor: Option<&str>,
    ) -> Result<CourseId, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if time_code.trim().is_empty() {
            return Err(ValidationError::MissingTimeCode);
        }
        let schedule = parse_time_code(time_code)?;

        let id = CourseId(self.next_id);
        self.next_id += 1;

        log::debug!(
            "Adding course {} '{}' with {} slot(s)",
            id,
            name,
            schedule.len()
        );

        self.courses.push(Course {
            id,
            name: name.to_string(),
            raw_time_code: time_code.to_string(),
            schedule,
            location: normalize_optional(location),
            instructor: normalize_optional(instructor),
        });
        Ok(id)
    }

    /// Removes the course with `id`. Unknown ids are a no-op returning false.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        if let Some(idx) = self.courses.iter().position(|c| c.id == id) {
            let removed = self.courses.remove(idx);
            log::debug!("Removed course {} '{}'", id, removed.name);
            true
        } else {
            false
        }
    }

    pub fn clear_all(&mut self) {
        self.courses.clear();
    }

    /// Every course scheduled at (day, period), in insertion order.
    pub fn cell_occupants(&self, day: DayCode, period: PeriodCode) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.occupies(day, period))
            .collect()
    }

    pub fn all_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of distinct grid cells holding at least one course.
    pub fn occupied_slots(&self) -> usize {
        self.courses
            .iter()
            .flat_map(|c| c.schedule.iter().copied())
            .collect::<HashSet<Slot>>()
            .len()
    }
}
