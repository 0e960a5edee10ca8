// File: src/model/course.rs
use crate::model::codes::{DayCode, PeriodCode, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-unique course identifier handed out by the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Time code exactly as it was typed.
    pub raw_time_code: String,
    pub schedule: Vec<Slot>,
    pub location: Option<String>,
    pub instructor: Option<String>,
}

impl Course {
    pub fn occupies(&self, day: DayCode, period: PeriodCode) -> bool {
        self.schedule
            .iter()
            .any(|s| s.day == day && s.period == period)
    }

    /// Subtitle of a course block: "location • instructor", whichever are set.
    pub fn details(&self) -> Option<String> {
        let parts: Vec<&str> = [self.location.as_deref(), self.instructor.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" • "))
        }
    }

    /// Multi-line description shown when a course block is focused.
    pub fn summary(&self) -> String {
        let mut s = format!("{}\nTime: {}\n", self.name, self.raw_time_code);
        if let Some(loc) = &self.location {
            s.push_str(&format!("Location: {}\n", loc));
        }
        if let Some(instr) = &self.instructor {
            s.push_str(&format!("Instructor: {}\n", instr));
        }
        s
    }
}

/// Trims an optional text field; blank input counts as absent.
pub(crate) fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
