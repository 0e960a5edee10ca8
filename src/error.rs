// File: ./src/error.rs
//! Validation errors raised when a course is rejected.
use thiserror::Error;

/// Why `Timetable::add_course` (or the time-code parser) refused its input.
///
/// All variants are user-input problems: the caller shows the message and the
/// timetable is left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a course name.")]
    MissingName,

    #[error("Please enter a course time.")]
    MissingTimeCode,

    #[error("Invalid time format. Please use format like \"T3T4R3R4\" (Tue 3-4, Thu 3-4)")]
    InvalidTimeCode,
}

impl ValidationError {
    /// Name of the form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "name",
            ValidationError::MissingTimeCode | ValidationError::InvalidTimeCode => "time",
        }
    }
}
