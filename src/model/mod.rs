// File: ./src/model/mod.rs
pub mod codes;
pub mod course;
pub mod parser;

pub use codes::{DayCode, PeriodCategory, PeriodCode, Slot};
pub use course::{Course, CourseId};
pub use parser::{CodeToken, CodeTokenKind, parse_time_code, tokenize_time_code};
