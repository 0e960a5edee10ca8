// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod timetable;

#[cfg(feature = "tui")]
pub mod tui;

pub use error::ValidationError;
pub use model::{Course, CourseId, DayCode, PeriodCategory, PeriodCode, Slot, parse_time_code};
pub use timetable::Timetable;
