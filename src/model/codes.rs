// File: src/model/codes.rs
//! Constant day and period tables of the weekly grid.
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// One-letter weekday code. Declaration order is render order (M=0 … U=6).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum DayCode {
    #[serde(rename = "M")]
    Mon,
    #[serde(rename = "T")]
    Tue,
    #[serde(rename = "W")]
    Wed,
    #[serde(rename = "R")]
    Thu,
    #[serde(rename = "F")]
    Fri,
    #[serde(rename = "S")]
    Sat,
    #[serde(rename = "U")]
    Sun,
}

impl DayCode {
    /// Case-insensitive lookup of a day letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(DayCode::Mon),
            'T' => Some(DayCode::Tue),
            'W' => Some(DayCode::Wed),
            'R' => Some(DayCode::Thu),
            'F' => Some(DayCode::Fri),
            'S' => Some(DayCode::Sat),
            'U' => Some(DayCode::Sun),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            DayCode::Mon => 'M',
            DayCode::Tue => 'T',
            DayCode::Wed => 'W',
            DayCode::Thu => 'R',
            DayCode::Fri => 'F',
            DayCode::Sat => 'S',
            DayCode::Sun => 'U',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DayCode::Mon => "Mon",
            DayCode::Tue => "Tue",
            DayCode::Wed => "Wed",
            DayCode::Thu => "Thu",
            DayCode::Fri => "Fri",
            DayCode::Sat => "Sat",
            DayCode::Sun => "Sun",
        }
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, DayCode::Sat | DayCode::Sun)
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayCode::Mon,
            Weekday::Tue => DayCode::Tue,
            Weekday::Wed => DayCode::Wed,
            Weekday::Thu => DayCode::Thu,
            Weekday::Fri => DayCode::Fri,
            Weekday::Sat => DayCode::Sat,
            Weekday::Sun => DayCode::Sun,
        }
    }

    /// All days in render order.
    pub fn all() -> impl Iterator<Item = DayCode> {
        DayCode::iter()
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Styling tag of a period. Has no scheduling meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodCategory {
    Regular,
    Noon,
    Evening,
}

/// One-character period code. Declaration order is render order:
/// 1,2,3,4,n,5,6,7,8,9,a,b,c,d.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum PeriodCode {
    #[serde(rename = "1")]
    P1,
    #[serde(rename = "2")]
    P2,
    #[serde(rename = "3")]
    P3,
    #[serde(rename = "4")]
    P4,
    #[serde(rename = "n")]
    Noon,
    #[serde(rename = "5")]
    P5,
    #[serde(rename = "6")]
    P6,
    #[serde(rename = "7")]
    P7,
    #[serde(rename = "8")]
    P8,
    #[serde(rename = "9")]
    P9,
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "d")]
    D,
}

// (code, start h:m, end h:m), indexed by ordinal
const PERIOD_TABLE: [(char, (u32, u32), (u32, u32)); 14] = [
    ('1', (8, 0), (8, 50)),
    ('2', (9, 0), (9, 50)),
    ('3', (10, 10), (11, 0)),
    ('4', (11, 10), (12, 0)),
    ('n', (12, 10), (13, 0)),
    ('5', (13, 20), (14, 10)),
    ('6', (14, 20), (15, 10)),
    ('7', (15, 30), (16, 20)),
    ('8', (16, 30), (17, 20)),
    ('9', (17, 30), (18, 20)),
    ('a', (18, 30), (19, 20)),
    ('b', (19, 30), (20, 20)),
    ('c', (20, 30), (21, 20)),
    ('d', (21, 30), (22, 20)),
];

impl PeriodCode {
    /// Case-insensitive lookup of a period symbol.
    pub fn from_char(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        PeriodCode::iter().find(|p| p.code() == lower)
    }

    pub fn code(&self) -> char {
        PERIOD_TABLE[self.ordinal()].0
    }

    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn start_time(&self) -> NaiveTime {
        let (h, m) = PERIOD_TABLE[self.ordinal()].1;
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn end_time(&self) -> NaiveTime {
        let (h, m) = PERIOD_TABLE[self.ordinal()].2;
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Clock range label, e.g. "10:10-11:00".
    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            self.start_time().format("%-H:%M"),
            self.end_time().format("%-H:%M")
        )
    }

    pub fn category(&self) -> PeriodCategory {
        match self {
            PeriodCode::Noon => PeriodCategory::Noon,
            PeriodCode::A | PeriodCode::B | PeriodCode::C | PeriodCode::D => {
                PeriodCategory::Evening
            }
            _ => PeriodCategory::Regular,
        }
    }

    /// The period whose clock range contains `time` (end exclusive).
    /// Breaks between periods belong to none.
    pub fn at(time: NaiveTime) -> Option<Self> {
        PeriodCode::iter().find(|p| p.start_time() <= time && time < p.end_time())
    }

    /// All periods in render order.
    pub fn all() -> impl Iterator<Item = PeriodCode> {
        PeriodCode::iter()
    }
}

impl fmt::Display for PeriodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single (day, period) cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: DayCode,
    pub period: PeriodCode,
}

impl Slot {
    pub fn new(day: DayCode, period: PeriodCode) -> Self {
        Self { day, period }
    }

    pub fn day_name(&self) -> &'static str {
        self.day.display_name()
    }

    pub fn time_range(&self) -> String {
        self.period.time_range()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.day.code(), self.period.code())
    }
}
