// File: src/model/parser.rs
use crate::error::ValidationError;
use crate::model::codes::{DayCode, PeriodCode, Slot};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CodeTokenKind {
    /// A recognised day+period pair.
    Slot(Slot),
    /// A character the scan stepped over.
    Ignored,
}

/// Span of a time-code string, in character indices (`end` exclusive).
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CodeToken {
    pub kind: CodeTokenKind,
    pub start: usize,
    pub end: usize,
}

/// Splits a time-code string into recognised pairs and skipped characters.
///
/// The scan walks left to right: when the character under the cursor is a day
/// letter and the next one is a period symbol (both case-insensitive) the pair
/// is taken and the cursor jumps by two, otherwise the single character is
/// skipped. Every character of the input ends up in exactly one token.
pub fn tokenize_time_code(input: &str) -> Vec<CodeToken> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let pair = DayCode::from_char(chars[i]).and_then(|day| {
            chars
                .get(i + 1)
                .and_then(|c| PeriodCode::from_char(*c))
                .map(|period| Slot::new(day, period))
        });

        match pair {
            Some(slot) => {
                tokens.push(CodeToken {
                    kind: CodeTokenKind::Slot(slot),
                    start: i,
                    end: i + 2,
                });
                i += 2;
            }
            None => {
                // Merge runs of garbage into one span
                if let Some(last) = tokens.last_mut()
                    && last.kind == CodeTokenKind::Ignored
                    && last.end == i
                {
                    last.end = i + 1;
                } else {
                    tokens.push(CodeToken {
                        kind: CodeTokenKind::Ignored,
                        start: i,
                        end: i + 1,
                    });
                }
                i += 1;
            }
        }
    }
    tokens
}

/// Parses a time code such as `"T3T4R3R4"` into its slots, in input order.
///
/// Duplicates are kept. Returns `InvalidTimeCode` when no pair is found.
pub fn parse_time_code(input: &str) -> Result<Vec<Slot>, ValidationError> {
    let slots: Vec<Slot> = tokenize_time_code(input)
        .into_iter()
        .filter_map(|t| match t.kind {
            CodeTokenKind::Slot(slot) => Some(slot),
            CodeTokenKind::Ignored => None,
        })
        .collect();

    if slots.is_empty() {
        log::debug!("No slot found in time code '{}'", input);
        return Err(ValidationError::InvalidTimeCode);
    }
    Ok(slots)
}
