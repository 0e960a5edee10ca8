// Behaviour of the day/period time-code parser.
use timegrid::model::{CodeTokenKind, tokenize_time_code};
use timegrid::{DayCode, PeriodCode, Slot, ValidationError, parse_time_code};

fn slot(day: DayCode, period: PeriodCode) -> Slot {
    Slot::new(day, period)
}

#[test]
fn test_basic_two_day_code() {
    let slots = parse_time_code("T3T4R3R4").unwrap();
    assert_eq!(
        slots,
        vec![
            slot(DayCode::Tue, PeriodCode::P3),
            slot(DayCode::Tue, PeriodCode::P4),
            slot(DayCode::Thu, PeriodCode::P3),
            slot(DayCode::Thu, PeriodCode::P4),
        ]
    );
}

#[test]
fn test_no_tokens_is_invalid() {
    assert_eq!(parse_time_code(""), Err(ValidationError::InvalidTimeCode));
    assert_eq!(
        parse_time_code("xyz123"),
        Err(ValidationError::InvalidTimeCode)
    );
    assert_eq!(parse_time_code("ZZ"), Err(ValidationError::InvalidTimeCode));
    // Day letter alone, period alone
    assert_eq!(parse_time_code("M"), Err(ValidationError::InvalidTimeCode));
    assert_eq!(parse_time_code("3"), Err(ValidationError::InvalidTimeCode));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(parse_time_code("t3"), parse_time_code("T3"));
    assert_eq!(parse_time_code("mN"), parse_time_code("Mn"));
    assert_eq!(
        parse_time_code("fA").unwrap(),
        vec![slot(DayCode::Fri, PeriodCode::A)]
    );
}

#[test]
fn test_every_token_yields_one_slot_in_input_order() {
    // Every day/period combination, concatenated in reverse canonical order,
    // with alternating case.
    let mut input = String::new();
    let mut expected = Vec::new();
    for (i, d) in DayCode::all().collect::<Vec<_>>().into_iter().rev().enumerate() {
        for p in PeriodCode::all().collect::<Vec<_>>().into_iter().rev() {
            let (dc, pc) = if i % 2 == 0 {
                (d.code().to_ascii_lowercase(), p.code().to_ascii_uppercase())
            } else {
                (d.code(), p.code())
            };
            input.push(dc);
            input.push(pc);
            expected.push(slot(d, p));
        }
    }

    let slots = parse_time_code(&input).unwrap();
    assert_eq!(slots.len(), 7 * 14);
    assert_eq!(slots, expected);
}

#[test]
fn test_garbage_between_tokens_is_skipped() {
    let slots = parse_time_code(" M1, m2 / x W9!").unwrap();
    assert_eq!(
        slots,
        vec![
            slot(DayCode::Mon, PeriodCode::P1),
            slot(DayCode::Mon, PeriodCode::P2),
            slot(DayCode::Wed, PeriodCode::P9),
        ]
    );
}

#[test]
fn test_trailing_partial_token_is_ignored() {
    let slots = parse_time_code("R3R").unwrap();
    assert_eq!(slots, vec![slot(DayCode::Thu, PeriodCode::P3)]);
}

#[test]
fn test_duplicates_are_preserved() {
    let slots = parse_time_code("T3T3").unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0], slots[1]);
}

#[test]
fn test_not_resorted() {
    let slots = parse_time_code("Fd M1").unwrap();
    assert_eq!(slots[0], slot(DayCode::Fri, PeriodCode::D));
    assert_eq!(slots[1], slot(DayCode::Mon, PeriodCode::P1));
}

#[test]
fn test_scan_consumes_two_characters_per_match() {
    // "M1" consumes '1', so "1T" is never considered; "T2" is the next pair.
    let slots = parse_time_code("M1T2").unwrap();
    assert_eq!(slots.len(), 2);

    // "SS5": first S is followed by a day letter, second S pairs with 5.
    let slots = parse_time_code("SS5").unwrap();
    assert_eq!(slots, vec![slot(DayCode::Sat, PeriodCode::P5)]);
}

#[test]
fn test_evening_and_noon_codes() {
    let slots = parse_time_code("Mn Ua Ub Uc Ud").unwrap();
    let periods: Vec<_> = slots.iter().map(|s| s.period).collect();
    assert_eq!(
        periods,
        vec![
            PeriodCode::Noon,
            PeriodCode::A,
            PeriodCode::B,
            PeriodCode::C,
            PeriodCode::D
        ]
    );
}

#[test]
fn test_tokenizer_marks_skipped_text() {
    let tokens = tokenize_time_code("T3??R4");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CodeTokenKind::Slot(slot(DayCode::Tue, PeriodCode::P3)),
            CodeTokenKind::Ignored,
            CodeTokenKind::Slot(slot(DayCode::Thu, PeriodCode::P4)),
        ]
    );
    assert_eq!((tokens[1].start, tokens[1].end), (2, 4));
}
