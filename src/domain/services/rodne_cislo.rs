//! Czech birth-number (rodné číslo) validation.
//!
//! Two formats exist: 9 digits (issued before 1954, no checksum) and
//! 10 digits (1954 onwards, mod-11 checksum). Both encode the birth date in
//! the first six digits, with 50 added to the month for women.

use chrono::NaiveDate;

/// Numeric value of a short all-digit string.
fn digits_value(s: &str) -> u64 {
    s.bytes().fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Validates a Czech birth number. Accepts formats with or without the
/// slash separator; all non-digit characters are stripped first.
pub fn is_valid_rc(value: &str) -> bool {
    let rc: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    if rc.len() != 9 && rc.len() != 10 {
        return false;
    }

    let yy = digits_value(&rc[0..2]);
    let mut month = digits_value(&rc[2..4]);
    let day = digits_value(&rc[4..6]);

    // Women have 50 added to the month.
    if month > 50 {
        month -= 50;
    }

    if !(1..=12).contains(&month) {
        return false;
    }

    let year = if rc.len() == 9 {
        // Pre-1954 numbers have 9 digits; a 9-digit number claiming a
        // later year cannot be valid.
        let year = 1900 + yy;
        if year >= 1954 {
            return false;
        }
        year
    } else if yy >= 54 {
        1900 + yy
    } else {
        2000 + yy
    };

    if NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32).is_none() {
        return false;
    }

    if rc.len() == 10 {
        let mut check = digits_value(&rc[..9]) % 11;
        if check == 10 {
            check = 0;
        }
        if check != digits_value(&rc[9..10]) {
            return false;
        }
    }

    true
}

/// Derives the birth date encoded in a birth number.
///
/// Does not re-run the checksum; callers validate first when it matters.
pub fn date_of_birth_from_rc(rodne_cislo: &str) -> Option<NaiveDate> {
    let rc: String = rodne_cislo.chars().filter(|c| c.is_ascii_digit()).collect();

    if rc.len() != 9 && rc.len() != 10 {
        return None;
    }

    let yy = digits_value(&rc[0..2]);
    // 10-digit numbers exist since 1954, so a low two-digit year means 2000s.
    let year = if rc.len() == 10 && yy < 54 {
        2000 + yy
    } else {
        1900 + yy
    };

    // Both the +50 (women) and +20 (ECP series) offsets shift the tens
    // digit out of the 0-1 range; dropping the tens digit undoes them.
    let mut month = digits_value(&rc[2..4]);
    if matches!(rc.as_bytes()[2], b'2' | b'3' | b'5' | b'6' | b'7' | b'8') {
        month -= digits_value(&rc[2..3]) * 10;
    }

    let day = digits_value(&rc[4..6]);

    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
}
