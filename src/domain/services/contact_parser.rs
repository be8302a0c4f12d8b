//! Parser for free-text contact lines.
//!
//! Operators paste lines copied from spreadsheets and exports; each line is
//! expected to carry exactly one national id plus an e-mail, a phone number,
//! or both, in any order and surrounded by arbitrary other text. Extraction
//! is regex-driven; the national id is validated by checksum and removed
//! from the line before phone numbers are searched, so a birth number is
//! never mistaken for a phone.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::services::line_parser::{ImportValidation, InvalidLine};
use crate::domain::services::rodne_cislo::is_valid_rc;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Candidate phone numbers. The bare nine-digit form additionally requires
/// no adjacent digit on either side (checked against the haystack, since the
/// regex engine has no lookaround); prefixed forms are accepted as matched.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+420|00420)\s?[1-9]\d{2}\s?\d{3}\s?\d{3}|[1-9]\d{2}\s?\d{3}\s?\d{3}")
        .unwrap()
});

/// National id candidates: slash format or 9-10 bare digits. Candidates are
/// filtered through the checksum validator before they count.
static RC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{6}/\d{3,4}\b|\b\d{9,10}\b").unwrap());

/// What one contact line parsed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContact {
    pub rodne_cislo: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub errors: Vec<String>,
}

impl ParsedContact {
    /// The line reduced to its extracted parts, in canonical order.
    pub fn normalized_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(rc) = &self.rodne_cislo {
            parts.push(rc.clone());
        }
        if let Some(email) = &self.email {
            parts.push(email.clone());
        }
        if let Some(phone) = &self.phone {
            parts.push(phone.clone());
        }
        parts.join(" ")
    }
}

/// All e-mail addresses in the text, in order of appearance.
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All phone numbers in the text, in order of appearance, as matched
/// (internal spaces preserved).
pub fn find_phones(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .filter(|m| {
            let matched = m.as_str();
            if matched.starts_with('+') || matched.starts_with("00420") {
                return true;
            }
            // Bare format: a digit right before or after the match means
            // this is a fragment of a longer number, not a phone.
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(|c| c.is_ascii_digit())
                && !after.is_some_and(|c| c.is_ascii_digit())
        })
        .map(|m| m.as_str().to_string())
        .collect()
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn normalize_rc(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parses one contact line into national id, e-mail and phone.
pub fn parse_contact_line(line: &str) -> ParsedContact {
    let mut contact = ParsedContact::default();

    let valid_rcs: Vec<regex::Match> = RC_RE
        .find_iter(line)
        .filter(|m| is_valid_rc(m.as_str()))
        .collect();

    // The national id is cut out of the line so its digits cannot be picked
    // up again as a phone number.
    let remainder = match valid_rcs.as_slice() {
        [] => {
            contact.errors.push("missing national id".to_string());
            line.to_string()
        }
        [only] => {
            contact.rodne_cislo = Some(normalize_rc(only.as_str()));
            format!("{}{}", &line[..only.start()], &line[only.end()..])
        }
        _ => {
            contact
                .errors
                .push("more than one national id".to_string());
            line.to_string()
        }
    };

    let emails = find_emails(&remainder);
    match emails.len() {
        0 => {}
        1 => contact.email = Some(emails[0].clone()),
        _ => contact.errors.push("more than one e-mail".to_string()),
    }

    let phones = find_phones(&remainder);
    match phones.len() {
        0 => {}
        1 => contact.phone = Some(strip_whitespace(&phones[0])),
        _ => contact
            .errors
            .push("more than one phone number".to_string()),
    }

    if contact.email.is_none() && contact.phone.is_none() && contact.errors.is_empty() {
        contact.errors.push("missing e-mail or phone".to_string());
    }

    contact
}

/// Validates one pasted contact blob, line by line.
///
/// Blank lines are skipped. A national id that does not resolve to a donor
/// in the overview rejects the line; the rest of the blob still goes
/// through. Valid lines are re-emitted normalized so the review form shows
/// only what will actually be stored.
pub fn validate_contact_import_data(
    text: &str,
    known_donor: impl Fn(&str) -> bool,
) -> ImportValidation {
    let mut result = ImportValidation::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let mut contact = parse_contact_line(line);

        if let Some(rc) = &contact.rodne_cislo {
            if !known_donor(rc) {
                contact
                    .errors
                    .push("donor with this national id does not exist".to_string());
            }
        }

        if contact.errors.is_empty() {
            result.valid_lines.push(contact.normalized_line());
        } else {
            result.invalid_lines.push(InvalidLine {
                repaired: line.to_string(),
                errors: contact.errors,
            });
        }
    }

    result
}
