//! Parser and repairer for donation-center import lines.
//!
//! One line per donor: eight semicolon-delimited fields ending with the
//! cumulative donation count reported by the center. Operators paste whole
//! files, so common typos (doubled semicolons, dropped postal codes,
//! hand-written sums like "12+3") are repaired automatically where that can
//! be done deterministically. Repaired lines are never merged into the valid
//! set silently; they come back with notes and wait for human confirmation.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line the parser could not accept as-is, with the best repair it could
/// produce and one message per defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    pub repaired: String,
    pub errors: Vec<String>,
}

/// Result of validating one pasted import blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportValidation {
    /// Lines importable without human intervention, verbatim.
    pub valid_lines: Vec<String>,
    /// Lines needing review, paired with their repair candidates.
    pub invalid_lines: Vec<InvalidLine>,
}

impl ImportValidation {
    pub fn is_empty(&self) -> bool {
        self.valid_lines.is_empty() && self.invalid_lines.is_empty()
    }
}

const FIELD_COUNT: usize = 8;

/// Hand-written sum in the donation count field, e.g. "12+3".
static SUMMED_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\+(\d+)$").unwrap()
});

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

enum LineCheck {
    /// No donations reported; the line carries no information and is dropped.
    Skip,
    Valid,
    Invalid,
}

fn check_line(line: &str) -> LineCheck {
    let parts: Vec<&str> = line.split(';').collect();

    // A line ending with a semicolon or an explicit 0 means the donor has no
    // new donations; such lines are skipped entirely.
    let last = parts.last().copied().unwrap_or("");
    if last.is_empty() || last == "0" {
        return LineCheck::Skip;
    }

    if parts.len() == FIELD_COUNT
        && parts.iter().all(|p| !p.is_empty())
        && is_numeric(last)
    {
        LineCheck::Valid
    } else {
        LineCheck::Invalid
    }
}

fn collapse_double_semicolons(line: &str) -> String {
    let mut repaired = line.to_string();
    while repaired.contains(";;") {
        repaired = repaired.replace(";;", ";");
    }
    repaired
}

/// Field-by-field repair of a line with the right number of fields.
///
/// Returns the repaired candidate and one message per defect. A wrong field
/// count is unrepairable: guessing which field is missing or extra would be
/// worse than asking the operator.
fn repair_line_fields(line: &str) -> (String, Vec<String>) {
    let mut errors = Vec::new();

    let parts: Vec<&str> = line.split(';').collect();
    if parts.len() < FIELD_COUNT {
        errors.push("not enough fields".to_string());
        return (line.to_string(), errors);
    }
    if parts.len() > FIELD_COUNT {
        errors.push("too many fields".to_string());
        return (line.to_string(), errors);
    }

    let rodne_cislo = parts[0];
    if rodne_cislo.is_empty() {
        errors.push("missing national id".to_string());
    } else if !is_numeric(rodne_cislo) {
        errors.push("national id is not numeric".to_string());
    } else if rodne_cislo.len() > 10 {
        errors.push("national id is too long".to_string());
    } else if rodne_cislo.len() < 9 {
        errors.push("national id is too short".to_string());
    }

    if parts[1].is_empty() {
        errors.push("missing first name".to_string());
    }
    if parts[2].is_empty() {
        errors.push("missing last name".to_string());
    }
    if parts[3].is_empty() {
        errors.push("missing street address".to_string());
    }
    if parts[4].is_empty() {
        errors.push("missing city".to_string());
    }

    let postal_code = if parts[5].is_empty() {
        errors.push("missing postal code, replaced with zeros".to_string());
        "00000"
    } else {
        parts[5]
    };

    let kod_pojistovny = if parts[6].is_empty() {
        errors.push("missing insurer code, replaced with zeros".to_string());
        "000"
    } else {
        parts[6]
    };

    let donation_count;
    if is_numeric(parts[7]) {
        donation_count = parts[7].to_string();
    } else if let Some(captures) = SUMMED_COUNT_RE.captures(parts[7]) {
        // Operators sometimes write "previous+new" instead of the total.
        let first: u32 = captures[1].parse().unwrap_or(0);
        let second: u32 = captures[2].parse().unwrap_or(0);
        donation_count = (first + second).to_string();
        errors.push(format!(
            "donation count {} replaced with the sum {}",
            parts[7], donation_count
        ));
    } else {
        donation_count = parts[7].to_string();
        errors.push("donation count is not numeric".to_string());
    }

    let repaired = [
        rodne_cislo,
        parts[1],
        parts[2],
        parts[3],
        parts[4],
        postal_code,
        kod_pojistovny,
        donation_count.as_str(),
    ]
    .join(";");

    (repaired, errors)
}

/// Validates one pasted import blob, line by line.
///
/// Already-valid lines pass through verbatim, so feeding the output back in
/// produces the same result.
pub fn validate_import_data(text: &str) -> ImportValidation {
    let mut result = ImportValidation::default();

    for line in text.lines() {
        let check = check_line(line);

        if matches!(check, LineCheck::Skip) {
            continue;
        }

        if line.contains(";;") {
            let repaired = collapse_double_semicolons(line);
            if matches!(check_line(&repaired), LineCheck::Valid) {
                result.invalid_lines.push(InvalidLine {
                    repaired,
                    errors: vec!["line contained a double semicolon".to_string()],
                });
                continue;
            }
        }

        let (repaired, errors) = repair_line_fields(line);
        if errors.is_empty() && matches!(check, LineCheck::Valid) {
            result.valid_lines.push(line.to_string());
        } else {
            result.invalid_lines.push(InvalidLine { repaired, errors });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LINE: &str = "451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;15";

    #[test]
    fn accepts_well_formed_line_verbatim() {
        let result = validate_import_data(VALID_LINE);
        assert_eq!(result.valid_lines, vec![VALID_LINE.to_string()]);
        assert!(result.invalid_lines.is_empty());
    }

    #[test]
    fn validation_is_idempotent_for_valid_lines() {
        let first = validate_import_data(VALID_LINE);
        let again = validate_import_data(&first.valid_lines.join("\n"));
        assert_eq!(first, again);
    }

    #[test]
    fn drops_lines_with_no_new_donations() {
        let text = "451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;\n\
                    451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;0";
        let result = validate_import_data(text);
        assert!(result.valid_lines.is_empty());
        assert!(result.invalid_lines.is_empty());
    }

    #[test]
    fn repairs_double_semicolon_but_asks_for_review() {
        let result = validate_import_data("123456789;;John;Doe;Main St;City;12345;111;5");
        assert!(result.valid_lines.is_empty());
        assert_eq!(result.invalid_lines.len(), 1);
        assert_eq!(
            result.invalid_lines[0].repaired,
            "123456789;John;Doe;Main St;City;12345;111;5"
        );
        assert_eq!(
            result.invalid_lines[0].errors,
            vec!["line contained a double semicolon".to_string()]
        );
    }

    #[test]
    fn collapses_runs_of_semicolons() {
        let result = validate_import_data("123456789;;;John;Doe;Main St;City;12345;111;5");
        assert_eq!(
            result.invalid_lines[0].repaired,
            "123456789;John;Doe;Main St;City;12345;111;5"
        );
    }

    #[test]
    fn wrong_field_count_is_unrepairable() {
        let result = validate_import_data("451201123;KAREL;VOMÁČKA;71600;213;15");
        assert_eq!(result.invalid_lines.len(), 1);
        assert_eq!(
            result.invalid_lines[0].errors,
            vec!["not enough fields".to_string()]
        );
        // The line comes back unchanged.
        assert_eq!(
            result.invalid_lines[0].repaired,
            "451201123;KAREL;VOMÁČKA;71600;213;15"
        );

        let result =
            validate_import_data("451201123;KAREL;VOMÁČKA;LIPOVÁ 33;x;OSTRAVA;71600;213;15");
        assert_eq!(
            result.invalid_lines[0].errors,
            vec!["too many fields".to_string()]
        );
    }

    #[test]
    fn substitutes_missing_postal_code_and_insurer() {
        let result = validate_import_data("451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;;;15");
        assert_eq!(result.invalid_lines.len(), 1);
        let invalid = &result.invalid_lines[0];
        assert_eq!(
            invalid.repaired,
            "451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;00000;000;15"
        );
        assert_eq!(
            invalid.errors,
            vec![
                "missing postal code, replaced with zeros".to_string(),
                "missing insurer code, replaced with zeros".to_string(),
            ]
        );
    }

    #[test]
    fn sums_operator_written_donation_count() {
        let result = validate_import_data("451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;12+3");
        assert_eq!(result.invalid_lines.len(), 1);
        let invalid = &result.invalid_lines[0];
        assert_eq!(
            invalid.repaired,
            "451201123;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;15"
        );
        assert_eq!(
            invalid.errors,
            vec!["donation count 12+3 replaced with the sum 15".to_string()]
        );
    }

    #[test]
    fn flags_national_id_defects() {
        let too_long = "12345678901;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;15";
        let result = validate_import_data(too_long);
        assert_eq!(
            result.invalid_lines[0].errors,
            vec!["national id is too long".to_string()]
        );

        let too_short = "12345678;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;15";
        let result = validate_import_data(too_short);
        assert_eq!(
            result.invalid_lines[0].errors,
            vec!["national id is too short".to_string()]
        );

        let not_numeric = "45120112x;KAREL;VOMÁČKA;LIPOVÁ 33;OSTRAVA;71600;213;15";
        let result = validate_import_data(not_numeric);
        assert_eq!(
            result.invalid_lines[0].errors,
            vec!["national id is not numeric".to_string()]
        );
    }

    #[test]
    fn collects_every_defect_of_a_line() {
        // Collapsing the doubled semicolons leaves only six fields, so the
        // original line falls through to field-by-field repair.
        let result = validate_import_data("451201123;;VOMÁČKA;LIPOVÁ 33;OSTRAVA;;213;abc");
        let invalid = &result.invalid_lines[0];
        assert_eq!(
            invalid.errors,
            vec![
                "missing first name".to_string(),
                "missing postal code, replaced with zeros".to_string(),
                "donation count is not numeric".to_string(),
            ]
        );
        assert_eq!(
            invalid.repaired,
            "451201123;;VOMÁČKA;LIPOVÁ 33;OSTRAVA;00000;213;abc"
        );
    }

    #[test]
    fn mixed_input_is_partitioned() {
        let text = format!(
            "{VALID_LINE}\n\
             invalid\n\
             451201124;PETR;NOVÁK;DLOUHÁ 1;PRAHA;11000;111;\n\
             123456789;;John;Doe;Main St;City;12345;111;5"
        );
        let result = validate_import_data(&text);
        assert_eq!(result.valid_lines, vec![VALID_LINE.to_string()]);
        assert_eq!(result.invalid_lines.len(), 2);
    }
}
