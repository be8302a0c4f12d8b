//! Text helpers for display and import pre-fill.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::infrastructure::persistence::entities::donors_overview;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w{2,}").unwrap());

fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// Capitalizes words that are entirely upper-case, leaving mixed-case words
/// alone. Imported data arrives in all caps; names someone already typed
/// with proper casing must not be mangled.
pub fn capitalize(text: &str) -> String {
    WORD_RE
        .replace_all(text, |captures: &regex::Captures| {
            let word = &captures[0];
            if is_all_uppercase(word) {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>()
                            + &chars.as_str().to_lowercase()
                    }
                    None => word.to_string(),
                }
            } else {
                word.to_string()
            }
        })
        .to_string()
}

/// Upper-cases only the first character.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders an overview row back into an import line.
///
/// Used to pre-fill the next import for a donor. With `sum_with_last` the
/// count is rendered as "previous+delta" so the line parser's sum repair
/// computes the new cumulative total; centers that report increments are
/// pre-filled this way.
pub fn record_as_input_line(
    donor: &donors_overview::Model,
    donation_count: Option<i32>,
    sum_with_last: bool,
) -> String {
    let count_field = match donation_count {
        Some(new_count) if sum_with_last => {
            format!("{}+{}", donor.donation_count_total, new_count)
        }
        Some(new_count) => new_count.to_string(),
        None => donor.donation_count_total.to_string(),
    };

    [
        donor.rodne_cislo.as_str(),
        donor.first_name.as_str(),
        donor.last_name.as_str(),
        donor.address.as_str(),
        donor.city.as_str(),
        donor.postal_code.as_str(),
        donor.kod_pojistovny.as_str(),
        count_field.as_str(),
    ]
    .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_fully_uppercase_words() {
        assert_eq!(capitalize("karlov"), "karlov");
        assert_eq!(capitalize("Karlov"), "Karlov");
        assert_eq!(capitalize("KARLOV"), "Karlov");
        assert_eq!(capitalize("Velké KARLOVICE"), "Velké Karlovice");
        assert_eq!(capitalize("velké karlovice"), "velké karlovice");
        assert_eq!(capitalize("VELKÉ karlovice"), "Velké karlovice");
        assert_eq!(capitalize("VELKÉ KARLOVICE"), "Velké Karlovice");
        assert_eq!(capitalize("a b c d"), "a b c d");
        assert_eq!(capitalize("A B C D"), "A B C D");
        assert_eq!(capitalize("U LÍPY"), "U Lípy");
        assert_eq!(capitalize("Frýdlant nad Ostravicí"), "Frýdlant nad Ostravicí");
        assert_eq!(capitalize("FRÝDLANT NAD OSTRAVICÍ"), "Frýdlant Nad Ostravicí");
        assert_eq!(capitalize("LIPOVÁ 33"), "Lipová 33");
    }

    #[test]
    fn capitalize_first_touches_only_the_first_character() {
        assert_eq!(capitalize_first("bronzovou medaili"), "Bronzovou medaili");
        assert_eq!(capitalize_first(""), "");
    }

    fn donor() -> donors_overview::Model {
        donors_overview::Model {
            rodne_cislo: "0407156596".to_string(),
            first_name: "JAN".to_string(),
            last_name: "NOVÁK".to_string(),
            address: "DLOUHÁ 1".to_string(),
            city: "PRAHA".to_string(),
            postal_code: "11000".to_string(),
            kod_pojistovny: "111".to_string(),
            donation_count_fm: 12,
            donation_count_fm_bubenik: 0,
            donation_count_trinec: 0,
            donation_count_manual: 0,
            donation_count_total: 12,
            awarded_medal_br: false,
            awarded_medal_st: false,
            awarded_medal_zl: false,
            awarded_medal_kr3: false,
            awarded_medal_kr2: false,
            awarded_medal_kr1: false,
            awarded_medal_plk: false,
        }
    }

    #[test]
    fn renders_import_line_from_overview_row() {
        assert_eq!(
            record_as_input_line(&donor(), None, false),
            "0407156596;JAN;NOVÁK;DLOUHÁ 1;PRAHA;11000;111;12"
        );
    }

    #[test]
    fn replaces_or_sums_the_donation_count() {
        assert_eq!(
            record_as_input_line(&donor(), Some(15), false),
            "0407156596;JAN;NOVÁK;DLOUHÁ 1;PRAHA;11000;111;15"
        );
        // Increment-reporting centers pre-fill "previous+delta" and let the
        // line parser's sum repair compute the total.
        assert_eq!(
            record_as_input_line(&donor(), Some(3), true),
            "0407156596;JAN;NOVÁK;DLOUHÁ 1;PRAHA;11000;111;12+3"
        );
    }
}
