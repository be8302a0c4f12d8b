//! Academic degree extraction from imported last names.
//!
//! Donation centers export degrees mashed into the surname field in assorted
//! spellings ("NOVÁK ING.", "VESELÁ,dr"). The table below maps each known
//! degree to its canonical form. The order is load-bearing: "bc", "dr" and
//! "ing" sit at the bottom because they are substrings of longer degrees
//! ("bca", "mddr", "ing. arch.") that must be detected first.

use once_cell::sync::Lazy;
use regex::Regex;

/// Based on https://eprehledy.cz/ceske_tituly.php
const DEGREES: [(&str, &str); 23] = [
    (r"\Wbca\W?", "BcA."),
    (r"\Wicdr\W?", "ICDr."),
    (r"\Wing\. ?arch\W?", "Ing. arch."),
    (r"\Wjudr\W?", "JUDr."),
    (r"\Wmddr\W?", "MDDr."),
    (r"\Wmga\W?", "MgA."),
    (r"\Wmgr\W?", "Mgr."),
    (r"\Wmsdr\W?", "MSDr."),
    (r"\Wmudr\W?", "MUDr."),
    (r"\Wmvdr\W?", "MVDr."),
    (r"\Wpaed?dr\W?", "PaedDr."),
    (r"\Wpharmdr\W?", "PharmDr."),
    (r"\Wphdr\W?", "PhDr."),
    (r"\Wphmr\W?", "PhMr."),
    (r"\Wrcdr\W?", "RCDr."),
    (r"\Wrtdr\W?", "RTDr."),
    (r"\Wrndr\W?", "RNDr."),
    (r"\Wrsdr\W?", "RSDr."),
    (r"\Wthdr\W?", "ThDr."),
    (r"\Wthlic\W?", "ThLic."),
    (r"\Wbc\W?", "Bc."),
    (r"\Wdr\W?", "Dr."),
    (r"\Wing\W?", "Ing."),
];

static DEGREE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    DEGREES
        .iter()
        .map(|(pattern, canonical)| {
            let re = Regex::new(&format!("(?i){pattern}")).unwrap();
            (re, *canonical)
        })
        .collect()
});

/// Splits degree tokens out of a last name.
///
/// Returns the cleaned last name and the canonical degrees joined with
/// spaces, ordered as they appeared in the input ("surname ing.mgr." gives
/// "Ing. Mgr.", not "Mgr. Ing.").
pub fn split_degrees(last_name: &str) -> (String, String) {
    let original = last_name;
    let mut working = last_name.to_string();
    let mut detected: Vec<(usize, &'static str)> = Vec::new();

    for (re, canonical) in DEGREE_PATTERNS.iter() {
        let matched = match re.find(&working) {
            Some(m) => m.as_str().to_string(),
            None => continue,
        };

        working = working
            .split(matched.as_str())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");

        // Ordering comes from where the degree sat in the original input.
        if let Some(m) = re.find(original) {
            detected.push((m.start(), canonical));
        }
    }

    let cleaned = working
        .trim()
        .trim_end_matches(',')
        .trim()
        .to_string();

    detected.sort_by_key(|(position, _)| *position);
    let degrees = detected
        .iter()
        .map(|(_, canonical)| *canonical)
        .collect::<Vec<_>>()
        .join(" ");

    (cleaned, degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(split_degrees("NOVÁK"), ("NOVÁK".to_string(), String::new()));
    }

    #[test]
    fn extracts_single_degree_variants() {
        assert_eq!(
            split_degrees("VESELÁ,dr"),
            ("VESELÁ".to_string(), "Dr.".to_string())
        );
        assert_eq!(
            split_degrees("ŠIMEK,BCA."),
            ("ŠIMEK".to_string(), "BcA.".to_string())
        );
        assert_eq!(
            split_degrees("MAREŠOVÁ    rndr"),
            ("MAREŠOVÁ".to_string(), "RNDr.".to_string())
        );
        assert_eq!(
            split_degrees("MARKOVÁ mudr"),
            ("MARKOVÁ".to_string(), "MUDr.".to_string())
        );
        assert_eq!(
            split_degrees("POLÁKOVÁ,MVDR."),
            ("POLÁKOVÁ".to_string(), "MVDr.".to_string())
        );
        assert_eq!(
            split_degrees("URBAN MGA."),
            ("URBAN".to_string(), "MgA.".to_string())
        );
    }

    #[test]
    fn compound_degree_wins_over_its_prefix() {
        // "ing.arch." must resolve to the architecture degree, not "Ing.".
        assert_eq!(
            split_degrees("ČERMÁK ing.arch."),
            ("ČERMÁK".to_string(), "Ing. arch.".to_string())
        );
    }

    #[test]
    fn multiple_degrees_keep_input_order() {
        assert_eq!(
            split_degrees("DVOŘÁK ing.MGR."),
            ("DVOŘÁK".to_string(), "Ing. Mgr.".to_string())
        );
        assert_eq!(
            split_degrees("DOLEŽAL,bca,phdr"),
            ("DOLEŽAL".to_string(), "BcA. PhDr.".to_string())
        );
        assert_eq!(
            split_degrees("surname ing.mgr."),
            ("surname".to_string(), "Ing. Mgr.".to_string())
        );
    }
}
