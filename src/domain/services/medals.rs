//! Medal eligibility rules.
//!
//! Medals are totally ordered by the donation count they require. A donor is
//! due a medal once their total reaches its threshold and they do not hold
//! it yet; holding a higher medal does not imply holding a lower one.

use crate::infrastructure::persistence::entities::{donors_overview, medals};

/// True when the donor's total reaches the medal threshold and the medal has
/// not been awarded yet.
pub fn is_eligible(donation_count_total: i32, medal: &medals::Model, already_awarded: bool) -> bool {
    donation_count_total >= medal.minimum_donations && !already_awarded
}

/// Medals from `all_medals` the donor is due, in threshold order.
///
/// `all_medals` must be sorted by `minimum_donations` ascending, as
/// `MedalRepository::all` returns them.
pub fn eligible_medals<'a>(
    overview: &donors_overview::Model,
    all_medals: &'a [medals::Model],
) -> Vec<&'a medals::Model> {
    all_medals
        .iter()
        .filter(|medal| {
            let held = overview.awarded_medal(&medal.slug).unwrap_or(false);
            is_eligible(overview.donation_count_total, medal, held)
        })
        .collect()
}

/// The awarded medal with the greatest threshold, or None.
pub fn highest_medal_held<'a>(
    overview: &donors_overview::Model,
    all_medals: &'a [medals::Model],
) -> Option<&'a medals::Model> {
    all_medals
        .iter()
        .filter(|medal| overview.awarded_medal(&medal.slug).unwrap_or(false))
        .max_by(|a, b| a.cmp_by_threshold(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medal(id: i32, slug: &str, minimum: i32) -> medals::Model {
        medals::Model {
            id,
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            title_acc: slug.to_string(),
            title_instr: slug.to_string(),
            minimum_donations: minimum,
        }
    }

    fn overview(total: i32) -> donors_overview::Model {
        donors_overview::Model {
            rodne_cislo: "0407156596".to_string(),
            first_name: "JAN".to_string(),
            last_name: "NOVÁK".to_string(),
            address: "DLOUHÁ 1".to_string(),
            city: "PRAHA".to_string(),
            postal_code: "11000".to_string(),
            kod_pojistovny: "111".to_string(),
            donation_count_fm: total,
            donation_count_fm_bubenik: 0,
            donation_count_trinec: 0,
            donation_count_manual: 0,
            donation_count_total: total,
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
    fn eligibility_needs_threshold_and_no_prior_award() {
        let bronze = medal(1, "br", 10);
        assert!(is_eligible(10, &bronze, false));
        assert!(is_eligible(25, &bronze, false));
        assert!(!is_eligible(9, &bronze, false));
        assert!(!is_eligible(25, &bronze, true));
    }

    #[test]
    fn lists_all_due_medals_in_threshold_order() {
        let all = vec![medal(1, "br", 10), medal(2, "st", 20), medal(3, "zl", 40)];
        let mut row = overview(25);
        row.awarded_medal_br = true;

        let due = eligible_medals(&row, &all);
        let slugs: Vec<&str> = due.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(slugs, vec!["st"]);
    }

    #[test]
    fn highest_held_medal_by_threshold() {
        let all = vec![medal(1, "br", 10), medal(2, "st", 20), medal(3, "zl", 40)];
        let mut row = overview(50);
        assert!(highest_medal_held(&row, &all).is_none());

        row.awarded_medal_br = true;
        row.awarded_medal_st = true;
        let highest = highest_medal_held(&row, &all).map(|m| m.slug.as_str());
        assert_eq!(highest, Some("st"));
    }
}
