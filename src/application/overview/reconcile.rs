//! Pure per-donor reduction from the record ledger to an overview row.
//!
//! Runs entirely in memory so it can be exercised with fixtures. The rules:
//! the newest record overall supplies the personal data, the newest record
//! per center supplies that center's cumulative count, and the total is the
//! sum of the per-center counts, never the count of any single record.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::application::overview::snapshot::{CenterSlot, Snapshot};
use crate::domain::services::degrees::split_degrees;
use crate::infrastructure::persistence::entities::{
    donors_override, donors_overview, records,
};

/// One ledger record joined with its batch's timestamp and center.
#[derive(Debug, Clone)]
pub struct DonorRecord<'a> {
    pub record: &'a records::Model,
    pub imported_at: NaiveDateTime,
    pub donation_center_id: Option<i32>,
}

/// Newer batch wins; two records from the same moment are broken by the
/// higher donation count. Records at equal timestamp and count should not
/// differ otherwise, so the remaining tie is irrelevant.
fn recency_key(dr: &DonorRecord) -> (NaiveDateTime, i32) {
    (dr.imported_at, dr.record.donation_count)
}

#[derive(Debug, Default)]
struct CenterCounts {
    fm: i32,
    fm_bubenik: i32,
    trinec: i32,
    manual: i32,
}

impl CenterCounts {
    fn set(&mut self, slot: CenterSlot, count: i32) {
        match slot {
            CenterSlot::Fm => self.fm = count,
            CenterSlot::FmBubenik => self.fm_bubenik = count,
            CenterSlot::Trinec => self.trinec = count,
            CenterSlot::Manual => self.manual = count,
        }
    }

    fn total(&self) -> i32 {
        self.fm + self.fm_bubenik + self.trinec + self.manual
    }
}

fn override_field(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) => v.clone(),
        None => fallback.to_string(),
    }
}

/// Computes one donor's overview row from their full record history.
///
/// Returns None for an empty history; such donors have no overview row.
pub fn reconcile_donor(
    rodne_cislo: &str,
    history: &[DonorRecord],
    override_row: Option<&donors_override::Model>,
    awarded_medal_ids: &HashSet<i32>,
    snapshot: &Snapshot,
) -> Option<donors_overview::Model> {
    let newest = history.iter().max_by_key(|dr| recency_key(dr))?;

    let mut counts = CenterCounts::default();
    for slot in [
        CenterSlot::Fm,
        CenterSlot::FmBubenik,
        CenterSlot::Trinec,
        CenterSlot::Manual,
    ] {
        let latest_at_center = history
            .iter()
            .filter(|dr| snapshot.slot_for_center(dr.donation_center_id) == slot)
            .max_by_key(|dr| recency_key(dr));
        if let Some(dr) = latest_at_center {
            counts.set(slot, dr.record.donation_count);
        }
    }

    let record = newest.record;
    let mut row = donors_overview::Model {
        rodne_cislo: rodne_cislo.to_string(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        address: record.address.clone(),
        city: record.city.clone(),
        postal_code: record.postal_code.clone(),
        kod_pojistovny: record.kod_pojistovny.clone(),
        donation_count_fm: counts.fm,
        donation_count_fm_bubenik: counts.fm_bubenik,
        donation_count_trinec: counts.trinec,
        donation_count_manual: counts.manual,
        donation_count_total: counts.total(),
        awarded_medal_br: false,
        awarded_medal_st: false,
        awarded_medal_zl: false,
        awarded_medal_kr3: false,
        awarded_medal_kr2: false,
        awarded_medal_kr1: false,
        awarded_medal_plk: false,
    };

    if let Some(ovr) = override_row {
        row.first_name = override_field(&ovr.first_name, &row.first_name);
        row.last_name = override_field(&ovr.last_name, &row.last_name);
        row.address = override_field(&ovr.address, &row.address);
        row.city = override_field(&ovr.city, &row.city);
        row.postal_code = override_field(&ovr.postal_code, &row.postal_code);
        row.kod_pojistovny = override_field(&ovr.kod_pojistovny, &row.kod_pojistovny);
    }

    for medal in &snapshot.medals {
        let held = awarded_medal_ids.contains(&medal.id);
        match medal.slug.as_str() {
            "br" => row.awarded_medal_br = held,
            "st" => row.awarded_medal_st = held,
            "zl" => row.awarded_medal_zl = held,
            "kr3" => row.awarded_medal_kr3 = held,
            "kr2" => row.awarded_medal_kr2 = held,
            "kr1" => row.awarded_medal_kr1 = held,
            "plk" => row.awarded_medal_plk = held,
            // Snapshot construction already rejected unknown slugs.
            _ => {}
        }
    }

    Some(row)
}

/// Moves degree tokens out of the last name into the first name, keeping
/// their original order. Runs as a post-pass over freshly computed rows; the
/// character check is a cheap filter before the regex table.
pub fn apply_degree_extraction(row: &mut donors_overview::Model) {
    if !row.last_name.contains([' ', '.', ',']) {
        return;
    }

    let (cleaned, degrees) = split_degrees(&row.last_name);
    if degrees.is_empty() {
        return;
    }

    row.last_name = cleaned;
    row.first_name = format!("{} {}", degrees, row.first_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::entities::{donation_centers, medals};

    fn snapshot() -> Snapshot {
        let centers = vec![
            center(1, "fm", "Nemocnice F-M"),
            center(2, "fm_bubenik", "Krevní centrum"),
            center(3, "trinec", "Nemocnice Třinec"),
        ];
        let medals = vec![
            medal(1, "br", 10),
            medal(2, "st", 20),
            medal(3, "zl", 40),
            medal(4, "kr3", 80),
            medal(5, "kr2", 120),
            medal(6, "kr1", 160),
            medal(7, "plk", 250),
        ];
        Snapshot::new(centers, medals).unwrap()
    }

    fn center(id: i32, slug: &str, title: &str) -> donation_centers::Model {
        donation_centers::Model {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
            import_increments: false,
        }
    }

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

    fn record(id: i32, first_name: &str, count: i32) -> records::Model {
        records::Model {
            id,
            batch_id: 0,
            rodne_cislo: "0407156596".to_string(),
            first_name: first_name.to_string(),
            last_name: "NOVÁK".to_string(),
            address: "DLOUHÁ 1".to_string(),
            city: "PRAHA".to_string(),
            postal_code: "11000".to_string(),
            kod_pojistovny: "111".to_string(),
            donation_count: count,
        }
    }

    fn at(day: u32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_history_yields_no_row() {
        let row = reconcile_donor(
            "0407156596",
            &[],
            None,
            &HashSet::new(),
            &snapshot(),
        );
        assert!(row.is_none());
    }

    #[test]
    fn per_center_counts_come_from_latest_record_at_each_center() {
        let snap = snapshot();
        let r1 = record(1, "JAN", 10);
        let r2 = record(2, "JAN", 4);
        let history = vec![
            DonorRecord {
                record: &r1,
                imported_at: at(1),
                donation_center_id: Some(1),
            },
            DonorRecord {
                record: &r2,
                imported_at: at(2),
                donation_center_id: Some(3),
            },
        ];

        let row = reconcile_donor("0407156596", &history, None, &HashSet::new(), &snap).unwrap();
        assert_eq!(row.donation_count_fm, 10);
        assert_eq!(row.donation_count_trinec, 4);
        assert_eq!(row.donation_count_fm_bubenik, 0);
        assert_eq!(row.donation_count_manual, 0);
        // The total is per-center sums, not the newest record's count.
        assert_eq!(row.donation_count_total, 14);
    }

    #[test]
    fn latest_cumulative_value_replaces_older_one_at_same_center() {
        let snap = snapshot();
        let older = record(1, "JAN", 10);
        let newer = record(2, "JAN", 12);
        let history = vec![
            DonorRecord {
                record: &older,
                imported_at: at(1),
                donation_center_id: Some(1),
            },
            DonorRecord {
                record: &newer,
                imported_at: at(5),
                donation_center_id: Some(1),
            },
        ];

        let row = reconcile_donor("0407156596", &history, None, &HashSet::new(), &snap).unwrap();
        assert_eq!(row.donation_count_fm, 12);
        assert_eq!(row.donation_count_total, 12);
    }

    #[test]
    fn same_timestamp_breaks_tie_by_higher_count() {
        let snap = snapshot();
        let low = record(1, "OLD", 3);
        let high = record(2, "NEW", 7);
        let history = vec![
            DonorRecord {
                record: &low,
                imported_at: at(1),
                donation_center_id: Some(1),
            },
            DonorRecord {
                record: &high,
                imported_at: at(1),
                donation_center_id: Some(1),
            },
        ];

        let row = reconcile_donor("0407156596", &history, None, &HashSet::new(), &snap).unwrap();
        assert_eq!(row.donation_count_fm, 7);
        assert_eq!(row.first_name, "NEW");
    }

    #[test]
    fn personal_data_comes_from_newest_record_across_centers() {
        let snap = snapshot();
        let older = record(1, "STARÝ", 10);
        let newer = record(2, "NOVÝ", 2);
        let history = vec![
            DonorRecord {
                record: &older,
                imported_at: at(1),
                donation_center_id: Some(1),
            },
            DonorRecord {
                record: &newer,
                imported_at: at(9),
                donation_center_id: None,
            },
        ];

        let row = reconcile_donor("0407156596", &history, None, &HashSet::new(), &snap).unwrap();
        assert_eq!(row.first_name, "NOVÝ");
        assert_eq!(row.donation_count_fm, 10);
        assert_eq!(row.donation_count_manual, 2);
        assert_eq!(row.donation_count_total, 12);
    }

    #[test]
    fn override_wins_field_by_field() {
        let snap = snapshot();
        let r = record(1, "JOHN", 5);
        let history = vec![DonorRecord {
            record: &r,
            imported_at: at(1),
            donation_center_id: Some(1),
        }];
        let override_row = donors_override::Model {
            rodne_cislo: "0407156596".to_string(),
            first_name: Some("Jonathan".to_string()),
            last_name: None,
            address: None,
            city: Some("BRNO".to_string()),
            postal_code: None,
            kod_pojistovny: None,
        };

        let row = reconcile_donor(
            "0407156596",
            &history,
            Some(&override_row),
            &HashSet::new(),
            &snap,
        )
        .unwrap();
        assert_eq!(row.first_name, "Jonathan");
        assert_eq!(row.last_name, "NOVÁK");
        assert_eq!(row.city, "BRNO");
        assert_eq!(row.postal_code, "11000");
    }

    #[test]
    fn medal_flags_reflect_awards() {
        let snap = snapshot();
        let r = record(1, "JAN", 25);
        let history = vec![DonorRecord {
            record: &r,
            imported_at: at(1),
            donation_center_id: Some(1),
        }];
        let awarded: HashSet<i32> = [1, 2].into_iter().collect();

        let row = reconcile_donor("0407156596", &history, None, &awarded, &snap).unwrap();
        assert!(row.awarded_medal_br);
        assert!(row.awarded_medal_st);
        assert!(!row.awarded_medal_zl);
    }

    #[test]
    fn degree_post_pass_moves_degrees_to_first_name() {
        let mut row = donors_overview::Model {
            rodne_cislo: "0407156596".to_string(),
            first_name: "PETR".to_string(),
            last_name: "NOVAK ING.".to_string(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            kod_pojistovny: String::new(),
            donation_count_fm: 0,
            donation_count_fm_bubenik: 0,
            donation_count_trinec: 0,
            donation_count_manual: 0,
            donation_count_total: 0,
            awarded_medal_br: false,
            awarded_medal_st: false,
            awarded_medal_zl: false,
            awarded_medal_kr3: false,
            awarded_medal_kr2: false,
            awarded_medal_kr1: false,
            awarded_medal_plk: false,
        };

        apply_degree_extraction(&mut row);
        assert_eq!(row.first_name, "Ing. PETR");
        assert_eq!(row.last_name, "NOVAK");

        // Plain last names are left alone.
        let mut plain = row.clone();
        plain.first_name = "JAN".to_string();
        plain.last_name = "NOVÁK".to_string();
        apply_degree_extraction(&mut plain);
        assert_eq!(plain.first_name, "JAN");
        assert_eq!(plain.last_name, "NOVÁK");
    }
}
