use std::path::Path;

use chrono::Datelike;

use crate::commands::connect;
use crate::domain::errors::RegistryError;
use crate::domain::services::rodne_cislo::date_of_birth_from_rc;
use crate::infrastructure::persistence::entities::{donation_centers, donors_overview};

/// Execute the export-donors command: write every overview row as a CSV
/// line with the donor's birth date and the centers they donated at.
pub async fn export_donors(output: &Path) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let mut centers = repos.donation_center.all().await?;
    centers.sort_by(|a, b| b.slug.cmp(&a.slug));

    let donors = repos.overview.all().await?;

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record([
        "first_name",
        "last_name",
        "date_of_birth",
        "address",
        "city",
        "postal_code",
        "kod_pojistovny",
        "donation_centers",
    ])?;

    let count = donors.len();
    for donor in donors {
        writer.write_record(donor_as_row(&donor, &centers))?;
    }
    writer.flush()?;

    println!("Exported {} donors to {}", count, output.display());
    Ok(())
}

/// One donor rendered for the export: personal data, the birth date decoded
/// from the national id, and the titles of centers with a nonzero count.
fn donor_as_row(
    donor: &donors_overview::Model,
    centers: &[donation_centers::Model],
) -> Vec<String> {
    let centers_list = centers
        .iter()
        .filter(|center| donor.donation_count_for(&center.slug).unwrap_or(0) > 0)
        .map(|center| center.title.clone())
        .collect::<Vec<_>>()
        .join(", ");

    let date_of_birth = date_of_birth_from_rc(&donor.rodne_cislo)
        .map(|date| format!("{}. {}. {}", date.day(), date.month(), date.year()))
        .unwrap_or_default();

    vec![
        donor.first_name.clone(),
        donor.last_name.clone(),
        date_of_birth,
        donor.address.clone(),
        donor.city.clone(),
        donor.postal_code.clone(),
        donor.kod_pojistovny.clone(),
        centers_list,
    ]
}
