use crate::application::overview::OverviewRefresher;
use crate::commands::connect;
use crate::domain::errors::RegistryError;
use crate::domain::services::medals::{eligible_medals, highest_medal_held};
use crate::infrastructure::persistence::entities::donors_override;
use crate::utils::text::{capitalize, capitalize_first, record_as_input_line};

/// Execute the ignore-donor command. The donor's records stay in the
/// ledger; only the overview row disappears.
pub async fn ignore(rodne_cislo: &str, reason: &str) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    repos
        .ignored_donor
        .add(rodne_cislo, reason, chrono::Utc::now().naive_utc())
        .await?;

    let refresher = OverviewRefresher::new(repos);
    refresher.refresh(Some(rodne_cislo)).await?;

    println!("Donor {} is now ignored.", rodne_cislo);
    Ok(())
}

/// Execute the unignore-donor command.
pub async fn unignore(rodne_cislo: &str) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    repos.ignored_donor.remove(rodne_cislo).await?;

    let refresher = OverviewRefresher::new(repos);
    refresher.refresh(Some(rodne_cislo)).await?;

    println!("Donor {} is back in the overview.", rodne_cislo);
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct OverrideFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub kod_pojistovny: Option<String>,
}

/// Execute the set-override command. Only the given fields take precedence
/// over imported data; the rest keep following the ledger.
pub async fn set_override(rodne_cislo: &str, fields: OverrideFields) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let row = donors_override::Model {
        rodne_cislo: rodne_cislo.to_string(),
        first_name: fields.first_name,
        last_name: fields.last_name,
        address: fields.address,
        city: fields.city,
        postal_code: fields.postal_code,
        kod_pojistovny: fields.kod_pojistovny,
    };
    repos.override_.save(row).await?;

    let refresher = OverviewRefresher::new(repos);
    refresher.refresh(Some(rodne_cislo)).await?;

    println!("Override saved for donor {}.", rodne_cislo);
    Ok(())
}

/// Execute the clear-override command.
pub async fn clear_override(rodne_cislo: &str) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    repos.override_.delete(rodne_cislo).await?;

    let refresher = OverviewRefresher::new(repos);
    refresher.refresh(Some(rodne_cislo)).await?;

    println!("Override cleared for donor {}.", rodne_cislo);
    Ok(())
}

/// Execute the donor-detail command: overview row, donation history,
/// contacts and medal standing for one donor.
pub async fn detail(rodne_cislo: &str) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let donor = repos
        .overview
        .get(rodne_cislo)
        .await?
        .ok_or_else(|| RegistryError::DonorNotFound(rodne_cislo.to_string()))?;

    println!(
        "{} {} ({})",
        capitalize(&donor.first_name),
        capitalize(&donor.last_name),
        donor.rodne_cislo
    );
    println!(
        "{}, {} {}, insurer {}",
        capitalize(&donor.address),
        donor.postal_code,
        capitalize(&donor.city),
        donor.kod_pojistovny
    );

    for center in repos.donation_center.all().await? {
        if let Some(count) = donor.donation_count_for(&center.slug) {
            println!("{}: {}", center.title, count);
        }
    }
    println!("Manual: {}", donor.donation_count_manual);
    println!("Total: {}", donor.donation_count_total);

    let all_medals = repos.medal.all().await?;
    match highest_medal_held(&donor, &all_medals) {
        Some(medal) => println!("Highest medal held: {}", medal.title),
        None => println!("Highest medal held: none"),
    }
    for medal in eligible_medals(&donor, &all_medals) {
        println!("Due: {}", capitalize_first(&medal.title_acc));
    }

    if let Some(note) = repos.note.get(rodne_cislo).await? {
        for email in note.emails() {
            println!("E-mail: {}", email);
        }
        for phone in note.phones() {
            println!("Phone: {}", phone);
        }
    }

    println!("History:");
    for record in repos.record.find_by_rodne_cislo(rodne_cislo).await? {
        println!(
            "batch {}: {} {} {} donations",
            record.batch_id, record.first_name, record.last_name, record.donation_count
        );
    }
    Ok(())
}

/// Execute the prepare-line command: render a donor's next import line.
///
/// For centers that report increments the count is pre-filled as
/// "previous+delta"; everywhere else the new count replaces the old one.
pub async fn prepare_line(
    rodne_cislo: &str,
    donation_count: Option<i32>,
    center_slug: Option<&str>,
) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let donor = repos
        .overview
        .get(rodne_cislo)
        .await?
        .ok_or_else(|| RegistryError::DonorNotFound(rodne_cislo.to_string()))?;

    let sum_with_last = match center_slug {
        Some(slug) => {
            let center = repos
                .donation_center
                .find_by_slug(slug)
                .await?
                .ok_or_else(|| RegistryError::UnknownCenterSlug(slug.to_string()))?;
            center.import_increments
        }
        None => false,
    };

    println!("{}", record_as_input_line(&donor, donation_count, sum_with_last));
    Ok(())
}
