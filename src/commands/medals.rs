use crate::application::overview::OverviewRefresher;
use crate::commands::connect;
use crate::domain::errors::RegistryError;
use crate::utils::text::capitalize;

/// Execute the award-prep command: list donors due the given medal.
pub async fn award_prep(medal_slug: &str) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let medal = repos
        .medal
        .find_by_slug(medal_slug)
        .await?
        .ok_or_else(|| RegistryError::MedalNotFound(medal_slug.to_string()))?;

    let donors = repos.overview.eligible_for_medal(&medal).await?;

    println!(
        "{} donors eligible for {} (at least {} donations):",
        donors.len(),
        medal.title,
        medal.minimum_donations
    );
    for donor in donors {
        println!(
            "{}  {} {}  {} donations",
            donor.rodne_cislo,
            capitalize(&donor.first_name),
            capitalize(&donor.last_name),
            donor.donation_count_total
        );
    }
    Ok(())
}

/// Execute the award-medal command for one or more donors.
pub async fn award(medal_slug: &str, rodna_cisla: &[String]) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let medal = repos
        .medal
        .find_by_slug(medal_slug)
        .await?
        .ok_or_else(|| RegistryError::MedalNotFound(medal_slug.to_string()))?;

    let refresher = OverviewRefresher::new(repos.clone());
    let awarded_at = chrono::Utc::now().naive_utc();

    for rodne_cislo in rodna_cisla {
        if repos.overview.get(rodne_cislo).await?.is_none() {
            return Err(RegistryError::DonorNotFound(rodne_cislo.clone()));
        }
        repos
            .awarded_medal
            .award(rodne_cislo, medal.id, Some(awarded_at))
            .await?;
        refresher.refresh(Some(rodne_cislo.as_str())).await?;
    }

    if rodna_cisla.len() == 1 {
        println!("Medal awarded.");
    } else {
        println!("Medals awarded to {} donors.", rodna_cisla.len());
    }
    Ok(())
}

/// Execute the remove-medal command (un-award).
pub async fn remove(medal_slug: &str, rodne_cislo: &str) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let medal = repos
        .medal
        .find_by_slug(medal_slug)
        .await?
        .ok_or_else(|| RegistryError::MedalNotFound(medal_slug.to_string()))?;

    repos.awarded_medal.remove(rodne_cislo, medal.id).await?;

    let refresher = OverviewRefresher::new(repos);
    refresher.refresh(Some(rodne_cislo)).await?;

    println!("Medal removed.");
    Ok(())
}
