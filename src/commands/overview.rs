use crate::application::overview::OverviewRefresher;
use crate::commands::connect;
use crate::domain::errors::RegistryError;

/// Execute the refresh-overview command
pub async fn refresh(rodne_cislo: Option<&str>) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;
    let refresher = OverviewRefresher::new(repos);

    let rows = refresher.refresh(rodne_cislo).await?;
    match rodne_cislo {
        Some(rc) => println!("Overview refreshed for donor {} ({} row)", rc, rows),
        None => println!("Overview rebuilt: {} donors", rows),
    }
    Ok(())
}
