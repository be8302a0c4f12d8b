use std::fs;
use std::path::Path;

use tracing::warn;

use crate::application::import::contact_import::convert_csv_to_text;
use crate::application::import::{BatchImporter, ContactImporter};
use crate::commands::connect;
use crate::domain::errors::RegistryError;
use crate::domain::services::line_parser::{validate_import_data, ImportValidation};

fn report_invalid_lines(validation: &ImportValidation) {
    for invalid in &validation.invalid_lines {
        warn!(
            "needs review: {} ({})",
            invalid.repaired,
            invalid.errors.join("; ")
        );
    }
}

/// Execute the import command: one donation-center export file becomes one
/// batch. Lines the repairer could not fully fix are printed with their
/// repair candidates; fix them in the file and rerun.
pub async fn import(file: &Path, center_slug: Option<&str>) -> Result<(), RegistryError> {
    let text = fs::read_to_string(file)?;

    let validation = validate_import_data(&text);
    // An input of only zero-donation lines filters down to nothing; that is
    // not a repair situation.
    if validation.is_empty() {
        return Err(RegistryError::NothingToImport);
    }
    if !validation.invalid_lines.is_empty() {
        report_invalid_lines(&validation);
        return Err(RegistryError::InvalidLinesPresent);
    }

    let (_pool, repos) = connect().await?;
    let importer = BatchImporter::new(repos);
    let outcome = importer
        .import_lines(&validation.valid_lines, center_slug)
        .await?;

    println!(
        "Imported batch {} with {} records; overview now covers {} donors",
        outcome.batch_id, outcome.records_imported, outcome.donors_refreshed
    );
    Ok(())
}

/// Execute the import-contacts command
pub async fn import_contacts(
    file: &Path,
    imported_by: Option<&str>,
    is_csv: bool,
) -> Result<(), RegistryError> {
    let text = if is_csv {
        convert_csv_to_text(fs::File::open(file)?)?
    } else {
        fs::read_to_string(file)?
    };

    let (_pool, repos) = connect().await?;
    let importer = ContactImporter::new(repos);

    let validation = importer.validate(&text).await?;
    if !validation.invalid_lines.is_empty() {
        report_invalid_lines(&validation);
        return Err(RegistryError::InvalidLinesPresent);
    }

    let filename = file.file_name().and_then(|name| name.to_str());
    let stats = importer.import(&text, imported_by, filename).await?;

    println!(
        "Processed {} lines: {} new notes, {} updated, {} e-mails and {} phones added",
        stats.processed_lines,
        stats.created_notes,
        stats.updated_notes,
        stats.emails_added,
        stats.phones_added
    );
    Ok(())
}

/// Execute the delete-batch command
pub async fn delete_batch(batch_id: i32) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;
    let importer = BatchImporter::new(repos);
    let donors = importer.delete_batch(batch_id).await?;

    println!("Batch {} deleted; overview now covers {} donors", batch_id, donors);
    Ok(())
}

/// Execute the batch-detail command: show one batch and its records.
pub async fn batch_detail(batch_id: i32) -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    let batch = repos
        .batch
        .find_by_id(batch_id)
        .await?
        .ok_or(RegistryError::BatchNotFound(batch_id))?;

    let center = match batch.donation_center_id {
        Some(id) => repos
            .donation_center
            .all()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .map(|c| c.title),
        None => None,
    };

    println!(
        "Batch {} imported at {} from {}",
        batch.id,
        batch.imported_at,
        center.as_deref().unwrap_or("manual input")
    );
    for record in repos.record.find_by_batch(batch_id).await? {
        println!(
            "{};{};{};{};{};{};{};{}",
            record.rodne_cislo,
            record.first_name,
            record.last_name,
            record.address,
            record.city,
            record.postal_code,
            record.kod_pojistovny,
            record.donation_count
        );
    }
    Ok(())
}

/// Execute the contact-import-logs command: show the audit trail.
pub async fn contact_import_logs() -> Result<(), RegistryError> {
    let (_pool, repos) = connect().await?;

    for log in repos.contact_import_log.all().await? {
        println!(
            "#{} {} by {} ({}): {} lines, {} new notes, {} updated, {} e-mails, {} phones",
            log.id,
            log.imported_at,
            log.imported_by.as_deref().unwrap_or("unknown"),
            log.filename.as_deref().unwrap_or("pasted"),
            log.processed_lines_count,
            log.created_notes_count,
            log.updated_notes_count,
            log.emails_added_count,
            log.phones_added_count
        );
    }
    Ok(())
}
