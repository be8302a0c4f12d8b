//! Contact import into donor notes.
//!
//! Each valid line contributes an e-mail and/or a phone number to the
//! donor's note. Contacts already present in the note text are skipped, one
//! audit row is written per import run, and the note is the single free-text
//! store the rest of the system reads contacts from.

use sea_orm::Set;
use tracing::info;

use crate::domain::errors::RegistryError;
use crate::domain::services::contact_parser::{
    parse_contact_line, validate_contact_import_data,
};
use crate::domain::services::line_parser::ImportValidation;
use crate::infrastructure::persistence::entities::contact_import_logs;
use crate::infrastructure::persistence::repositories::Repositories;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactImportStats {
    pub processed_lines: i32,
    pub created_notes: i32,
    pub updated_notes: i32,
    pub emails_added: i32,
    pub phones_added: i32,
}

pub struct ContactImporter {
    repos: Repositories,
}

impl ContactImporter {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Validates a contact blob against the donors currently in the
    /// overview.
    pub async fn validate(&self, text: &str) -> Result<ImportValidation, RegistryError> {
        let known = self.repos.overview.known_rodna_cisla().await?;
        Ok(validate_contact_import_data(text, |rc| known.contains(rc)))
    }

    /// Imports a contact blob and records one audit row. Input that still
    /// has invalid lines is refused; the caller runs the review workflow.
    pub async fn import(
        &self,
        text: &str,
        imported_by: Option<&str>,
        filename: Option<&str>,
    ) -> Result<ContactImportStats, RegistryError> {
        let validation = self.validate(text).await?;
        if !validation.invalid_lines.is_empty() {
            return Err(RegistryError::InvalidLinesPresent);
        }
        if validation.valid_lines.is_empty() {
            return Err(RegistryError::NothingToImport);
        }

        let mut stats = ContactImportStats::default();

        for line in &validation.valid_lines {
            let contact = parse_contact_line(line);
            let rodne_cislo = match &contact.rodne_cislo {
                Some(rc) => rc.clone(),
                None => continue,
            };

            let additions: Vec<&String> = [contact.email.as_ref(), contact.phone.as_ref()]
                .into_iter()
                .flatten()
                .collect();

            match self.repos.note.get(&rodne_cislo).await? {
                Some(existing) => {
                    stats.updated_notes += 1;
                    let mut note_text = existing.note.clone();
                    for addition in additions {
                        // Already-recorded contacts are skipped, not duplicated.
                        if note_text.contains(addition.as_str()) {
                            continue;
                        }
                        if !note_text.is_empty() {
                            note_text.push('\n');
                        }
                        note_text.push_str(addition);
                        count_addition(&mut stats, &contact.email, addition);
                    }
                    if note_text != existing.note {
                        self.repos.note.save(&rodne_cislo, &note_text).await?;
                    }
                }
                None => {
                    stats.created_notes += 1;
                    let mut note_text = String::new();
                    for addition in additions {
                        if !note_text.is_empty() {
                            note_text.push('\n');
                        }
                        note_text.push_str(addition);
                        count_addition(&mut stats, &contact.email, addition);
                    }
                    self.repos.note.save(&rodne_cislo, &note_text).await?;
                }
            }

            stats.processed_lines += 1;
        }

        let log_row = contact_import_logs::ActiveModel {
            id: sea_orm::NotSet,
            imported_at: Set(chrono::Utc::now().naive_utc()),
            imported_by: Set(imported_by.map(str::to_string)),
            filename: Set(filename.map(str::to_string)),
            input_data: Set(text.to_string()),
            processed_lines_count: Set(stats.processed_lines),
            created_notes_count: Set(stats.created_notes),
            updated_notes_count: Set(stats.updated_notes),
            emails_added_count: Set(stats.emails_added),
            phones_added_count: Set(stats.phones_added),
        };
        let log = self.repos.contact_import_log.insert(log_row).await?;

        info!(
            "Contact import {} done: {} lines, {} new notes, {} updated",
            log.id, stats.processed_lines, stats.created_notes, stats.updated_notes
        );

        Ok(stats)
    }
}

fn count_addition(stats: &mut ContactImportStats, email: &Option<String>, addition: &str) {
    if email.as_deref() == Some(addition) {
        stats.emails_added += 1;
    } else {
        stats.phones_added += 1;
    }
}

/// Flattens a CSV file into the whitespace-separated text lines the contact
/// parser expects.
pub fn convert_csv_to_text<R: std::io::Read>(reader: R) -> Result<String, RegistryError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut lines = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row
            .iter()
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !line.is_empty() {
            lines.push(line);
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_become_space_separated_lines() {
        let csv = "9001011234,jan@email.cz,602123456\n0407156596,marie@email.cz,+420734000000";
        let text = convert_csv_to_text(csv.as_bytes()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "9001011234 jan@email.cz 602123456");
        assert_eq!(lines[1], "0407156596 marie@email.cz +420734000000");
    }

    #[test]
    fn empty_csv_cells_and_rows_are_dropped() {
        let csv = "9001011234,jan@email.cz,\n,,\n0407156596,,marie@email.cz";
        let text = convert_csv_to_text(csv.as_bytes()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "9001011234 jan@email.cz");
        assert_eq!(lines[1], "0407156596 marie@email.cz");
    }
}
