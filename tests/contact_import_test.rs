//! End-to-end tests for the contact import and its audit trail.

mod helpers;

use donor_registry::application::import::{BatchImporter, ContactImporter};
use donor_registry::domain::errors::RegistryError;
use donor_registry::infrastructure::persistence::entities::contact_import_logs;
use sea_orm::EntityTrait;

use helpers::{at, import_line, setup};

const RC1: &str = "0407156596";
const RC2: &str = "9605070080";
const RC3: &str = "451201123";

async fn seed_donors(repos: &donor_registry::infrastructure::persistence::Repositories) {
    let importer = BatchImporter::new(repos.clone());
    importer
        .import_lines_at(
            &[
                import_line(RC1, "JAN", "NOVÁK", 10),
                import_line(RC2, "EVA", "MALÁ", 5),
                import_line(RC3, "KAREL", "VOMÁČKA", 7),
            ],
            Some("fm"),
            at(1, 8),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn import_records_statistics_and_audit_row() {
    let (conn, repos) = setup().await;
    seed_donors(&repos).await;

    // One donor already has a note; the other two get fresh ones.
    repos.note.save(RC1, "Existing text").await.unwrap();

    let importer = ContactImporter::new(repos.clone());
    let text = format!(
        "{RC1} jan.novak@seznam.cz 602123456\n\
         {RC2} marie.nova@gmail.com\n\
         {RC3} +420734000000"
    );

    let stats = importer
        .import(&text, Some("admin@example.org"), None)
        .await
        .unwrap();

    assert_eq!(stats.processed_lines, 3);
    assert_eq!(stats.created_notes, 2);
    assert_eq!(stats.updated_notes, 1);
    assert_eq!(stats.emails_added, 2);
    assert_eq!(stats.phones_added, 2);

    let note = repos.note.get(RC1).await.unwrap().unwrap();
    assert!(note.note.contains("Existing text"));
    assert!(note.note.contains("jan.novak@seznam.cz"));
    assert!(note.note.contains("602123456"));
    assert_eq!(note.note.lines().count(), 3);

    let note = repos.note.get(RC2).await.unwrap().unwrap();
    assert_eq!(note.note, "marie.nova@gmail.com");

    let note = repos.note.get(RC3).await.unwrap().unwrap();
    assert_eq!(note.note, "+420734000000");

    let logs = contact_import_logs::Entity::find().all(&conn).await.unwrap();
    assert_eq!(logs.len(), 1);
    let log = &logs[0];
    assert_eq!(log.processed_lines_count, 3);
    assert_eq!(log.created_notes_count, 2);
    assert_eq!(log.updated_notes_count, 1);
    assert_eq!(log.emails_added_count, 2);
    assert_eq!(log.phones_added_count, 2);
    assert_eq!(log.imported_by.as_deref(), Some("admin@example.org"));
    assert_eq!(log.filename, None);
    assert!(log.input_data.contains(RC1));
    assert!(log.input_data.contains("jan.novak@seznam.cz"));
}

#[tokio::test]
async fn duplicate_contacts_are_skipped_and_not_counted() {
    let (_conn, repos) = setup().await;
    seed_donors(&repos).await;

    repos
        .note
        .save(RC1, "jan.novak@seznam.cz\n602123456")
        .await
        .unwrap();

    let importer = ContactImporter::new(repos.clone());
    let stats = importer
        .import(&format!("{RC1} jan.novak@seznam.cz 602123456"), None, None)
        .await
        .unwrap();

    assert_eq!(stats.processed_lines, 1);
    assert_eq!(stats.created_notes, 0);
    // The note was touched but nothing was added.
    assert_eq!(stats.updated_notes, 1);
    assert_eq!(stats.emails_added, 0);
    assert_eq!(stats.phones_added, 0);

    let note = repos.note.get(RC1).await.unwrap().unwrap();
    assert_eq!(note.note.matches("jan.novak@seznam.cz").count(), 1);
    assert_eq!(note.note.matches("602123456").count(), 1);
}

#[tokio::test]
async fn note_helpers_extract_contacts_back() {
    let (_conn, repos) = setup().await;
    seed_donors(&repos).await;

    repos
        .note
        .save(
            RC1,
            "Email: jan@email.cz\nTelefon: +420602123456\nDalší: marie@email.cz",
        )
        .await
        .unwrap();

    let note = repos.note.get(RC1).await.unwrap().unwrap();
    assert_eq!(note.emails(), vec!["jan@email.cz", "marie@email.cz"]);
    assert_eq!(note.phones(), vec!["+420602123456"]);
}

#[tokio::test]
async fn unknown_donor_rejects_the_line_but_not_the_batch() {
    let (_conn, repos) = setup().await;
    seed_donors(&repos).await;

    let importer = ContactImporter::new(repos.clone());
    // 8506046384 passes the checksum but is nobody in the overview.
    let text = format!("{RC1} jan.novak@seznam.cz\n8506046384 ghost@example.org");

    let validation = importer.validate(&text).await.unwrap();
    assert_eq!(validation.valid_lines.len(), 1);
    assert_eq!(validation.invalid_lines.len(), 1);
    assert!(validation.invalid_lines[0]
        .errors
        .contains(&"donor with this national id does not exist".to_string()));

    // Import of the full blob is refused until the lines are fixed.
    let result = importer.import(&text, None, None).await;
    assert!(matches!(result, Err(RegistryError::InvalidLinesPresent)));

    // Importing just the valid part goes through.
    let stats = importer
        .import(&validation.valid_lines.join("\n"), None, None)
        .await
        .unwrap();
    assert_eq!(stats.processed_lines, 1);
    assert_eq!(stats.created_notes, 1);
}
