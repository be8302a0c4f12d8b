use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactImportLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactImportLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContactImportLogs::ImportedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactImportLogs::ImportedBy).string())
                    .col(ColumnDef::new(ContactImportLogs::Filename).string())
                    .col(
                        ColumnDef::new(ContactImportLogs::InputData)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactImportLogs::ProcessedLinesCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactImportLogs::CreatedNotesCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactImportLogs::UpdatedNotesCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactImportLogs::EmailsAddedCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactImportLogs::PhonesAddedCount)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactImportLogs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum ContactImportLogs {
    Table,
    Id,
    ImportedAt,
    ImportedBy,
    Filename,
    InputData,
    ProcessedLinesCount,
    CreatedNotesCount,
    UpdatedNotesCount,
    EmailsAddedCount,
    PhonesAddedCount,
}
