use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DonorsOverride::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DonorsOverride::RodneCislo)
                            .string_len(10)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DonorsOverride::FirstName).string())
                    .col(ColumnDef::new(DonorsOverride::LastName).string())
                    .col(ColumnDef::new(DonorsOverride::Address).string())
                    .col(ColumnDef::new(DonorsOverride::City).string())
                    .col(ColumnDef::new(DonorsOverride::PostalCode).string_len(5))
                    .col(ColumnDef::new(DonorsOverride::KodPojistovny).string_len(3))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IgnoredDonors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IgnoredDonors::RodneCislo)
                            .string_len(10)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IgnoredDonors::Reason).string().not_null())
                    .col(
                        ColumnDef::new(IgnoredDonors::IgnoredSince)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notes::RodneCislo)
                            .string_len(10)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notes::Note).text().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IgnoredDonors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DonorsOverride::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum DonorsOverride {
    Table,
    RodneCislo,
    FirstName,
    LastName,
    Address,
    City,
    PostalCode,
    KodPojistovny,
}

#[derive(Iden)]
enum IgnoredDonors {
    Table,
    RodneCislo,
    Reason,
    IgnoredSince,
}

#[derive(Iden)]
enum Notes {
    Table,
    RodneCislo,
    Note,
}
