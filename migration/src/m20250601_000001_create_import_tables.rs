use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DonationCenters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DonationCenters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DonationCenters::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DonationCenters::Title).string().not_null())
                    .col(
                        ColumnDef::new(DonationCenters::ImportIncrements)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Batches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Batches::DonationCenterId).integer())
                    .col(ColumnDef::new(Batches::ImportedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_batches_donation_center")
                            .from(Batches::Table, Batches::DonationCenterId)
                            .to(DonationCenters::Table, DonationCenters::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Records::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Records::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Records::BatchId).integer().not_null())
                    .col(
                        ColumnDef::new(Records::RodneCislo)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Records::FirstName).string().not_null())
                    .col(ColumnDef::new(Records::LastName).string().not_null())
                    .col(ColumnDef::new(Records::Address).string().not_null())
                    .col(ColumnDef::new(Records::City).string().not_null())
                    .col(ColumnDef::new(Records::PostalCode).string_len(5).not_null())
                    .col(
                        ColumnDef::new(Records::KodPojistovny)
                            .string_len(3)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Records::DonationCount).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_records_batch")
                            .from(Records::Table, Records::BatchId)
                            .to(Batches::Table, Batches::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_records_rodne_cislo")
                    .table(Records::Table)
                    .col(Records::RodneCislo)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Records::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DonationCenters::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
pub enum DonationCenters {
    Table,
    Id,
    Slug,
    Title,
    ImportIncrements,
}

#[derive(Iden)]
pub enum Batches {
    Table,
    Id,
    DonationCenterId,
    ImportedAt,
}

#[derive(Iden)]
enum Records {
    Table,
    Id,
    BatchId,
    RodneCislo,
    FirstName,
    LastName,
    Address,
    City,
    PostalCode,
    KodPojistovny,
    DonationCount,
}
