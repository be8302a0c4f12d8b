use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DonorsOverview::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DonorsOverview::RodneCislo)
                            .string_len(10)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DonorsOverview::FirstName).string().not_null())
                    .col(ColumnDef::new(DonorsOverview::LastName).string().not_null())
                    .col(ColumnDef::new(DonorsOverview::Address).string().not_null())
                    .col(ColumnDef::new(DonorsOverview::City).string().not_null())
                    .col(
                        ColumnDef::new(DonorsOverview::PostalCode)
                            .string_len(5)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::KodPojistovny)
                            .string_len(3)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::DonationCountFm)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::DonationCountFmBubenik)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::DonationCountTrinec)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::DonationCountManual)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::DonationCountTotal)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalBr)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalSt)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalZl)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalKr3)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalKr2)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalKr1)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DonorsOverview::AwardedMedalPlk)
                            .boolean()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DonorsOverview::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum DonorsOverview {
    Table,
    RodneCislo,
    FirstName,
    LastName,
    Address,
    City,
    PostalCode,
    KodPojistovny,
    DonationCountFm,
    DonationCountFmBubenik,
    DonationCountTrinec,
    DonationCountManual,
    DonationCountTotal,
    AwardedMedalBr,
    AwardedMedalSt,
    AwardedMedalZl,
    AwardedMedalKr3,
    AwardedMedalKr2,
    AwardedMedalKr1,
    AwardedMedalPlk,
}
