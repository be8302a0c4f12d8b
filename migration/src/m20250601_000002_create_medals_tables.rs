use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Medals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Medals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Medals::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Medals::Title).string().not_null())
                    .col(ColumnDef::new(Medals::TitleAcc).string().not_null())
                    .col(ColumnDef::new(Medals::TitleInstr).string().not_null())
                    .col(
                        ColumnDef::new(Medals::MinimumDonations)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AwardedMedals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AwardedMedals::RodneCislo)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AwardedMedals::MedalId).integer().not_null())
                    .col(ColumnDef::new(AwardedMedals::AwardedAt).timestamp())
                    .primary_key(
                        Index::create()
                            .col(AwardedMedals::RodneCislo)
                            .col(AwardedMedals::MedalId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_awarded_medals_medal")
                            .from(AwardedMedals::Table, AwardedMedals::MedalId)
                            .to(Medals::Table, Medals::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_awarded_medals_rodne_cislo")
                    .table(AwardedMedals::Table)
                    .col(AwardedMedals::RodneCislo)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AwardedMedals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Medals::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
pub enum Medals {
    Table,
    Id,
    Slug,
    Title,
    TitleAcc,
    TitleInstr,
    MinimumDonations,
}

#[derive(Iden)]
enum AwardedMedals {
    Table,
    RodneCislo,
    MedalId,
    AwardedAt,
}
