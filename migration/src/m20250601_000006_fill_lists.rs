use sea_orm_migration::prelude::*;

use crate::m20250601_000001_create_import_tables::DonationCenters;
use crate::m20250601_000002_create_medals_tables::Medals;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CENTERS: [(&str, &str, bool); 3] = [
    ("fm", "Nemocnice F-M", false),
    ("fm_bubenik", "Krevní centrum", false),
    ("trinec", "Nemocnice Třinec", false),
];

const MEDALS: [(&str, &str, &str, &str, i32); 7] = [
    (
        "br",
        "Bronzová medaile",
        "bronzovou medaili Prof. MUDr. Jana Janského",
        "bronzovou medailí Prof. MUDr. Jana Janského",
        10,
    ),
    (
        "st",
        "Stříbrná medaile",
        "stříbrnou medaili Prof. MUDr. Jana Janského",
        "stříbrnou medailí Prof. MUDr. Jana Janského",
        20,
    ),
    (
        "zl",
        "Zlatá medaile",
        "zlatou medaili Prof. MUDr. Jana Janského",
        "zlatou medailí Prof. MUDr. Jana Janského",
        40,
    ),
    (
        "kr3",
        "Zlatý kříž 3. třídy",
        "zlatý kříž ČČK 3. třídy",
        "zlatým křížem ČČK 3. třídy",
        80,
    ),
    (
        "kr2",
        "Zlatý kříž 2. třídy",
        "zlatý kříž ČČK 2. třídy",
        "zlatým křížem ČČK 2. třídy",
        120,
    ),
    (
        "kr1",
        "Zlatý kříž 1. třídy",
        "zlatý kříž ČČK 1. třídy",
        "zlatým křížem ČČK 1. třídy",
        160,
    ),
    (
        "plk",
        "Plaketa ČČK",
        "plaketu ČČK Dar krve - dar života",
        "plaketou ČČK Dar krve - dar života",
        250,
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (slug, title, import_increments) in CENTERS {
            let insert = Query::insert()
                .into_table(DonationCenters::Table)
                .columns([
                    DonationCenters::Slug,
                    DonationCenters::Title,
                    DonationCenters::ImportIncrements,
                ])
                .values_panic([slug.into(), title.into(), import_increments.into()])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        for (slug, title, title_acc, title_instr, minimum_donations) in MEDALS {
            let insert = Query::insert()
                .into_table(Medals::Table)
                .columns([
                    Medals::Slug,
                    Medals::Title,
                    Medals::TitleAcc,
                    Medals::TitleInstr,
                    Medals::MinimumDonations,
                ])
                .values_panic([
                    slug.into(),
                    title.into(),
                    title_acc.into(),
                    title_instr.into(),
                    minimum_donations.into(),
                ])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete_medals = Query::delete().from_table(Medals::Table).to_owned();
        manager.exec_stmt(delete_medals).await?;

        let delete_centers = Query::delete()
            .from_table(DonationCenters::Table)
            .to_owned();
        manager.exec_stmt(delete_centers).await?;

        Ok(())
    }
}
