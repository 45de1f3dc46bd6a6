use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_create_planet_table::Planet;

static IDX_CHARACTER_HOMEWORLD_ID: &str = "idx_character_homeworld_id";
static FK_CHARACTER_HOMEWORLD_ID: &str = "fk_character_homeworld_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline because SQLite cannot add them to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 100))
                    .col(string_len_null(Character::Height, 10))
                    .col(string_len_null(Character::Mass, 10))
                    .col(string_len_null(Character::HairColor, 50))
                    .col(string_len_null(Character::SkinColor, 50))
                    .col(string_len_null(Character::EyeColor, 50))
                    .col(string_len_null(Character::BirthYear, 20))
                    .col(string_len_null(Character::Gender, 20))
                    .col(integer_null(Character::HomeworldId))
                    .col(text_null(Character::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_HOMEWORLD_ID)
                            .from(Character::Table, Character::HomeworldId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .col(Character::HomeworldId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_HOMEWORLD_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    HomeworldId,
    Description,
}
