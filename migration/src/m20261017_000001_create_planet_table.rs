use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 100))
                    .col(string_len_null(Planet::RotationPeriod, 20))
                    .col(string_len_null(Planet::OrbitalPeriod, 20))
                    .col(string_len_null(Planet::Diameter, 20))
                    .col(string_len_null(Planet::Climate, 100))
                    .col(string_len_null(Planet::Gravity, 50))
                    .col(string_len_null(Planet::Terrain, 100))
                    .col(string_len_null(Planet::SurfaceWater, 20))
                    .col(string_len_null(Planet::Population, 20))
                    .col(text_null(Planet::Description))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    RotationPeriod,
    OrbitalPeriod,
    Diameter,
    Climate,
    Gravity,
    Terrain,
    SurfaceWater,
    Population,
    Description,
}
