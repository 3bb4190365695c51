use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string_len(Projects::Name, 100))
                    .col(text_null(Projects::Description))
                    .col(integer(Projects::EstimatedTime))
                    .col(decimal_len(Projects::Price, 10, 2))
                    .col(string_len(Projects::ProjectType, 20))
                    .col(integer_null(Projects::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_team_id")
                            .from(Projects::Table, Projects::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one project per team; NULL team_id (detached projects)
        // is exempt from uniqueness on every supported backend.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_projects_team_unique")
                    .table(Projects::Table)
                    .col(Projects::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_projects_project_type")
                    .table(Projects::Table)
                    .col(Projects::ProjectType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Name,
    Description,
    EstimatedTime,
    Price,
    ProjectType,
    TeamId,
}

// Reference to teams table
#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
}
