use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManagementProjects::Table)
                    .if_not_exists()
                    .col(integer(ManagementProjects::ProjectId).primary_key())
                    .col(string_len(ManagementProjects::DatabaseType, 50))
                    .col(string_len(ManagementProjects::ProgrammingLanguage, 50))
                    .col(string_len(ManagementProjects::Framework, 50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_management_projects_project_id")
                            .from(ManagementProjects::Table, ManagementProjects::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_management_projects_framework")
                    .table(ManagementProjects::Table)
                    .col(ManagementProjects::Framework)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ManagementProjects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ManagementProjects {
    Table,
    ProjectId,
    DatabaseType,
    ProgrammingLanguage,
    Framework,
}

// Reference to projects table
#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
}
