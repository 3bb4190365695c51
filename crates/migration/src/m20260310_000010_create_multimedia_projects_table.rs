use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MultimediaProjects::Table)
                    .if_not_exists()
                    .col(integer(MultimediaProjects::ProjectId).primary_key())
                    .col(string_len(MultimediaProjects::DevelopmentTool, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_multimedia_projects_project_id")
                            .from(MultimediaProjects::Table, MultimediaProjects::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MultimediaProjects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MultimediaProjects {
    Table,
    ProjectId,
    DevelopmentTool,
}

// Reference to projects table
#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
}
