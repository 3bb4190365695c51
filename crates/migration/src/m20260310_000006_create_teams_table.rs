use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(pk_auto(Teams::Id))
                    .col(string_len(Teams::Name, 100))
                    .col(integer_null(Teams::LeaderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_leader_id")
                            .from(Teams::Table, Teams::LeaderId)
                            .to(Leaders::Table, Leaders::EmployeeId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teams_leader_id")
                    .table(Teams::Table)
                    .col(Teams::LeaderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
    Name,
    LeaderId,
}

// Reference to leaders table
#[derive(DeriveIden)]
pub enum Leaders {
    Table,
    EmployeeId,
}
