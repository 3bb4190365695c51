use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(integer(TeamMembers::TeamId))
                    .col(integer(TeamMembers::ProgrammerId))
                    .primary_key(
                        Index::create()
                            .col(TeamMembers::TeamId)
                            .col(TeamMembers::ProgrammerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_members_team_id")
                            .from(TeamMembers::Table, TeamMembers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_members_programmer_id")
                            .from(TeamMembers::Table, TeamMembers::ProgrammerId)
                            .to(Programmers::Table, Programmers::EmployeeId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A programmer belongs to at most one team system-wide. The unique
        // index is the final arbiter under concurrent membership inserts.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_members_programmer_unique")
                    .table(TeamMembers::Table)
                    .col(TeamMembers::ProgrammerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamMembers {
    Table,
    TeamId,
    ProgrammerId,
}

// Reference to teams table
#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
}

// Reference to programmers table
#[derive(DeriveIden)]
pub enum Programmers {
    Table,
    EmployeeId,
}
