use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgrammerLanguages::Table)
                    .if_not_exists()
                    .col(integer(ProgrammerLanguages::ProgrammerId))
                    .col(string_len(ProgrammerLanguages::Language, 50))
                    .primary_key(
                        Index::create()
                            .col(ProgrammerLanguages::ProgrammerId)
                            .col(ProgrammerLanguages::Language),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_programmer_languages_programmer_id")
                            .from(ProgrammerLanguages::Table, ProgrammerLanguages::ProgrammerId)
                            .to(Programmers::Table, Programmers::EmployeeId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgrammerLanguages::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProgrammerLanguages {
    Table,
    ProgrammerId,
    Language,
}

// Reference to programmers table
#[derive(DeriveIden)]
pub enum Programmers {
    Table,
    EmployeeId,
}
