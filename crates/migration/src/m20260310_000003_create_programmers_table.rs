use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the migration also runs on
        // SQLite, which cannot add constraints after table creation.
        manager
            .create_table(
                Table::create()
                    .table(Programmers::Table)
                    .if_not_exists()
                    .col(integer(Programmers::EmployeeId).primary_key())
                    .col(string_len(Programmers::Category, 1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_programmers_employee_id")
                            .from(Programmers::Table, Programmers::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Programmers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Programmers {
    Table,
    EmployeeId,
    Category,
}

// Reference to employees table
#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
}
