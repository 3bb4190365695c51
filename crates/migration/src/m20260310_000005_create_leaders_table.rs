use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leaders::Table)
                    .if_not_exists()
                    .col(integer(Leaders::EmployeeId).primary_key())
                    .col(integer(Leaders::YearsExperience))
                    .col(integer(Leaders::ProjectsLed))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaders_employee_id")
                            .from(Leaders::Table, Leaders::EmployeeId)
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
            .drop_table(Table::drop().table(Leaders::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Leaders {
    Table,
    EmployeeId,
    YearsExperience,
    ProjectsLed,
}

// Reference to employees table
#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
}
