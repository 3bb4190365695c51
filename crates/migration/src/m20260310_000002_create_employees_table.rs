use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len(Employees::IdentityCard, 20).unique_key())
                    .col(string_len(Employees::Name, 100))
                    .col(integer(Employees::Age))
                    .col(string_len(Employees::Sex, 10))
                    .col(decimal_len(Employees::BaseSalary, 10, 2))
                    .col(string_len(Employees::Role, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employees_identity_card")
                    .table(Employees::Table)
                    .col(Employees::IdentityCard)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    IdentityCard,
    Name,
    Age,
    Sex,
    BaseSalary,
    Role,
}
