//! Database migrations for registration service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241210_000001_create_mentors::Migration),
            Box::new(m20241210_000002_create_students::Migration),
        ]
    }
}

mod m20241210_000001_create_mentors {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000001_create_mentors"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Mentors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Mentors::Username)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Mentors::Name).string().not_null())
                        .col(ColumnDef::new(Mentors::Email).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Mentors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Mentors {
        Table,
        Username,
        Name,
        Email,
    }
}

mod m20241210_000002_create_students {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000002_create_students"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Students::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Students::Username)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Students::Name).string().not_null())
                        .col(ColumnDef::new(Students::Email).string().not_null())
                        .col(ColumnDef::new(Students::College).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Students::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Students {
        Table,
        Username,
        Name,
        Email,
        College,
    }
}
