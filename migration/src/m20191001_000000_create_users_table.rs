use sea_orm_migration::{prelude::*, schema::*};

use crate::revision::Revision;

pub const REVISION: Revision = Revision::root("0eee8c1abd3a");

/// Server-side default of `users.expert_mode`.
pub const EXPERT_MODE_DEFAULT: bool = false;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_users()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

pub fn create_users() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(pk_auto(Users::Id))
        .col(string_uniq(Users::Email))
        .col(boolean(Users::ExpertMode).default(EXPERT_MODE_DEFAULT))
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    ExpertMode,
    PictureUrl,
}
