use sea_orm_migration::prelude::*;

use crate::m20191001_000000_create_users_table::{Users, EXPERT_MODE_DEFAULT};
use crate::revision::Revision;

pub const REVISION: Revision = Revision::revises("068674f06b0f", "0eee8c1abd3a");

#[derive(DeriveMigrationName)]
pub struct Migration;

/// One reversible change to the `users` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delta {
    AddPictureUrl,
    RelaxExpertMode,
}

impl Delta {
    /// Applied in this order by `up`, undone in reverse by `down`.
    pub const FORWARD: [Delta; 2] = [Delta::AddPictureUrl, Delta::RelaxExpertMode];

    // Both directions restate the baseline type and default of expert_mode.
    pub fn apply(self) -> TableAlterStatement {
        match self {
            Delta::AddPictureUrl => Table::alter()
                .table(Users::Table)
                .add_column(ColumnDef::new(Users::PictureUrl).string().null())
                .to_owned(),
            Delta::RelaxExpertMode => Table::alter()
                .table(Users::Table)
                .modify_column(
                    ColumnDef::new(Users::ExpertMode)
                        .boolean()
                        .null()
                        .default(EXPERT_MODE_DEFAULT),
                )
                .to_owned(),
        }
    }

    pub fn revert(self) -> TableAlterStatement {
        match self {
            Delta::AddPictureUrl => Table::alter()
                .table(Users::Table)
                .drop_column(Users::PictureUrl)
                .to_owned(),
            // fails while any row still holds a null expert_mode
            Delta::RelaxExpertMode => Table::alter()
                .table(Users::Table)
                .modify_column(
                    ColumnDef::new(Users::ExpertMode)
                        .boolean()
                        .not_null()
                        .default(EXPERT_MODE_DEFAULT),
                )
                .to_owned(),
        }
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for delta in Delta::FORWARD {
            manager.alter_table(delta.apply()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for delta in Delta::FORWARD.into_iter().rev() {
            manager.alter_table(delta.revert()).await?;
        }

        Ok(())
    }
}
