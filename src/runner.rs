use migration::{validate_chain, MigrationStatus, Migrator, MigratorTrait, Revision};
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, info, warn};

use crate::error::Result;

/// One line of `status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRow {
    pub name: String,
    pub revision: Option<Revision>,
    pub applied: bool,
}

impl MigrationRow {
    pub fn new(name: &str, applied: bool) -> Self {
        MigrationRow {
            name: name.to_string(),
            revision: Migrator::revision_for(name),
            applied,
        }
    }
}

impl std::fmt::Display for MigrationRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = if self.applied { "applied" } else { "pending" };
        match &self.revision {
            Some(rev) => {
                write!(f, "{}  {}  {}", rev.id, self.name, state)?;
                if let Some(down) = rev.down_revision {
                    write!(f, " (revises {})", down)?;
                }
                Ok(())
            }
            None => write!(f, "-  {}  {}", self.name, state),
        }
    }
}

/// Drives the migration engine against one database.
pub struct Runner {
    db: DatabaseConnection,
}

impl Runner {
    /// Validates the revision chain, then connects. Nothing touches the
    /// database when the chain is broken.
    pub async fn connect(url: &str) -> Result<Self> {
        let revisions = Migrator::revisions();
        validate_chain(&revisions)?;
        debug!(revisions = revisions.len(), "revision chain is valid");

        let db = Database::connect(url).await?;
        info!("Connected to database");

        Ok(Runner { db })
    }

    pub async fn up(&self, steps: Option<u32>) -> Result<()> {
        let pending = Migrator::get_pending_migrations(&self.db).await?;
        if pending.is_empty() {
            info!("no pending migrations");
            return Ok(());
        }

        let limit = steps.map_or(pending.len(), |n| n as usize);
        for migration in pending.iter().take(limit) {
            info!(
                name = migration.name(),
                revision = Migrator::revision_for(migration.name()).map(|r| r.id),
                "applying migration"
            );
        }

        Migrator::up(&self.db, steps).await?;
        info!("migrations applied");
        Ok(())
    }

    pub async fn down(&self, steps: u32) -> Result<()> {
        let applied = Migrator::get_applied_migrations(&self.db).await?;
        if applied.is_empty() {
            info!("no applied migrations");
            return Ok(());
        }

        for migration in applied.iter().rev().take(steps as usize) {
            info!(
                name = migration.name(),
                revision = Migrator::revision_for(migration.name()).map(|r| r.id),
                "reverting migration"
            );
        }

        Migrator::down(&self.db, Some(steps)).await?;
        info!("migrations reverted");
        Ok(())
    }

    pub async fn status(&self) -> Result<Vec<MigrationRow>> {
        let rows = Migrator::get_migration_with_status(&self.db)
            .await?
            .iter()
            .map(|m| MigrationRow::new(m.name(), m.status() == MigrationStatus::Applied))
            .collect();

        Ok(rows)
    }

    pub async fn fresh(&self) -> Result<()> {
        warn!("dropping all tables before reapplying migrations");
        Migrator::fresh(&self.db).await?;
        info!("migrations applied");
        Ok(())
    }
}
