pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::MigrationStatus;

pub mod revision;

pub mod m20191001_000000_create_users_table;
pub mod m20191002_084500_add_picture_url_to_users;

pub use revision::{validate_chain, Revision, RevisionError};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20191001_000000_create_users_table::Migration),
            Box::new(m20191002_084500_add_picture_url_to_users::Migration),
        ]
    }
}

impl Migrator {
    /// Revision metadata for every migration, in the same order as `migrations()`.
    pub fn revisions() -> Vec<Revision> {
        vec![
            m20191001_000000_create_users_table::REVISION,
            m20191002_084500_add_picture_url_to_users::REVISION,
        ]
    }

    /// Looks up the revision of a migration by its engine name.
    pub fn revision_for(name: &str) -> Option<Revision> {
        Self::migrations()
            .iter()
            .zip(Self::revisions())
            .find(|(migration, _)| migration.name() == name)
            .map(|(_, revision)| revision)
    }
}
