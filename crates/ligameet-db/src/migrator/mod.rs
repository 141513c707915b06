//! Database migrations

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_accounts_and_catalog;
mod m20250301_000002_create_teams;
mod m20250301_000003_create_matches;
mod m20250301_000004_create_billing;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_accounts_and_catalog::Migration),
            Box::new(m20250301_000002_create_teams::Migration),
            Box::new(m20250301_000003_create_matches::Migration),
            Box::new(m20250301_000004_create_billing::Migration),
        ]
    }
}
