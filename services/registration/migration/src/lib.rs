use sea_orm_migration::prelude::*;

mod m20260801_000001_create_countries;
mod m20260801_000002_create_contacts;
mod m20260801_000003_create_document_types;
mod m20260801_000004_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_countries::Migration),
            Box::new(m20260801_000002_create_contacts::Migration),
            Box::new(m20260801_000003_create_document_types::Migration),
            Box::new(m20260801_000004_create_users::Migration),
        ]
    }
}
