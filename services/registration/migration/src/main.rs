use sea_orm_migration::prelude::*;

use padron_registration_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
