pub use sea_orm_migration::prelude::*;

mod m20181120_000001_create_bot_table;
mod m20181120_000002_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20181120_000001_create_bot_table::Migration),
            Box::new(m20181120_000002_create_message_table::Migration),
        ]
    }
}
