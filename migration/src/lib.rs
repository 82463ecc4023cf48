pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_restaurant_table;
mod m20261001_000002_create_menu_item_table;
mod m20261001_000003_create_modifier_table;
mod m20261001_000004_create_menu_item_modifier_table;
mod m20261001_000005_create_modifier_option_table;
mod m20261001_000006_create_order_table;
mod m20261001_000007_create_order_item_table;
mod m20261001_000008_create_order_item_modifier_option_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_restaurant_table::Migration),
            Box::new(m20261001_000002_create_menu_item_table::Migration),
            Box::new(m20261001_000003_create_modifier_table::Migration),
            Box::new(m20261001_000004_create_menu_item_modifier_table::Migration),
            Box::new(m20261001_000005_create_modifier_option_table::Migration),
            Box::new(m20261001_000006_create_order_table::Migration),
            Box::new(m20261001_000007_create_order_item_table::Migration),
            Box::new(m20261001_000008_create_order_item_modifier_option_table::Migration),
        ]
    }
}
