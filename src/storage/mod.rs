// storage/mod.rs
// Read-only database access: pool, catalog, rows

pub mod catalog;
pub mod pool;
pub mod rows;
pub mod test_helpers;
pub mod value;

// Re-export commonly used items
pub use catalog::list_tables;
pub use pool::{init_db_pool_with_path, DbPool};
pub use rows::read_table;
pub use value::{FieldValue, Row};
