pub mod azure;
mod csv_table_store;
mod table_store;

pub use csv_table_store::CsvTableStore;
pub use table_store::TableStore;
