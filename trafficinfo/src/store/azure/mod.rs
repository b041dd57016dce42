mod azure_table_store;
mod shared_key;
mod storage_connection;

pub use azure_table_store::AzureTableStore;
pub use shared_key::{canonicalized_resource, rfc1123_date, shared_key_lite_signature};
pub use storage_connection::{StorageConnection, StorageCredential, DEVELOPMENT_STORAGE_ACCOUNT};
