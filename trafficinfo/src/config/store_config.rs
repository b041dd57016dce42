use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_NAME: &str = "TrafficInfo";

/// the table store route rows are appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum StoreConfig {
    /// Azure Table Storage, addressed by a storage account connection string
    Azure {
        connection_string: String,
        #[serde(default = "default_table")]
        table: String,
    },
    /// a CSV file named `<table>.csv` inside `directory`
    Csv {
        directory: String,
        #[serde(default = "default_table")]
        table: String,
    },
}

fn default_table() -> String {
    String::from(DEFAULT_TABLE_NAME)
}
