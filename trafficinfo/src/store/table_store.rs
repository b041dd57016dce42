use super::azure::AzureTableStore;
use super::CsvTableStore;
use crate::config::StoreConfig;
use crate::TrafficInfoAppError;
use std::path::Path;
use trafficinfo_core::model::Route;
use trafficinfo_core::sink::RouteSink;
use trafficinfo_core::TrafficInfoError;

/// the configured table store adapter.
#[derive(Debug)]
pub enum TableStore {
    Azure(AzureTableStore),
    Csv(CsvTableStore),
}

impl TryFrom<&StoreConfig> for TableStore {
    type Error = TrafficInfoAppError;

    fn try_from(config: &StoreConfig) -> Result<Self, Self::Error> {
        match config {
            StoreConfig::Azure {
                connection_string,
                table,
            } => {
                let store = AzureTableStore::try_from_connection_string(connection_string, table)?;
                Ok(TableStore::Azure(store))
            }
            StoreConfig::Csv { directory, table } => {
                let store = CsvTableStore::new(Path::new(directory), table)?;
                Ok(TableStore::Csv(store))
            }
        }
    }
}

impl RouteSink for TableStore {
    fn append(&mut self, route: &Route) -> Result<(), TrafficInfoError> {
        match self {
            TableStore::Azure(store) => store.append(route),
            TableStore::Csv(store) => store.append(route),
        }
    }
}
