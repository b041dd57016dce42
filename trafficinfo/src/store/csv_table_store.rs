use crate::TrafficInfoAppError;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use trafficinfo_core::model::{Route, RouteRow};
use trafficinfo_core::sink::RouteSink;
use trafficinfo_core::TrafficInfoError;

/// local table store: one CSV file per table, appended to across ticks.
/// the header is written only when the file is empty.
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    filepath: PathBuf,
}

impl CsvTableStore {
    pub fn new(directory: &Path, table: &str) -> Result<Self, TrafficInfoAppError> {
        std::fs::create_dir_all(directory).map_err(|e| {
            TrafficInfoAppError::TableStoreError(format!(
                "failure creating directory {directory:?}: {e}"
            ))
        })?;
        Ok(Self {
            filepath: directory.join(format!("{table}.csv")),
        })
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    fn write_row(&self, row: &RouteRow) -> Result<(), String> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.filepath)
            .map_err(|e| format!("failure opening {:?}: {e}", self.filepath))?;
        let is_empty = file
            .metadata()
            .map_err(|e| format!("failure reading metadata for {:?}: {e}", self.filepath))?
            .len()
            == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_empty)
            .from_writer(file);
        writer
            .serialize(row)
            .map_err(|e| format!("failure writing row {}: {e}", row.row_key))?;
        writer
            .flush()
            .map_err(|e| format!("failure flushing {:?}: {e}", self.filepath))
    }
}

impl RouteSink for CsvTableStore {
    fn append(&mut self, route: &Route) -> Result<(), TrafficInfoError> {
        self.write_row(&RouteRow::from(route))
            .map_err(TrafficInfoError::StoreError)
    }
}
