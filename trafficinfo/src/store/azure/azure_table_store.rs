use super::shared_key::{canonicalized_resource, rfc1123_date, shared_key_lite_signature};
use super::{StorageConnection, StorageCredential};
use crate::TrafficInfoAppError;
use chrono::Utc;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;
use trafficinfo_core::model::{Route, RouteRow};
use trafficinfo_core::sink::RouteSink;
use trafficinfo_core::TrafficInfoError;
use url::Url;

const STORAGE_API_VERSION: &str = "2019-02-02";
const TABLES_RESOURCE: &str = "Tables";

/// appends route rows to an Azure Storage table through the table service
/// REST api. the table is created on the first append if it does not exist.
#[derive(Debug)]
pub struct AzureTableStore {
    connection: StorageConnection,
    table: String,
    client: Client,
    table_ready: bool,
}

impl AzureTableStore {
    pub fn new(connection: StorageConnection, table: &str) -> Result<Self, TrafficInfoAppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TrafficInfoAppError::HttpClientError(format!("{e}")))?;
        Ok(Self {
            connection,
            table: table.to_string(),
            client,
            table_ready: false,
        })
    }

    pub fn try_from_connection_string(
        connection_string: &str,
        table: &str,
    ) -> Result<Self, TrafficInfoAppError> {
        let connection = StorageConnection::try_from(connection_string)?;
        Self::new(connection, table)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// creates the table, treating "already exists" as success.
    pub fn create_table_if_not_exists(&mut self) -> Result<(), String> {
        if self.table_ready {
            return Ok(());
        }
        let response = self.post_json(TABLES_RESOURCE, &json!({ "TableName": self.table }))?;
        match response.status() {
            StatusCode::CREATED | StatusCode::NO_CONTENT => {
                log::info!("created table {}", self.table);
            }
            StatusCode::CONFLICT => {
                log::debug!("table {} already exists", self.table);
            }
            status => {
                let body = response.text().unwrap_or_default();
                return Err(format!(
                    "creating table {} failed with HTTP {status}: {body}",
                    self.table
                ));
            }
        }
        self.table_ready = true;
        Ok(())
    }

    /// endpoint url for a resource directly below the account, with any
    /// shared access signature attached.
    fn resource_url(&self, resource: &str) -> Result<Url, String> {
        let mut url = self.connection.table_endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| String::from("table endpoint cannot hold a resource path"))?
            .pop_if_empty()
            .push(resource);
        if let StorageCredential::SharedAccessSignature(sas) = &self.connection.credential {
            url.set_query(Some(sas.as_str()));
        }
        Ok(url)
    }

    fn post_json<T: Serialize>(&self, resource: &str, body: &T) -> Result<Response, String> {
        let url = self.resource_url(resource)?;
        let body = serde_json::to_string(body).map_err(|e| format!("failed to encode row: {e}"))?;
        let date = rfc1123_date(&Utc::now());
        let mut request = self
            .client
            .post(url.clone())
            .header("x-ms-date", &date)
            .header("x-ms-version", STORAGE_API_VERSION)
            .header("Accept", "application/json;odata=nometadata")
            .header("Content-Type", "application/json")
            .header("Prefer", "return-no-content")
            .header("DataServiceVersion", "3.0;NetFx")
            .header("MaxDataServiceVersion", "3.0;NetFx");

        if let StorageCredential::SharedKey { account_key } = &self.connection.credential {
            let account = self
                .connection
                .account_name
                .as_deref()
                .ok_or_else(|| String::from("shared key authorization requires an account name"))?;
            let resource = canonicalized_resource(account, &url);
            let signature = shared_key_lite_signature(account_key, &date, &resource)
                .map_err(|e| e.to_string())?;
            let authorization = format!("SharedKeyLite {account}:{signature}");
            request = request.header("Authorization", authorization);
        }

        request
            .body(body)
            .send()
            .map_err(|e| format!("POST {resource} failed: {}", e.without_url()))
    }
}

impl RouteSink for AzureTableStore {
    fn append(&mut self, route: &Route) -> Result<(), TrafficInfoError> {
        self.create_table_if_not_exists()
            .map_err(TrafficInfoError::StoreError)?;
        let row = RouteRow::from(route);
        let response = self
            .post_json(&self.table, &row)
            .map_err(TrafficInfoError::StoreError)?;
        let status = response.status();
        if status.is_success() {
            log::debug!("inserted row {} into {}", row.row_key, self.table);
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(TrafficInfoError::StoreError(format!(
                "insert into {} failed with HTTP {status}: {body}",
                self.table
            )))
        }
    }
}
