use crate::TrafficInfoAppError;
use base64::prelude::*;
use std::collections::HashMap;
use url::Url;

pub const DEVELOPMENT_STORAGE_ACCOUNT: &str = "devstoreaccount1";
const DEVELOPMENT_STORAGE_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const DEVELOPMENT_TABLE_ENDPOINT: &str = "http://127.0.0.1:10002/devstoreaccount1";

/// how requests to the table service are authorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCredential {
    /// decoded storage account key, used for SharedKeyLite signatures
    SharedKey { account_key: Vec<u8> },
    /// shared access signature query string, without the leading '?'
    SharedAccessSignature(String),
}

/// table service endpoint and credentials parsed from an Azure storage
/// connection string such as
/// `DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=...;EndpointSuffix=core.windows.net`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConnection {
    pub account_name: Option<String>,
    pub table_endpoint: Url,
    pub credential: StorageCredential,
}

impl TryFrom<&str> for StorageConnection {
    type Error = TrafficInfoAppError;

    fn try_from(connection_string: &str) -> Result<Self, Self::Error> {
        let settings = parse_settings(connection_string)?;
        let setting = |key: &str| settings.get(key).map(String::as_str).filter(|v| !v.is_empty());

        if setting("usedevelopmentstorage").is_some_and(|v| v.eq_ignore_ascii_case("true")) {
            return development_storage();
        }

        let account_name = setting("accountname").map(String::from);
        let table_endpoint = match (setting("tableendpoint"), &account_name) {
            (Some(endpoint), _) => endpoint.to_string(),
            (None, Some(account)) => format!(
                "{}://{}.table.{}",
                setting("defaultendpointsprotocol").unwrap_or("https"),
                account,
                setting("endpointsuffix").unwrap_or("core.windows.net")
            ),
            (None, None) => {
                return Err(TrafficInfoAppError::ConnectionStringError(String::from(
                    "either AccountName or TableEndpoint is required",
                )))
            }
        };
        let table_endpoint = Url::parse(&table_endpoint).map_err(|e| {
            TrafficInfoAppError::ConnectionStringError(format!(
                "invalid table endpoint '{table_endpoint}': {e}"
            ))
        })?;

        let credential = match (setting("accountkey"), setting("sharedaccesssignature")) {
            (Some(key), _) => {
                if account_name.is_none() {
                    return Err(TrafficInfoAppError::ConnectionStringError(String::from(
                        "AccountKey requires AccountName",
                    )));
                }
                let account_key = BASE64_STANDARD.decode(key).map_err(|e| {
                    TrafficInfoAppError::ConnectionStringError(format!(
                        "AccountKey is not valid base64: {e}"
                    ))
                })?;
                StorageCredential::SharedKey { account_key }
            }
            (None, Some(sas)) => {
                StorageCredential::SharedAccessSignature(sas.trim_start_matches('?').to_string())
            }
            (None, None) => {
                return Err(TrafficInfoAppError::ConnectionStringError(String::from(
                    "either AccountKey or SharedAccessSignature is required",
                )))
            }
        };

        Ok(Self {
            account_name,
            table_endpoint,
            credential,
        })
    }
}

/// splits `Key=Value;Key=Value` pairs. keys are case-insensitive and
/// values may themselves contain '='.
fn parse_settings(connection_string: &str) -> Result<HashMap<String, String>, TrafficInfoAppError> {
    connection_string
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
                .ok_or_else(|| {
                    TrafficInfoAppError::ConnectionStringError(format!(
                        "setting '{pair}' is not of the form Key=Value"
                    ))
                })
        })
        .collect()
}

fn development_storage() -> Result<StorageConnection, TrafficInfoAppError> {
    let account_key = BASE64_STANDARD
        .decode(DEVELOPMENT_STORAGE_KEY)
        .map_err(|e| TrafficInfoAppError::ConnectionStringError(format!("{e}")))?;
    let table_endpoint = Url::parse(DEVELOPMENT_TABLE_ENDPOINT)
        .map_err(|e| TrafficInfoAppError::ConnectionStringError(format!("{e}")))?;
    Ok(StorageConnection {
        account_name: Some(String::from(DEVELOPMENT_STORAGE_ACCOUNT)),
        table_endpoint,
        credential: StorageCredential::SharedKey { account_key },
    })
}
