use super::{DirectionsConfig, StoreConfig};
use crate::TrafficInfoAppError;
use serde::Deserialize;
use std::path::Path;
use trafficinfo_core::pipeline::CommutePipeline;
use trafficinfo_core::window::{
    CommuteLocations, CommuteSchedule, WindowSelector, DEFAULT_TIME_ZONE,
};

/// environment variables starting with this prefix override file settings,
/// using `__` between nested keys, e.g. `TRAFFICINFO_STORE__CONNECTION_STRING`.
pub const ENV_PREFIX: &str = "TRAFFICINFO";

/// everything a collection tick needs. locations and the api key are
/// optional here: missing locations leave every tick inactive and a
/// missing key fails the fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct TrafficInfoConfig {
    #[serde(default)]
    pub home_location: Option<String>,
    #[serde(default)]
    pub work_location: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub schedule: CommuteSchedule,
    #[serde(default)]
    pub directions: DirectionsConfig,
    #[serde(default)]
    pub store: Option<StoreConfig>,
}

fn default_time_zone() -> String {
    String::from(DEFAULT_TIME_ZONE)
}

impl TrafficInfoConfig {
    /// reads an optional TOML or JSON file (format chosen by extension) and
    /// layers `TRAFFICINFO_*` environment variables on top of it.
    pub fn load(config_file: Option<&Path>) -> Result<Self, TrafficInfoAppError> {
        Self::load_with_env(config_file, None)
    }

    /// as [`TrafficInfoConfig::load`], reading the `TRAFFICINFO_*` variables
    /// from `env` instead of the process environment when it is provided.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self, TrafficInfoAppError> {
        let mut builder = ::config::Config::builder();
        if let Some(f) = config_file {
            log::info!("reading trafficinfo configuration from {f:?}");
            builder = builder.add_source(::config::File::from(f));
        }
        builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(|e| TrafficInfoAppError::ConfigurationError(format!("{e}")))?
            .try_deserialize()
            .map_err(|e| TrafficInfoAppError::ConfigurationError(format!("{e}")))
    }

    /// replaces the configured locations with any provided values.
    pub fn with_locations(mut self, home: Option<&str>, work: Option<&str>) -> Self {
        if let Some(h) = home {
            self.home_location = Some(h.to_string());
        }
        if let Some(w) = work {
            self.work_location = Some(w.to_string());
        }
        self
    }

    pub fn locations(&self) -> CommuteLocations {
        CommuteLocations {
            home: self.home_location.clone(),
            work: self.work_location.clone(),
        }
    }

    pub fn window_selector(&self) -> Result<WindowSelector, TrafficInfoAppError> {
        let selector = WindowSelector::try_from_zone_name(&self.time_zone, self.schedule)?;
        Ok(selector)
    }

    pub fn pipeline(&self) -> Result<CommutePipeline, TrafficInfoAppError> {
        Ok(CommutePipeline::new(
            self.window_selector()?,
            self.locations(),
            self.directions.traffic_model,
        ))
    }

    pub fn store_config(&self) -> Result<&StoreConfig, TrafficInfoAppError> {
        self.store.as_ref().ok_or_else(|| {
            TrafficInfoAppError::ConfigurationError(String::from(
                "no table store configured, set [store] in the configuration file \
                 or TRAFFICINFO_STORE__TYPE",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TrafficInfoConfig;
    use crate::config::{StoreConfig, GOOGLE_DIRECTIONS_URL};
    use crate::TrafficInfoAppError;
    use std::path::{Path, PathBuf};
    use trafficinfo_core::directions::TrafficModel;

    const LOCATIONS_TOML: &str = "home_location = \"A\"\nwork_location = \"B\"\n";

    /// loads `file` with `env` standing in for the process environment.
    fn load(file: &Path, env: &[(&str, &str)]) -> Result<TrafficInfoConfig, TrafficInfoAppError> {
        let env = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TrafficInfoConfig::load_with_env(Some(file), Some(env))
    }

    fn write_temp(filename: &str, contents: &str) -> (PathBuf, PathBuf) {
        let dir =
            std::env::temp_dir().join(format!("trafficinfo-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("test invariant failed: could not create temp dir");
        let file = dir.join(filename);
        std::fs::write(&file, contents).expect("test invariant failed: could not write config");
        (dir, file)
    }

    #[test]
    fn test_load_toml_with_defaults() {
        let (dir, file) = write_temp(
            "trafficinfo.toml",
            r#"
home_location = "400 Broad St, Seattle, WA"
work_location = "16011 NE 36th Way, Redmond, WA"
api_key = "not-a-real-key"

[store]
type = "azure"
connection_string = "UseDevelopmentStorage=true"
"#,
        );
        let conf = load(&file, &[]).expect("config should load");
        std::fs::remove_dir_all(dir).ok();

        assert_eq!(conf.home_location.as_deref(), Some("400 Broad St, Seattle, WA"));
        assert_eq!(conf.time_zone, "America/Los_Angeles");
        assert_eq!(conf.directions.base_url, GOOGLE_DIRECTIONS_URL);
        assert_eq!(conf.directions.traffic_model, TrafficModel::BestGuess);
        assert_eq!(conf.schedule.outbound.first_hour, 6);
        assert_eq!(conf.schedule.inbound.last_hour, 19);
        assert_eq!(
            conf.store,
            Some(StoreConfig::Azure {
                connection_string: String::from("UseDevelopmentStorage=true"),
                table: String::from("TrafficInfo"),
            })
        );
    }

    #[test]
    fn test_load_json_with_overrides() {
        let (dir, file) = write_temp(
            "trafficinfo.json",
            r#"{
  "time_zone": "America/New_York",
  "schedule": { "outbound": { "first_hour": 7, "last_hour": 9 } },
  "directions": { "traffic_model": "pessimistic" },
  "store": { "type": "csv", "directory": "/tmp/routes", "table": "Commute" }
}"#,
        );
        let conf = load(&file, &[]).expect("config should load");
        std::fs::remove_dir_all(dir).ok();

        assert_eq!(conf.home_location, None);
        assert_eq!(conf.schedule.outbound.last_hour, 9);
        assert_eq!(conf.schedule.inbound.first_hour, 16);
        assert_eq!(conf.directions.traffic_model, TrafficModel::Pessimistic);
        let selector = conf.window_selector().expect("zone should parse");
        assert_eq!(selector.time_zone(), chrono_tz::America::New_York);
        assert!(matches!(conf.store, Some(StoreConfig::Csv { .. })));
    }

    #[test]
    fn test_invalid_time_zone_is_rejected() {
        let (dir, file) = write_temp("trafficinfo.toml", "time_zone = \"Pacific Standard Time\"\n");
        let conf = load(&file, &[]).expect("config should load");
        std::fs::remove_dir_all(dir).ok();
        assert!(conf.pipeline().is_err());
        assert!(conf.store_config().is_err());
    }

    #[test]
    fn test_location_overrides() {
        let (dir, file) = write_temp("trafficinfo.toml", LOCATIONS_TOML);
        let conf = load(&file, &[])
            .expect("config should load")
            .with_locations(None, Some("C"));
        std::fs::remove_dir_all(dir).ok();
        let locations = conf.locations();
        assert_eq!(locations.home.as_deref(), Some("A"));
        assert_eq!(locations.work.as_deref(), Some("C"));
    }

    #[test]
    fn test_environment_overrides_file() {
        let (dir, file) = write_temp("trafficinfo.toml", LOCATIONS_TOML);
        let conf = load(
            &file,
            &[
                ("TRAFFICINFO_HOME_LOCATION", "EnvHome"),
                ("TRAFFICINFO_STORE__TYPE", "azure"),
                ("TRAFFICINFO_STORE__CONNECTION_STRING", "UseDevelopmentStorage=true"),
                ("TRAFFICINFO_SCHEDULE__OUTBOUND__FIRST_HOUR", "7"),
                ("TRAFFICINFO_SCHEDULE__OUTBOUND__LAST_HOUR", "9"),
                ("UNRELATED_HOME_LOCATION", "ignored"),
            ],
        )
        .expect("config should load");
        std::fs::remove_dir_all(dir).ok();

        assert_eq!(conf.home_location.as_deref(), Some("EnvHome"));
        assert_eq!(conf.work_location.as_deref(), Some("B"));
        assert_eq!(conf.schedule.outbound.first_hour, 7);
        assert_eq!(conf.schedule.outbound.last_hour, 9);
        assert_eq!(conf.schedule.inbound.first_hour, 16);
        assert_eq!(
            conf.store,
            Some(StoreConfig::Azure {
                connection_string: String::from("UseDevelopmentStorage=true"),
                table: String::from("TrafficInfo"),
            })
        );
    }
}
