// Standard library
use std::env;
use std::path::{Path, PathBuf};

// 3rd party crates
use config::{Config, File, FileFormat};
use tracing::error;

// Project imports
use crate::detector::types::DetectorKind;

// Current module imports
use super::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use super::errors::{SettingsError, ValidationError};
use super::types::{ConfigManager, DetectorSettings, Log, Settings, Update};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: super::constants::default_log_level(),
        }
    }
}

impl Default for Update {
    fn default() -> Self {
        Self {
            interval: super::constants::default_update_interval(),
        }
    }
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            kind: super::constants::default_detector_kind(),
            interface: super::constants::default_detector_interface(),
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_update_interval(&self) -> u64 {
        self.update.interval
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        if self.update.interval == 0 {
            return Err(ValidationError::InvalidUpdateInterval(self.update.interval));
        }

        // An unsupported detector name must fail at startup, not at
        // the first tick.
        self.detector.kind.parse::<DetectorKind>()?;

        self.cloudflare.validate()?;

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` by loading the configuration file.
    ///
    /// `path_override` (the CLI flag) wins over the `CFDDNS_CONFIG_PATH`
    /// environment variable, which wins over the platform config dir.
    /// Validation is deferred so CLI overrides can be applied first.
    pub fn new(path_override: Option<PathBuf>) -> Result<Self, SettingsError> {
        let config_path: PathBuf = match path_override {
            Some(path) => path,
            None => Self::get_config_path()?,
        };

        let settings: Settings = Self::load_settings(&config_path)?;

        Ok(ConfigManager {
            settings,
            config_path,
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, SettingsError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        } else {
            error!("Could not determine the configuration directory");
            Err(SettingsError::NoConfigDir)
        }
    }

    /// Loads the settings from the configuration file. The file is the
    /// only settings source; the environment is consulted solely for
    /// the file's location.
    fn load_settings(config_path: &Path) -> Result<Settings, SettingsError> {
        let config_file: &str = config_path.to_str().ok_or(SettingsError::InvalidPath)?;

        let config: Config = Config::builder()
            .add_source(File::new(config_file, FileFormat::Json))
            .build()
            .map_err(|e| {
                error!("read config file err: {}", e);
                SettingsError::Load(e)
            })?;

        config.try_deserialize().map_err(|e| {
            error!("parse config err: {}", e);
            SettingsError::Load(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FULL_CONFIG: &str = r#"{
        "log": { "level": "debug" },
        "update": { "interval": 60 },
        "detector": { "kind": "ip-cmd", "interface": "eth0" },
        "cloudflare": {
            "zone_id": "z1",
            "record_id": "r1",
            "domain": "home.example.com",
            "api_token": "t"
        }
    }"#;

    const MINIMAL_CONFIG: &str = r#"{
        "cloudflare": {
            "zone_id": "z1",
            "record_id": "r1",
            "domain": "home.example.com",
            "api_key": "k",
            "email": "admin@example.com"
        }
    }"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(FULL_CONFIG);
        let manager =
            ConfigManager::new(Some(file.path().to_path_buf())).expect("config loads");

        let settings = &manager.settings;
        assert_eq!(settings.log.level, "debug");
        assert_eq!(settings.update.interval, 60);
        assert_eq!(settings.detector.kind, "ip-cmd");
        assert_eq!(settings.detector.interface, "eth0");
        assert_eq!(settings.cloudflare.zone_id, "z1");
        assert_eq!(settings.cloudflare.record_id, "r1");
        assert_eq!(settings.cloudflare.domain, "home.example.com");
        settings.validate().expect("valid settings");
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let file = write_config(MINIMAL_CONFIG);
        let manager =
            ConfigManager::new(Some(file.path().to_path_buf())).expect("config loads");

        let settings = &manager.settings;
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.update.interval, 300);
        assert_eq!(settings.detector.kind, "ipify");
        assert_eq!(settings.detector.interface, "pppoe-wan");
        settings.validate().expect("valid settings");
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = ConfigManager::new(Some(PathBuf::from("/nonexistent/cfddns.json")));
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let file = write_config("{ not json");
        let result = ConfigManager::new(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn unknown_detector_fails_validation() {
        let file = write_config(FULL_CONFIG);
        let mut manager =
            ConfigManager::new(Some(file.path().to_path_buf())).expect("config loads");

        manager.settings.detector.kind = "carrier-pigeon".to_string();
        let result = manager.settings.validate();
        assert!(matches!(result, Err(ValidationError::Detector(_))));
    }

    #[test]
    fn zero_interval_fails_validation() {
        let file = write_config(FULL_CONFIG);
        let mut manager =
            ConfigManager::new(Some(file.path().to_path_buf())).expect("config loads");

        manager.settings.update.interval = 0;
        let result = manager.settings.validate();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidUpdateInterval(0))
        ));
    }

    #[test]
    fn environment_variables_do_not_override_the_file() {
        // The environment only locates the config file; settings come
        // from the file alone.
        std::env::set_var("CFDDNS__UPDATE__INTERVAL", "7");

        let file = write_config(FULL_CONFIG);
        let manager =
            ConfigManager::new(Some(file.path().to_path_buf())).expect("config loads");
        assert_eq!(manager.settings.update.interval, 60);

        std::env::remove_var("CFDDNS__UPDATE__INTERVAL");
    }

    #[test]
    fn bad_log_level_fails_validation() {
        let file = write_config(FULL_CONFIG);
        let mut manager =
            ConfigManager::new(Some(file.path().to_path_buf())).expect("config loads");

        manager.settings.log.level = "loud".to_string();
        let result = manager.settings.validate();
        assert!(matches!(result, Err(ValidationError::InvalidLogLevel(_))));
    }
}
