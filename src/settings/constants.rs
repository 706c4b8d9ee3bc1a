/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "CFDDNS_CONFIG_PATH";

/// Directory under the platform config dir holding the default file.
pub const CONFIG_DIR_NAME: &str = "cfddns";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_update_interval() -> u64 {
    300 // 5 minutes
}

pub fn default_detector_kind() -> String {
    "ipify".to_string()
}

pub fn default_detector_interface() -> String {
    "pppoe-wan".to_string()
}
