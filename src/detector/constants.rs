/// Public IP echo service queried by the ipify strategy.
pub const IPIFY_URL: &str = "https://api.ipify.org/?format=json";

/// Shell used to run the interface-inspection pipeline.
pub const IP_CMD_SHELL: &str = "/bin/sh";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
