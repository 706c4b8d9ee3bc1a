// Project imports
use crate::settings::types::Settings;

// Current module imports
use super::types::Cli;

/// Prints build metadata for the `version` subcommand.
pub fn print_version() {
    println!(
        "{} {} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );
}

impl Cli {
    /// Applies CLI overrides onto the loaded settings. Values are
    /// validated afterwards together with the file-based ones.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(kind) = &self.detector {
            settings.detector.kind = kind.clone();
        }
        if let Some(interval) = self.interval {
            settings.update.interval = interval;
        }
    }
}

#[cfg(test)]
mod tests {
    // 3rd party crates
    use clap::Parser;

    // Project imports
    use crate::cli::types::{Cli, Command};

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "cfddns",
            "-c",
            "/etc/cfddns/config.json",
            "--detector",
            "ip-cmd",
            "--interval",
            "60",
        ]);

        assert_eq!(
            cli.config_path.as_deref(),
            Some(std::path::Path::new("/etc/cfddns/config.json"))
        );
        assert_eq!(cli.detector.as_deref(), Some("ip-cmd"));
        assert_eq!(cli.interval, Some(60));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_version_subcommand() {
        let cli = Cli::parse_from(["cfddns", "version"]);
        assert!(matches!(cli.command, Some(Command::Version)));
    }

    #[test]
    fn overrides_replace_config_values() {
        use crate::providers::cloudflare::types::CfConfig;
        use crate::settings::types::Settings;

        let mut settings = Settings {
            log: Default::default(),
            update: Default::default(),
            detector: Default::default(),
            cloudflare: CfConfig {
                zone_id: "z1".to_string(),
                record_id: "r1".to_string(),
                domain: "home.example.com".to_string(),
                api_token: Some("t".to_string()),
                api_key: None,
                email: None,
            },
        };

        let cli = Cli::parse_from(["cfddns", "--detector", "ip-cmd", "--interval", "60"]);
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.detector.kind, "ip-cmd");
        assert_eq!(settings.update.interval, 60);
        // Untouched fields keep their defaults.
        assert_eq!(settings.detector.interface, "pppoe-wan");
    }
}
