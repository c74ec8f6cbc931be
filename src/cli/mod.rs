//! CLI module for geolocator
//!
//! This module handles command line argument parsing and drives a single lookup.

use crate::config::AppConfig;
use crate::entity::formatter;
use crate::prelude::*;
use crate::utils::path;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "geolocator")]
#[command(version, about = "Look up where an IP address or host name is located via ip-api.com")]
#[command(long_about = "geolocator asks the ip-api.com service where an IP address \
    or host name is located.\n\n\
    Without a target, the location of your own public address is shown.\n\n\
    Examples:\n  \
    $ geolocator\n  \
    $ geolocator 8.8.8.8\n  \
    $ geolocator --json example.com\n  \
    $ geolocator --short 2001:4860:4860::8888")]
pub struct Cli {
    /// IP address or host name (defaults to your own public address)
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Output JSON
    #[arg(short, long, conflicts_with = "short")]
    pub json: bool,

    /// Output a single summary line
    #[arg(short, long)]
    pub short: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the service endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the request timeout
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    pub fn run(&self, mut config: AppConfig) -> Result<()> {
        self.apply_to(&mut config);

        if self.write_config {
            return self.save_config(&config);
        }

        let client = GeoClient::with_config(&config.service)?;
        let record = client.lookup(self.target.as_deref())?;

        if !record.is_success() {
            warn!(
                "Service could not resolve {}: {}",
                self.target.as_deref().unwrap_or("own address"),
                record.message().unwrap_or("no reason given")
            );
        }

        print!("{}", self.render(&record, &config, use_color(&config))?);

        Ok(())
    }

    /// Apply CLI options to config
    pub fn apply_to(&self, config: &mut AppConfig) {
        if self.json {
            config.output.json = true;
        }
        if self.no_color {
            config.output.enable_colors = false;
        }
        if self.verbose {
            config.global.verbose = true;
        }
        if let Some(ref endpoint) = self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_secs = timeout;
        }
    }

    /// Render a record the way the options ask for
    pub fn render(
        &self,
        record: &LocationRecord,
        config: &AppConfig,
        use_color: bool,
    ) -> Result<String> {
        if config.output.json {
            Ok(format!("{}\n", formatter::format_json(record)?))
        } else if self.short {
            Ok(format!("{}\n", formatter::format_compact(record)))
        } else {
            Ok(formatter::format_text(record, use_color))
        }
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let file = match config.global.config_path {
            Some(ref file) => file.clone(),
            None => path::config_file()?,
        };

        config
            .save(&file)
            .with_context(|| format!("Could not write configuration to {:?}", file))?;

        info!("Configuration written to {:?}", file);
        println!("{}", file.display());
        Ok(())
    }
}

/// Color only when enabled and stdout is a terminal
fn use_color(config: &AppConfig) -> bool {
    config.output.enable_colors && atty::is(atty::Stream::Stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LocationRecord {
        LocationRecord::from_json(
            r#"{"status":"success","country":"United States","city":"Ashburn","query":"8.8.8.8"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_without_target() {
        let cli = Cli::try_parse_from(["geolocator"]).unwrap();
        assert!(cli.target.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_target_and_flags() {
        let cli = Cli::try_parse_from([
            "geolocator",
            "--json",
            "--timeout",
            "2",
            "--endpoint",
            "http://localhost:9000/json/",
            "8.8.8.8",
        ])
        .unwrap();
        assert_eq!(cli.target.as_deref(), Some("8.8.8.8"));

        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert!(config.output.json);
        assert_eq!(config.service.timeout_secs, 2);
        assert_eq!(config.service.endpoint, "http://localhost:9000/json/");
    }

    #[test]
    fn test_rejects_more_than_one_target() {
        assert!(Cli::try_parse_from(["geolocator", "8.8.8.8", "1.1.1.1"]).is_err());
        assert!(Cli::try_parse_from(["geolocator", "--json", "--short"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = Cli::try_parse_from(["geolocator", "--timeout", "0", "8.8.8.8"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(Cli::try_parse_from(["geolocator", "--timeout", "1"]).is_ok());
    }

    #[test]
    fn test_no_color_disables_color() {
        let cli = Cli::try_parse_from(["geolocator", "--no-color"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert!(!use_color(&config));
    }

    #[test]
    fn test_render_modes() {
        let mut config = AppConfig::default();

        let cli = Cli::try_parse_from(["geolocator", "--short"]).unwrap();
        assert_eq!(
            cli.render(&record(), &config, false).unwrap(),
            "8.8.8.8 -> United States Ashburn\n"
        );

        let cli = Cli::try_parse_from(["geolocator"]).unwrap();
        assert_eq!(cli.render(&record(), &config, false).unwrap(), record().to_string());

        config.output.json = true;
        let json = cli.render(&record(), &config, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["city"], "Ashburn");
    }

    #[test]
    fn test_write_config_to_loaded_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.global.config_path = Some(file.clone());

        let cli = Cli::try_parse_from(["geolocator", "--write-config", "--timeout", "9"]).unwrap();
        cli.run(config).unwrap();

        let loaded = AppConfig::load_from(&file).unwrap();
        assert_eq!(loaded.service.timeout_secs, 9);
    }
}
