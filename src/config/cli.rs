use crate::config::ObserverConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "logicflow-observer")]
#[command(about = "Scans a CSV file for data-quality anomalies and writes a fragility report")]
pub struct CliArgs {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the data file to scan
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the report destination
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not create the demonstration dataset when the input is missing
    #[arg(long)]
    pub no_bootstrap: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Loads the TOML file when given, then applies command-line overrides.
    pub fn resolve_config(&self) -> Result<ObserverConfig> {
        let mut config = match &self.config {
            Some(path) => ObserverConfig::from_file(path)?,
            None => ObserverConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(report) = &self.report {
            config.report_path = report.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = CliArgs::parse_from(["logicflow-observer"]);
        assert!(!args.no_bootstrap);
        assert_eq!(args.resolve_config().unwrap(), ObserverConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"input_path = \"from_file.csv\"\nfriction_cost_per_issue = 10\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let args = CliArgs::parse_from([
            "logicflow-observer",
            "--config",
            config_path.as_str(),
            "--input",
            "from_flag.csv",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("from_flag.csv"));
        assert_eq!(config.friction_cost_per_issue, 10);
    }
}
