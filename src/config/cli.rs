use crate::config::toml_config::ClientConfig;
use crate::domain::model::Rating;
use crate::utils::error::{ReviewError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rating-client")]
#[command(about = "Submit a rating or browse reviews from the terminal")]
pub struct CliArgs {
    /// Page to open: "/" to rate, "/reviews" to list reviews
    #[arg(default_value = "/")]
    pub path: String,

    /// Rating to submit when opening "/"
    #[arg(long, allow_negative_numbers = true)]
    pub rating: Option<Rating>,

    #[arg(long, help = "Base URL of the reviews API")]
    pub base_url: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Extra request header, e.g. --header 'Authorization: Bearer abc'
    #[arg(long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// 載入設定檔，再以命令列參數覆寫
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut ClientConfig) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        for raw in &self.headers {
            let (name, value) = parse_header(raw)?;
            config.headers.insert(name, value);
        }

        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;
        Ok(())
    }
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ReviewError::InvalidConfigValueError {
            field: "header".to_string(),
            value: raw.to_string(),
            reason: "Expected 'Name: value'".to_string(),
        }),
    }
}
