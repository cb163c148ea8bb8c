use crate::core::router::DuplicateNavigationPolicy;
use crate::utils::error::{ReviewError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Settings for the HTTP collaborator and the app shell.
///
/// ```toml
/// base_url = "https://reviews.example.com/api"
/// duplicate_navigation = "reload"
///
/// [headers]
/// Authorization = "Bearer ${REVIEWS_API_TOKEN}"
///
/// [logging]
/// json = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub duplicate_navigation: DuplicateNavigationPolicy,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            headers: BTreeMap::new(),
            user_agent: None,
            duplicate_navigation: DuplicateNavigationPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        let config: ClientConfig = toml::from_str(&processed)?;
        Ok(config)
    }
}

/// 替換環境變數 (例如 ${REVIEWS_API_TOKEN})
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
        ReviewError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        }
    })?;

    let mut missing = None;
    let mut lines = Vec::new();
    for line in content.lines() {
        // 註解行不做替換
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }
        let replaced = re.replace_all(line, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });
        lines.push(replaced.into_owned());
    }

    if let Some(field) = missing {
        return Err(ReviewError::MissingConfigError { field });
    }
    Ok(lines.join("\n"))
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;

        for (name, value) in &self.headers {
            validation::validate_header_name("headers", name)?;
            if reqwest::header::HeaderValue::from_str(value).is_err() {
                return Err(ReviewError::InvalidConfigValueError {
                    field: format!("headers.{}", name),
                    value: value.clone(),
                    reason: "Not a valid HTTP header value".to_string(),
                });
            }
        }

        if let Some(agent) = &self.user_agent {
            validation::validate_non_empty_string("user_agent", agent)?;
        }

        Ok(())
    }
}
