use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub company: CompanyConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CompanyConfig {
    /// JSON fixture to load. The built-in sample company is used when unset.
    pub fixture_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportsConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

fn default_separator() -> String { "~".to_string() }

fn default_city() -> String { "London".to_string() }

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            city: default_city(),
            format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Load from `./config`, see [`Config::load_from`]
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load: `default`, then `{RUN_MODE}` and `local` if present,
    /// then `KATA__*` environment variables.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&layer("default")))
            .add_source(config::File::with_name(&layer(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&layer("local")).required(false))
            // Eg. `KATA__REPORTS__CITY=Liphook`
            .add_source(config::Environment::with_prefix("KATA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
