use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_jobs_table")]
    pub jobs_table: String,
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_jobs_table() -> String { "jobs".to_string() }
fn default_profiles_table() -> String { "user_profiles".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            max_entries: default_cache_entries(),
        }
    }
}

fn default_cache_ttl() -> u64 { 60 }
fn default_cache_entries() -> u64 { 16 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_interest_weight")]
    pub interest: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            interest: default_interest_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        ScoringWeights {
            skills: config.skills,
            interest: config.interest,
        }
    }
}

fn default_skills_weight() -> f64 { 80.0 }
fn default_interest_weight() -> f64 { 20.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBMATCH_)
    /// 5. SUPABASE_URL / SUPABASE_ANON_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = SupabaseOverrides::from_env().apply(settings)?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_from_with(path, SupabaseOverrides::from_env())
    }

    fn load_from_with<P: AsRef<Path>>(
        path: P,
        overrides: SupabaseOverrides,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings = overrides.apply(settings)?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.supabase.url.trim().is_empty() || self.supabase.anon_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "Missing Supabase environment variables".to_string(),
            ));
        }

        let weights = &self.scoring.weights;
        if weights.skills < 0.0 || weights.interest < 0.0 {
            return Err(ConfigError::Message(
                "Scoring weights must not be negative".to_string(),
            ));
        }

        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("JOBMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Values of the conventional Supabase variables, applied over the loaded config
#[derive(Debug, Clone, Default)]
struct SupabaseOverrides {
    url: Option<String>,
    anon_key: Option<String>,
}

impl SupabaseOverrides {
    fn from_env() -> Self {
        Self {
            url: std::env::var("SUPABASE_URL").ok(),
            anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
        }
    }

    fn apply(self, settings: Config) -> Result<Config, ConfigError> {
        let mut builder = Config::builder().add_source(settings);

        if let Some(url) = self.url {
            builder = builder.set_override("supabase.url", url)?;
        }
        if let Some(key) = self.anon_key {
            builder = builder.set_override("supabase.anon_key", key)?;
        }

        builder.build()
    }
}
