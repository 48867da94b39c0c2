use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::PreferenceWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub travel: TravelSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct TravelSettings {
    /// Budget for one destination's travel lookup
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
    #[serde(default = "default_travel_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_travel_cache_capacity")]
    pub cache_capacity: u64,
}

impl TravelSettings {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for TravelSettings {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout_ms(),
            cache_ttl_secs: default_travel_cache_ttl_secs(),
            cache_capacity: default_travel_cache_capacity(),
        }
    }
}

fn default_lookup_timeout_ms() -> u64 { 2_000 }
fn default_travel_cache_ttl_secs() -> u64 { 3_600 }
fn default_travel_cache_capacity() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSettings {
    #[serde(default = "default_forecast_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_forecast_cache_capacity")]
    pub cache_capacity: u64,
}

impl ForecastSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_forecast_cache_ttl_secs(),
            cache_capacity: default_forecast_cache_capacity(),
        }
    }
}

fn default_forecast_cache_ttl_secs() -> u64 { 900 }
fn default_forecast_cache_capacity() -> u64 { 1_000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON destination file; the embedded dataset is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Default explanation weights, in percent
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_wave_quality_weight")]
    pub wave_quality: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_travel_time_weight")]
    pub travel_time: f64,
    #[serde(default = "default_crowd_level_weight")]
    pub crowd_level: f64,
    #[serde(default = "default_temperature_weight")]
    pub temperature: f64,
    #[serde(default = "default_skill_match_weight")]
    pub skill_match: f64,
    #[serde(default = "default_safety_factors_weight")]
    pub safety_factors: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            wave_quality: default_wave_quality_weight(),
            budget: default_budget_weight(),
            travel_time: default_travel_time_weight(),
            crowd_level: default_crowd_level_weight(),
            temperature: default_temperature_weight(),
            skill_match: default_skill_match_weight(),
            safety_factors: default_safety_factors_weight(),
        }
    }
}

impl From<&WeightsConfig> for PreferenceWeights {
    fn from(config: &WeightsConfig) -> Self {
        PreferenceWeights {
            wave_quality: config.wave_quality,
            budget: config.budget,
            travel_time: config.travel_time,
            crowd_level: config.crowd_level,
            temperature: config.temperature,
            skill_match: config.skill_match,
            safety_factors: config.safety_factors,
        }
    }
}

fn default_wave_quality_weight() -> f64 { 25.0 }
fn default_budget_weight() -> f64 { 20.0 }
fn default_travel_time_weight() -> f64 { 15.0 }
fn default_crowd_level_weight() -> f64 { 10.0 }
fn default_temperature_weight() -> f64 { 10.0 }
fn default_skill_match_weight() -> f64 { 15.0 }
fn default_safety_factors_weight() -> f64 { 5.0 }

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
    /// 4. Environment variables (prefixed with WAVE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WAVE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("WAVE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
