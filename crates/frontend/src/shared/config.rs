use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub seed: SeedConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Сколько категорий генерировать при открытии страницы
    pub size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Время показа уведомления, мс
    pub duration_ms: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            size: contracts::domain::a001_category::SEED_SIZE,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[seed]
size = 11

[notifications]
duration_ms = 2000
"#;

/// Разобрать конфигурацию из TOML; отсутствующие ключи берутся по умолчанию
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config() -> Config {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::info!("Using default embedded configuration");
            config
        }
        Err(e) => {
            log::warn!("Invalid embedded config, using defaults: {}", e);
            Config::default()
        }
    }
}
