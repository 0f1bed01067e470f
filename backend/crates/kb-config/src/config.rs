use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConcurrencyConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RetryConfig, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub retry: RetryConfig,
    pub concurrency: ConcurrencyConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. KB_CONFIG_DIR env var, else ./.kanban/
    /// 2. Auto-create the config directory
    /// 3. config.toml if present, else defaults
    /// 4. KB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: KB_CONFIG_DIR env var > ./.kanban/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|source| ConfigError::NoConfigDir { source })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.retry.validate()?;
        self.concurrency.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Directory that `logging.file` is written into.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}ms, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_ms,
            self.retry.backoff_multiplier,
            self.retry.jitter
        );
        info!(
            "  concurrency: lock_timeout={}ms",
            self.concurrency.lock_timeout_ms
        );
        info!(
            "  validation: title={}, name={}, desc={}, comment={}, labels={}x{}",
            self.validation.max_title_length,
            self.validation.max_name_length,
            self.validation.max_description_length,
            self.validation.max_comment_length,
            self.validation.max_labels,
            self.validation.max_label_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("KB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("KB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("KB_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("KB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "KB_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("KB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("KB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("KB_LOG_FILE", &mut self.logging.file);

        // Retry
        Self::apply_env_parse("KB_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "KB_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("KB_RETRY_MAX_DELAY_MS", &mut self.retry.max_delay_ms);
        Self::apply_env_parse(
            "KB_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("KB_RETRY_JITTER", &mut self.retry.jitter);

        // Concurrency
        Self::apply_env_parse(
            "KB_LOCK_TIMEOUT_MS",
            &mut self.concurrency.lock_timeout_ms,
        );

        // Validation
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_COMMENT_LENGTH",
            &mut self.validation.max_comment_length,
        );
        Self::apply_env_parse("KB_VALIDATION_MAX_LABELS", &mut self.validation.max_labels);
        Self::apply_env_parse(
            "KB_VALIDATION_MAX_LABEL_LENGTH",
            &mut self.validation.max_label_length,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Comma-separated; blank entries dropped
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
