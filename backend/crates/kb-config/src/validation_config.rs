use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 1000;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 255;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_COMMENT_LENGTH: usize = 1;
pub const MAX_COMMENT_LENGTH: usize = 100000;
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 5000;

pub const MAX_LABELS: usize = 100;
pub const DEFAULT_MAX_LABELS: usize = 20;

pub const MIN_LABEL_LENGTH: usize = 1;
pub const MAX_LABEL_LENGTH: usize = 200;
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 50;

/// Field limits applied before anything is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Card titles
    pub max_title_length: usize,
    /// Board and column names
    pub max_name_length: usize,
    pub max_description_length: usize,
    pub max_comment_length: usize,
    pub max_labels: usize,
    pub max_label_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            max_labels: DEFAULT_MAX_LABELS,
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        Self::check_range(
            "max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_description_length",
            self.max_description_length,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        )?;
        Self::check_range(
            "max_comment_length",
            self.max_comment_length,
            MIN_COMMENT_LENGTH,
            MAX_COMMENT_LENGTH,
        )?;
        Self::check_range("max_labels", self.max_labels, 0, MAX_LABELS)?;
        Self::check_range(
            "max_label_length",
            self.max_label_length,
            MIN_LABEL_LENGTH,
            MAX_LABEL_LENGTH,
        )?;
        Ok(())
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::invalid("validation", format!(
                "validation.{name} must be {min}-{max}, got {value}"
            )));
        }
        Ok(())
    }
}
