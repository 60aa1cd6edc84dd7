/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Reader and writer configuration.
//!
//! This module provides configuration options for reading and writing messages.

use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Reader`](crate::Reader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReaderConfig {
    /// Whether to validate each segment as soon as it is parsed.
    pub validate_segments: bool,
    /// Whether to check duplicates and conditional permissions while reading.
    pub enforce_schema: bool,
    /// Whether to validate the complete message after the last record.
    pub validate_message: bool,
    /// Maximum record length in characters.
    pub max_record_length: usize,
}

impl ReaderConfig {
    /// Creates a reader configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validate_segments: true,
            enforce_schema: true,
            validate_message: false,
            max_record_length: 10_000,
        }
    }

    /// Sets whether to validate each segment as soon as it is parsed.
    #[must_use]
    pub const fn with_validate_segments(mut self, validate: bool) -> Self {
        self.validate_segments = validate;
        self
    }

    /// Sets whether to enforce the conditional schema while reading.
    #[must_use]
    pub const fn with_enforce_schema(mut self, enforce: bool) -> Self {
        self.enforce_schema = enforce;
        self
    }

    /// Sets whether to validate the complete message after reading.
    #[must_use]
    pub const fn with_validate_message(mut self, validate: bool) -> Self {
        self.validate_message = validate;
        self
    }

    /// Sets the maximum record length.
    #[must_use]
    pub const fn with_max_record_length(mut self, length: usize) -> Self {
        self.max_record_length = length;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for reader configuration.
#[derive(Debug, Default)]
pub struct ReaderConfigBuilder {
    validate_segments: Option<bool>,
    enforce_schema: Option<bool>,
    validate_message: Option<bool>,
    max_record_length: Option<usize>,
}

impl ReaderConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to validate each segment as soon as it is parsed.
    #[must_use]
    pub const fn validate_segments(mut self, validate: bool) -> Self {
        self.validate_segments = Some(validate);
        self
    }

    /// Sets whether to enforce the conditional schema while reading.
    #[must_use]
    pub const fn enforce_schema(mut self, enforce: bool) -> Self {
        self.enforce_schema = Some(enforce);
        self
    }

    /// Sets whether to validate the complete message after reading.
    #[must_use]
    pub const fn validate_message(mut self, validate: bool) -> Self {
        self.validate_message = Some(validate);
        self
    }

    /// Sets the maximum record length.
    #[must_use]
    pub const fn max_record_length(mut self, length: usize) -> Self {
        self.max_record_length = Some(length);
        self
    }

    /// Builds the configuration, keeping defaults for unset options.
    #[must_use]
    pub fn build(self) -> ReaderConfig {
        let mut config = ReaderConfig::new();

        if let Some(validate) = self.validate_segments {
            config.validate_segments = validate;
        }
        if let Some(enforce) = self.enforce_schema {
            config.enforce_schema = enforce;
        }
        if let Some(validate) = self.validate_message {
            config.validate_message = validate;
        }
        if let Some(length) = self.max_record_length {
            config.max_record_length = length;
        }

        config
    }
}

/// Configuration for a [`Writer`](crate::Writer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WriterConfig {
    /// Wire shape used for every segment.
    pub format: FormatOptions,
    /// Terminator written after each record.
    pub line_ending: String,
    /// Whether to validate the message before writing it.
    pub validate_before_write: bool,
}

impl WriterConfig {
    /// Creates a writer configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: FormatOptions::fixed(),
            line_ending: "\n".to_string(),
            validate_before_write: true,
        }
    }

    /// Sets the wire shape.
    #[must_use]
    pub const fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    /// Sets the record terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Sets whether to validate the message before writing it.
    #[must_use]
    pub const fn with_validate_before_write(mut self, validate: bool) -> Self {
        self.validate_before_write = validate;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for writer configuration.
#[derive(Debug, Default)]
pub struct WriterConfigBuilder {
    format: Option<FormatOptions>,
    line_ending: Option<String>,
    validate_before_write: Option<bool>,
}

impl WriterConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wire shape.
    #[must_use]
    pub const fn format(mut self, format: FormatOptions) -> Self {
        self.format = Some(format);
        self
    }

    /// Selects delimiter-terminated variable-length fields.
    #[must_use]
    pub const fn variable_length_fields(self) -> Self {
        self.format(FormatOptions::variable())
    }

    /// Sets the record terminator.
    #[must_use]
    pub fn line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = Some(line_ending.into());
        self
    }

    /// Sets whether to validate the message before writing it.
    #[must_use]
    pub const fn validate_before_write(mut self, validate: bool) -> Self {
        self.validate_before_write = Some(validate);
        self
    }

    /// Builds the configuration, keeping defaults for unset options.
    #[must_use]
    pub fn build(self) -> WriterConfig {
        let mut config = WriterConfig::new();

        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(line_ending) = self.line_ending {
            config.line_ending = line_ending;
        }
        if let Some(validate) = self.validate_before_write {
            config.validate_before_write = validate;
        }

        config
    }
}
