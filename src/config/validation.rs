//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (page sizes > 0, default within maximum)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api.product_version.trim().is_empty() {
        errors.push(ValidationError::new("api.product_version", "must not be blank"));
    }
    if config.api.mime_type.trim().is_empty() {
        errors.push(ValidationError::new("api.mime_type", "must not be blank"));
    }

    if config.paging.page_size == 0 {
        errors.push(ValidationError::new("paging.page_size", "must be greater than 0"));
    }
    if config.paging.max_page_size == 0 {
        errors.push(ValidationError::new("paging.max_page_size", "must be greater than 0"));
    }
    if config.paging.page_size > config.paging.max_page_size {
        errors.push(ValidationError::new(
            "paging.page_size",
            format!(
                "default {} exceeds max_page_size {}",
                config.paging.page_size, config.paging.max_page_size
            ),
        ));
    }

    if config.suggest.default_num == 0 {
        errors.push(ValidationError::new("suggest.default_num", "must be greater than 0"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
