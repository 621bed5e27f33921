//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees. Validation is a
//! pure function and collects every error instead of stopping at the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ConsoleConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("backend.base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("backend.base_url '{url}' must use http or https")]
    UnsupportedScheme { url: String },

    #[error("listener.bind_address '{addr}' is not a valid socket address")]
    InvalidBindAddress { addr: String },

    #[error("listener.static_dir must not be empty")]
    EmptyStaticDir,
}

/// Validate a configuration, returning all errors found.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme {
                    url: config.backend.base_url.clone(),
                });
            }
        }
        Err(e) => {
            errors.push(ValidationError::InvalidBaseUrl {
                url: config.backend.base_url.clone(),
                reason: e.to_string(),
            });
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            addr: config.listener.bind_address.clone(),
        });
    }

    if config.listener.static_dir.trim().is_empty() {
        errors.push(ValidationError::EmptyStaticDir);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
