//! Error types for the civiclists crate.
//!
//! This module defines the centralized error type [`CivicListsError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! Presentation-path inputs are never rejected: absent record fields default to
//! empty strings and zeros, unknown state codes resolve to empty region names,
//! and unknown challenge ids yield empty rosters. The variants below cover the
//! genuine contract violations that remain.

use thiserror::Error;

/// The main error type for civiclists operations.
///
/// This enum consolidates the error conditions that can occur while feeding
/// stores and driving list subscribers. Malformed display data is absorbed by
/// defaulting rather than surfaced here.
///
/// # Examples
///
/// ```
/// use civiclists::{CivicListsError, Result};
///
/// fn check_mounted(mounted: bool) -> Result<()> {
///     if mounted {
///         return Err(CivicListsError::Lifecycle("already mounted".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum CivicListsError {
    /// A store payload failed to deserialize.
    ///
    /// Occurs when a JSON API payload handed to a store's ingest method does
    /// not parse. Automatically converts from `serde_json::Error` using the
    /// `#[from]` attribute.
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// A component was driven outside its lifecycle contract.
    ///
    /// Occurs when a subscriber is mounted twice. The string describes the
    /// violated transition.
    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    /// Host configuration is invalid.
    ///
    /// Reserved for host configuration contract violations. Lenient parsing in
    /// [`Config::from_map`](crate::Config::from_map) falls back to defaults
    /// instead of producing this variant.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for civiclists operations.
///
/// This is a type alias for `std::result::Result<T, CivicListsError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CivicListsError>;
