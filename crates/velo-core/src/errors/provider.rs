// ABOUTME: Structured error types for workout transport operations
// ABOUTME: Distinguishes unsupported operations (which trigger fallbacks) from real failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors reported by a workout transport
///
/// `UnsupportedFeature` is not a failure of the remote platform: it tells the
/// caller the transport has no native implementation of an operation, so a
/// fallback path may be taken.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Remote API answered with an error status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Transport name
        provider: String,
        /// HTTP-like status code
        status_code: u16,
        /// Body or reason returned by the platform
        message: String,
        /// Whether the caller could retry
        retryable: bool,
    },

    /// Transport does not implement this operation
    #[error("{provider} does not support {feature}")]
    UnsupportedFeature {
        /// Transport name
        provider: String,
        /// Operation that is missing
        feature: String,
    },

    /// Platform answered but the body could not be understood
    #[error("{provider} returned an invalid response: {details}")]
    InvalidResponse {
        /// Transport name
        provider: String,
        /// What was wrong with it
        details: String,
    },

    /// Platform refused the workout
    #[error("{provider} rejected workout '{workout_name}': {reason}")]
    Rejected {
        /// Transport name
        provider: String,
        /// Name of the rejected workout
        workout_name: String,
        /// Reason given by the platform
        reason: String,
    },
}

impl ProviderError {
    /// Whether this error only signals a missing native operation
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFeature { .. })
    }
}

/// Result alias for transport operations
pub type ProviderResult<T> = Result<T, ProviderError>;
