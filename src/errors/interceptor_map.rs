// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for turning interceptor configuration into interceptor instances.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building interceptors from configuration
#[derive(Debug)]
pub enum InterceptorMapError {
    /// No local implementation exists for the configured type
    UnknownImplementation {
        interceptor_id: String,
        kind: String,
    },

    /// The `options` block could not be decoded for this interceptor type
    InvalidOptions {
        interceptor_id: String,
        reason: String,
    },
}

impl fmt::Display for InterceptorMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterceptorMapError::UnknownImplementation {
                interceptor_id,
                kind,
            } => {
                write!(
                    f,
                    "Unknown local interceptor implementation '{}' for interceptor '{}'",
                    kind, interceptor_id
                )
            }
            InterceptorMapError::InvalidOptions {
                interceptor_id,
                reason,
            } => {
                write!(
                    f,
                    "Invalid options for interceptor '{}': {}",
                    interceptor_id, reason
                )
            }
        }
    }
}

impl Error for InterceptorMapError {}
