// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Errors that can occur during interceptor list validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The configuration declares no interceptors at all
    EmptyChain,
    /// Two interceptors share the same ID
    DuplicateInterceptorId {
        /// The duplicate interceptor ID
        interceptor_id: String,
    },
    /// An interceptor names a type the local factory does not know
    UnknownInterceptorType {
        /// The interceptor with the unknown type
        interceptor_id: String,
        /// The type that couldn't be resolved
        kind: String,
    },
    /// A terminal interceptor sits before other interceptors, which can never run
    UnreachableInterceptors {
        /// The terminal interceptor that ends every traversal
        terminal: String,
        /// The interceptors configured after it
        unreachable: Vec<String>,
    },
    /// No terminal interceptor is configured, so traversal may run off the end
    MissingTerminal {
        /// The last interceptor in the list
        last: String,
    },
}

impl ValidationError {
    /// Warnings are logged but do not reject the configuration.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ValidationError::UnreachableInterceptors { .. } | ValidationError::MissingTerminal { .. }
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyChain => {
                write!(f, "Configuration declares no interceptors")
            }
            ValidationError::DuplicateInterceptorId { interceptor_id } => {
                write!(f, "Duplicate interceptor ID: '{}'", interceptor_id)
            }
            ValidationError::UnknownInterceptorType {
                interceptor_id,
                kind,
            } => {
                write!(
                    f,
                    "Interceptor '{}' has type '{}' which does not exist",
                    interceptor_id, kind
                )
            }
            ValidationError::UnreachableInterceptors {
                terminal,
                unreachable,
            } => {
                write!(
                    f,
                    "Terminal interceptor '{}' ends every traversal; [{}] will never run",
                    terminal,
                    unreachable.join(", ")
                )
            }
            ValidationError::MissingTerminal { last } => {
                write!(
                    f,
                    "No terminal interceptor configured after '{}'; dispatch fails with ChainExhausted unless an interceptor short-circuits",
                    last
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
