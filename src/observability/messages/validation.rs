// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Empty interceptor lists
//! * Duplicate interceptor ID detection
//! * Unknown interceptor types
//! * Terminal placement warnings

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Duplicate interceptor ID in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use interceptor_chain::observability::messages::validation::DuplicateInterceptorId;
///
/// let msg = DuplicateInterceptorId {
///     interceptor_id: "audit",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateInterceptorId<'a> {
    pub interceptor_id: &'a str,
}

impl Display for DuplicateInterceptorId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate interceptor ID: '{}'", self.interceptor_id)
    }
}

impl StructuredLog for DuplicateInterceptorId<'_> {
    fn log(&self) {
        tracing::error!(interceptor_id = self.interceptor_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_interceptor_id",
            span_name = name,
            interceptor_id = self.interceptor_id,
        )
    }
}

/// Interceptor configured with a type nothing can build.
pub struct UnknownInterceptorType<'a> {
    pub interceptor_id: &'a str,
    pub kind: &'a str,
}

impl Display for UnknownInterceptorType<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' has unknown type '{}'",
            self.interceptor_id, self.kind
        )
    }
}

impl StructuredLog for UnknownInterceptorType<'_> {
    fn log(&self) {
        tracing::error!(
            interceptor_id = self.interceptor_id,
            kind = self.kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unknown_interceptor_type",
            span_name = name,
            interceptor_id = self.interceptor_id,
            kind = self.kind,
        )
    }
}

/// Configuration with no interceptors.
pub struct EmptyChainConfigured;

impl Display for EmptyChainConfigured {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration declares no interceptors")
    }
}

impl StructuredLog for EmptyChainConfigured {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("empty_chain_configured", span_name = name)
    }
}

/// Interceptors configured after a terminal interceptor.
///
/// # Log Level
/// `warn!` - The configuration still loads
///
/// # Example
/// ```
/// use interceptor_chain::observability::messages::validation::UnreachableInterceptors;
///
/// let unreachable = vec!["audit"];
/// let msg = UnreachableInterceptors {
///     terminal: "action",
///     unreachable: &unreachable,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnreachableInterceptors<'a> {
    pub terminal: &'a str,
    pub unreachable: &'a [&'a str],
}

impl Display for UnreachableInterceptors<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Terminal interceptor '{}' ends every traversal; [{}] will never run",
            self.terminal,
            self.unreachable.join(", ")
        )
    }
}

impl StructuredLog for UnreachableInterceptors<'_> {
    fn log(&self) {
        tracing::warn!(
            terminal = self.terminal,
            unreachable_count = self.unreachable.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "unreachable_interceptors",
            span_name = name,
            terminal = self.terminal,
            unreachable = self.unreachable.join(", "),
        )
    }
}

/// No terminal interceptor configured.
pub struct MissingTerminal<'a> {
    pub last: &'a str,
}

impl Display for MissingTerminal<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No terminal interceptor after '{}'; traversal can run off the end of the chain",
            self.last
        )
    }
}

impl StructuredLog for MissingTerminal<'_> {
    fn log(&self) {
        tracing::warn!(last = self.last, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("missing_terminal", span_name = name, last = self.last)
    }
}
