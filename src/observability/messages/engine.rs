// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dispatch lifecycle and chain traversal events.
//!
//! This module contains message types for logging events related to:
//! * Dispatch lifecycle (start, completion, failure)
//! * Each step of the traversal
//! * Chains that are empty or run off their end

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Dispatch started.
///
/// # Log Level
/// `debug!` - Emitted once per dispatch
///
/// # Example
/// ```
/// use interceptor_chain::observability::messages::engine::DispatchStarted;
///
/// let msg = DispatchStarted {
///     interceptor_count: 2,
/// };
///
/// assert_eq!(msg.to_string(), "Starting dispatch through 2 interceptors");
/// ```
pub struct DispatchStarted {
    pub interceptor_count: usize,
}

impl Display for DispatchStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting dispatch through {} interceptors",
            self.interceptor_count
        )
    }
}

impl StructuredLog for DispatchStarted {
    fn log(&self) {
        tracing::debug!(interceptor_count = self.interceptor_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch",
            span_name = name,
            interceptor_count = self.interceptor_count,
        )
    }
}

/// Dispatch produced a result.
///
/// # Log Level
/// `debug!` - Emitted once per dispatch
pub struct DispatchCompleted {
    pub interceptor_count: usize,
    pub duration: std::time::Duration,
}

impl Display for DispatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dispatch through {} interceptors completed in {:?}",
            self.interceptor_count, self.duration
        )
    }
}

impl StructuredLog for DispatchCompleted {
    fn log(&self) {
        tracing::debug!(
            interceptor_count = self.interceptor_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch_completed",
            span_name = name,
            interceptor_count = self.interceptor_count,
            duration = ?self.duration,
        )
    }
}

/// Dispatch failed with an error.
///
/// # Log Level
/// `warn!` - The error is returned to the caller, who decides how bad it is
///
/// # Example
/// ```
/// use interceptor_chain::errors::ChainError;
/// use interceptor_chain::observability::messages::engine::DispatchFailed;
///
/// let error = ChainError::ChainExhausted { position: 2 };
/// let msg = DispatchFailed { error: &error };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct DispatchFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for DispatchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dispatch failed: {}", self.error)
    }
}

impl StructuredLog for DispatchFailed<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("dispatch_failed", span_name = name, error = %self.error)
    }
}

/// Dispatch refused because there are no interceptors.
pub struct EmptyChainRejected;

impl Display for EmptyChainRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Refusing to dispatch through an empty interceptor chain")
    }
}

impl StructuredLog for EmptyChainRejected {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("empty_chain", span_name = name)
    }
}

/// The chain is handing the item to the interceptor at `position`.
///
/// # Log Level
/// `trace!` - Emitted for every step of every dispatch
pub struct InterceptorEntered<'a> {
    pub interceptor: &'a str,
    pub position: usize,
    pub remaining: usize,
}

impl Display for InterceptorEntered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Entering interceptor '{}' at position {} ({} remaining)",
            self.interceptor, self.position, self.remaining
        )
    }
}

impl StructuredLog for InterceptorEntered<'_> {
    fn log(&self) {
        tracing::trace!(
            interceptor = self.interceptor,
            position = self.position,
            remaining = self.remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "intercept",
            span_name = name,
            interceptor = self.interceptor,
            position = self.position,
        )
    }
}

/// `proceed` was called with no interceptor left to run.
///
/// # Log Level
/// `warn!` - Usually a missing terminal interceptor in the configuration
pub struct ChainExhausted {
    pub position: usize,
}

impl Display for ChainExhausted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor chain exhausted at position {} without producing a result",
            self.position
        )
    }
}

impl StructuredLog for ChainExhausted {
    fn log(&self) {
        tracing::warn!(position = self.position, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("chain_exhausted", span_name = name, position = self.position)
    }
}
