// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the sample interceptors and the local factory.
//!
//! This module contains message types for logging events related to:
//! * Instructions entering and outcomes leaving an interceptor
//! * Short-circuits and failures raised by interceptors
//! * Interceptor instantiation from configuration

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An interceptor received an instruction.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use interceptor_chain::observability::messages::interceptor::InstructionReceived;
///
/// let msg = InstructionReceived {
///     interceptor_id: "audit",
///     text: "hello",
///     metadata_entries: 0,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct InstructionReceived<'a> {
    pub interceptor_id: &'a str,
    pub text: &'a str,
    pub metadata_entries: usize,
}

impl Display for InstructionReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' received instruction: text=\"{}\", metadata_entries={}",
            self.interceptor_id, self.text, self.metadata_entries
        )
    }
}

impl StructuredLog for InstructionReceived<'_> {
    fn log(&self) {
        tracing::info!(
            interceptor_id = self.interceptor_id,
            text_len = self.text.len(),
            metadata_entries = self.metadata_entries,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "instruction",
            span_name = name,
            interceptor_id = self.interceptor_id,
            text_len = self.text.len(),
        )
    }
}

/// An outcome came back through an interceptor.
///
/// # Log Level
/// `info!` - Important operational event
pub struct OutcomeReturned<'a> {
    pub interceptor_id: &'a str,
    pub body: &'a str,
    pub duration: std::time::Duration,
}

impl Display for OutcomeReturned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' returning outcome: body=\"{}\", downstream took {:?}",
            self.interceptor_id, self.body, self.duration
        )
    }
}

impl StructuredLog for OutcomeReturned<'_> {
    fn log(&self) {
        tracing::info!(
            interceptor_id = self.interceptor_id,
            body_len = self.body.len(),
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "outcome",
            span_name = name,
            interceptor_id = self.interceptor_id,
            duration = ?self.duration,
        )
    }
}

/// An interceptor saw a failure come back from downstream.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DownstreamFailed<'a> {
    pub interceptor_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DownstreamFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' observed downstream failure: {}",
            self.interceptor_id, self.error
        )
    }
}

impl StructuredLog for DownstreamFailed<'_> {
    fn log(&self) {
        tracing::error!(
            interceptor_id = self.interceptor_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "downstream_failed",
            span_name = name,
            interceptor_id = self.interceptor_id,
            error = %self.error,
        )
    }
}

/// A guard stopped an instruction from going further.
///
/// # Log Level
/// `warn!` - Expected, but worth seeing
///
/// # Example
/// ```
/// use interceptor_chain::observability::messages::interceptor::InstructionBlocked;
///
/// let msg = InstructionBlocked {
///     interceptor_id: "guard",
///     term: "drop table",
/// };
///
/// assert_eq!(msg.to_string(), "Interceptor 'guard' blocked instruction containing 'drop table'");
/// ```
pub struct InstructionBlocked<'a> {
    pub interceptor_id: &'a str,
    pub term: &'a str,
}

impl Display for InstructionBlocked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' blocked instruction containing '{}'",
            self.interceptor_id, self.term
        )
    }
}

impl StructuredLog for InstructionBlocked<'_> {
    fn log(&self) {
        tracing::warn!(
            interceptor_id = self.interceptor_id,
            term = self.term,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "instruction_blocked",
            span_name = name,
            interceptor_id = self.interceptor_id,
            term = self.term,
        )
    }
}

/// An interceptor rejected an instruction with an error.
pub struct InstructionRejected<'a> {
    pub interceptor_id: &'a str,
    pub reason: &'a str,
}

impl Display for InstructionRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interceptor '{}' rejected instruction: {}",
            self.interceptor_id, self.reason
        )
    }
}

impl StructuredLog for InstructionRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            interceptor_id = self.interceptor_id,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "instruction_rejected",
            span_name = name,
            interceptor_id = self.interceptor_id,
        )
    }
}

/// Interceptor instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use interceptor_chain::observability::messages::interceptor::InterceptorInstantiationFailed;
///
/// let msg = InterceptorInstantiationFailed {
///     interceptor_id: "mystery",
///     kind: "teleport",
///     reason: "Unknown local interceptor implementation",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct InterceptorInstantiationFailed<'a> {
    pub interceptor_id: &'a str,
    pub kind: &'a str,
    pub reason: &'a str,
}

impl Display for InterceptorInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate interceptor '{}' of type '{}': {}",
            self.interceptor_id, self.kind, self.reason
        )
    }
}

impl StructuredLog for InterceptorInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            interceptor_id = self.interceptor_id,
            kind = self.kind,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "interceptor_instantiation_failed",
            span_name = name,
            interceptor_id = self.interceptor_id,
            kind = self.kind,
        )
    }
}
