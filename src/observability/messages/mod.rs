// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `engine` - dispatch lifecycle and chain traversal events
//! * `interceptor` - sample interceptor and factory events
//! * `validation` - configuration validation warnings and errors

use tracing::Span;

pub mod engine;
pub mod interceptor;
pub mod validation;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event at its level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
