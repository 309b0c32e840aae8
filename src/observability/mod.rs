// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational log line in the crate is a small message
//! struct with a `Display` implementation, emitted through
//! [`messages::StructuredLog`]. This keeps message text in one place and gives
//! each event consistent structured fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - dispatch lifecycle and chain traversal events
//! * `messages::interceptor` - events raised by the sample interceptors and their factory
//! * `messages::validation` - configuration validation warnings and errors
//!
//! # Usage
//!
//! ```rust
//! use interceptor_chain::observability::messages::{engine::DispatchStarted, StructuredLog};
//!
//! let msg = DispatchStarted {
//!     interceptor_count: 3,
//! };
//!
//! let span = msg.span("dispatch");
//! let _guard = span.enter();
//! msg.log();
//! ```

pub mod messages;
