// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Chain traversal.
//!
//! * `chain` - the [`Chain`] cursor handed to every interceptor
//! * `dispatcher` - entry points that start a traversal at position 0

pub mod chain;
pub mod dispatcher;

pub use chain::Chain;
pub use dispatcher::{dispatch, Dispatcher, DispatcherBuilder};
