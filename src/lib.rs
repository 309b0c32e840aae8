// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;       // config loading, validation + runtime builder
pub mod engine;       // chain cursor + dispatcher
pub mod errors;       // error handling
pub mod interceptors; // bundled local interceptors
pub mod model;        // instruction / outcome payloads
pub mod observability;
pub mod traits;       // the interceptor capability

pub use engine::{dispatch, Chain, Dispatcher};
pub use errors::ChainError;
pub use traits::{from_fn, Interceptor, SharedInterceptor};
