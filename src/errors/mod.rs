// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod chain;
mod config;
mod interceptor_map;

pub use chain::ChainError;
pub use config::{ConfigError, ValidationError};
pub use interceptor_map::InterceptorMapError;
