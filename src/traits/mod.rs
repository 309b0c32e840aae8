// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod interceptor;

pub use interceptor::{from_fn, FnInterceptor, Interceptor, SharedInterceptor};
