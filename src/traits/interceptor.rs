// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The interceptor capability.
//!
//! An interceptor receives a [`Chain`] cursor and does exactly one of two things:
//!
//! * calls [`Chain::proceed`] once, optionally with a replacement item, and returns
//!   what it yields (optionally post-processed), or
//! * returns a result without calling `proceed`, which short-circuits the chain.
//!
//! `proceed` consumes the cursor, so calling it twice does not compile, and the
//! cursor borrows the interceptor list, so it cannot be kept after `intercept`
//! returns.
//!
//! ```rust
//! use interceptor_chain::engine::{dispatch, Chain};
//! use interceptor_chain::errors::ChainError;
//! use interceptor_chain::traits::{from_fn, Interceptor, SharedInterceptor};
//! use std::sync::Arc;
//!
//! struct Shout;
//!
//! impl Interceptor<String, String> for Shout {
//!     fn intercept(&self, chain: Chain<'_, String, String>) -> Result<String, ChainError> {
//!         let louder = chain.item().to_uppercase();
//!         chain.proceed(louder)
//!     }
//! }
//!
//! let echo = from_fn("echo", |chain: Chain<'_, String, String>| Ok(chain.into_item()));
//! let interceptors: Vec<SharedInterceptor<String, String>> = vec![Arc::new(Shout), Arc::new(echo)];
//!
//! assert_eq!(dispatch(&interceptors, "hi".to_string()).unwrap(), "HI");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::engine::Chain;
use crate::errors::ChainError;

pub trait Interceptor<I, R>: Send + Sync {
    /// Handle the item held by `chain`, forwarding through `chain.proceed` or
    /// short-circuiting with a result of its own.
    fn intercept(&self, chain: Chain<'_, I, R>) -> Result<R, ChainError>;

    /// Name of this interceptor (for debugging/logging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// An interceptor that can be shared by every dispatch.
pub type SharedInterceptor<I, R> = Arc<dyn Interceptor<I, R>>;

/// Wraps a closure so it can sit in an interceptor list.
///
/// Built with [`from_fn`].
pub struct FnInterceptor<F> {
    name: String,
    f: F,
}

/// Turn a closure into an interceptor.
///
/// The closure gets the cursor by value, exactly like [`Interceptor::intercept`].
pub fn from_fn<I, R, F>(name: impl Into<String>, f: F) -> FnInterceptor<F>
where
    F: Fn(Chain<'_, I, R>) -> Result<R, ChainError> + Send + Sync,
{
    FnInterceptor {
        name: name.into(),
        f,
    }
}

impl<I, R, F> Interceptor<I, R> for FnInterceptor<F>
where
    F: Fn(Chain<'_, I, R>) -> Result<R, ChainError> + Send + Sync,
{
    fn intercept(&self, chain: Chain<'_, I, R>) -> Result<R, ChainError> {
        (self.f)(chain)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnInterceptor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnInterceptor")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dispatch;

    struct Passthrough;

    impl Interceptor<u32, u32> for Passthrough {
        fn intercept(&self, chain: Chain<'_, u32, u32>) -> Result<u32, ChainError> {
            let item = *chain.item();
            chain.proceed(item)
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert!(Passthrough.name().ends_with("Passthrough"));
    }

    #[test]
    fn test_fn_interceptor_reports_given_name() {
        let double = from_fn("double", |chain: Chain<'_, u32, u32>| Ok(*chain.item() * 2));
        assert_eq!(Interceptor::<u32, u32>::name(&double), "double");
        assert_eq!(format!("{:?}", double), "FnInterceptor { name: \"double\" }");
    }

    #[test]
    fn test_struct_and_closure_interceptors_mix() {
        let interceptors: Vec<SharedInterceptor<u32, u32>> = vec![
            Arc::new(Passthrough),
            Arc::new(from_fn("add_one", |chain: Chain<'_, u32, u32>| {
                let next = *chain.item() + 1;
                chain.proceed(next)
            })),
            Arc::new(from_fn("square", |chain: Chain<'_, u32, u32>| {
                Ok(chain.item() * chain.item())
            })),
        ];

        assert_eq!(dispatch(&interceptors, 3).unwrap(), 16);
    }
}
