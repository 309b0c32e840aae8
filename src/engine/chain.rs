// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The chain cursor.
//!
//! A [`Chain`] is a value: the shared interceptor list, the index of the next
//! interceptor to run, and the item that interceptor will receive. Advancing
//! never mutates a cursor. [`Chain::proceed`] consumes it and builds a fresh one
//! one position further along, so no interceptor can disturb another's view of
//! where the traversal is.
//!
//! ```text
//! dispatch(item)
//!   └─ Chain { position: 0, item }.forward()
//!        └─ interceptors[0].intercept(Chain { position: 1, item })
//!             └─ chain.proceed(item')
//!                  └─ interceptors[1].intercept(Chain { position: 2, item' })
//!                       └─ ... returns R without calling proceed (terminal / short-circuit)
//! ```
//!
//! Chain depth equals call-stack depth, bounded by the list length.

use std::fmt;

use crate::errors::ChainError;
use crate::observability::messages::{engine::*, StructuredLog};
use crate::traits::SharedInterceptor;

pub struct Chain<'a, I, R> {
    interceptors: &'a [SharedInterceptor<I, R>],
    position: usize,
    item: I,
}

impl<'a, I, R> Chain<'a, I, R> {
    /// Build a cursor that will run `interceptors[position]` next.
    pub(crate) fn new(interceptors: &'a [SharedInterceptor<I, R>], position: usize, item: I) -> Self {
        debug_assert!(position <= interceptors.len());
        Self {
            interceptors,
            position,
            item,
        }
    }

    /// The item this cursor was built with.
    pub fn item(&self) -> &I {
        &self.item
    }

    /// Consume the cursor and take its item, ending the traversal here.
    pub fn into_item(self) -> I {
        self.item
    }

    /// Index of the interceptor that [`proceed`](Self::proceed) would run.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of interceptors still ahead of this cursor.
    pub fn remaining(&self) -> usize {
        self.interceptors.len() - self.position
    }

    /// Total number of interceptors in the chain.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run the next interceptor with `item` and return its result verbatim.
    ///
    /// Fails with [`ChainError::ChainExhausted`] when no interceptor is left,
    /// i.e. every interceptor so far forwarded and none produced a result.
    pub fn proceed(self, item: I) -> Result<R, ChainError> {
        advance(self.interceptors, self.position, item)
    }

    /// Proceed with the item this cursor already holds.
    pub fn forward(self) -> Result<R, ChainError> {
        advance(self.interceptors, self.position, self.item)
    }
}

fn advance<I, R>(
    interceptors: &[SharedInterceptor<I, R>],
    position: usize,
    item: I,
) -> Result<R, ChainError> {
    let Some(interceptor) = interceptors.get(position) else {
        ChainExhausted { position }.log();
        return Err(ChainError::ChainExhausted { position });
    };

    let entered = InterceptorEntered {
        interceptor: interceptor.name(),
        position,
        remaining: interceptors.len() - position - 1,
    };
    let span = entered.span("intercept");
    let _guard = span.enter();
    entered.log();

    interceptor.intercept(Chain::new(interceptors, position + 1, item))
}

impl<I: fmt::Debug, R> fmt::Debug for Chain<'_, I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("position", &self.position)
            .field("len", &self.interceptors.len())
            .field("item", &self.item)
            .finish()
    }
}
