// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::engine::Chain;
use crate::errors::ChainError;
use crate::observability::messages::{engine::*, StructuredLog};
use crate::traits::{Interceptor, SharedInterceptor};

/// Run `item` through `interceptors`, starting at position 0.
///
/// Returns whatever the outermost interceptor returns. An empty list is
/// rejected with [`ChainError::EmptyChain`] instead of producing a default.
pub fn dispatch<I, R>(interceptors: &[SharedInterceptor<I, R>], item: I) -> Result<R, ChainError> {
    if interceptors.is_empty() {
        EmptyChainRejected.log();
        return Err(ChainError::EmptyChain);
    }

    let started = DispatchStarted {
        interceptor_count: interceptors.len(),
    };
    let span = started.span("dispatch");
    let _guard = span.enter();
    started.log();

    let start_time = Instant::now();
    let result = Chain::new(interceptors, 0, item).forward();

    match &result {
        Ok(_) => DispatchCompleted {
            interceptor_count: interceptors.len(),
            duration: start_time.elapsed(),
        }
        .log(),
        Err(error) => DispatchFailed { error }.log(),
    }

    result
}

/// An ordered interceptor list, built once and dispatched through many times.
///
/// The list is read-only after construction; every [`Dispatcher::dispatch`] call
/// gets its own cursors, so dispatches never share traversal state.
pub struct Dispatcher<I, R> {
    interceptors: Vec<SharedInterceptor<I, R>>,
}

impl<I, R> Dispatcher<I, R> {
    /// Create a dispatcher over an ordered interceptor list.
    pub fn new(interceptors: Vec<SharedInterceptor<I, R>>) -> Self {
        Self { interceptors }
    }

    pub fn builder() -> DispatcherBuilder<I, R> {
        DispatcherBuilder::new()
    }

    /// Run `item` through the chain. See [`dispatch`].
    pub fn dispatch(&self, item: I) -> Result<R, ChainError> {
        dispatch(&self.interceptors, item)
    }

    pub fn interceptors(&self) -> &[SharedInterceptor<I, R>] {
        &self.interceptors
    }

    /// Interceptor names in chain order.
    pub fn names(&self) -> Vec<&str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl<I, R> Clone for Dispatcher<I, R> {
    fn clone(&self) -> Self {
        Self {
            interceptors: self.interceptors.clone(),
        }
    }
}

impl<I, R> fmt::Debug for Dispatcher<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("interceptor_count", &self.interceptors.len())
            .field("interceptors", &self.names())
            .finish()
    }
}

impl<I, R> From<Vec<SharedInterceptor<I, R>>> for Dispatcher<I, R> {
    fn from(interceptors: Vec<SharedInterceptor<I, R>>) -> Self {
        Self::new(interceptors)
    }
}

/// Builder that appends interceptors in the order they run.
pub struct DispatcherBuilder<I, R> {
    interceptors: Vec<SharedInterceptor<I, R>>,
}

impl<I, R> DispatcherBuilder<I, R> {
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Append an interceptor.
    pub fn with<M: Interceptor<I, R> + 'static>(mut self, interceptor: M) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append an interceptor that is already shared.
    pub fn with_shared(mut self, interceptor: SharedInterceptor<I, R>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Append an interceptor only when `condition` holds.
    pub fn with_if<M: Interceptor<I, R> + 'static>(self, condition: bool, interceptor: M) -> Self {
        if condition {
            self.with(interceptor)
        } else {
            self
        }
    }

    pub fn build(self) -> Dispatcher<I, R> {
        Dispatcher::new(self.interceptors)
    }
}

impl<I, R> Default for DispatcherBuilder<I, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::from_fn;

    fn tag(label: &'static str) -> impl Interceptor<String, String> {
        from_fn(label, move |chain: Chain<'_, String, String>| {
            let tagged = format!("{}{}", chain.item(), label);
            chain.proceed(tagged)
        })
    }

    fn finish() -> impl Interceptor<String, String> {
        from_fn("finish", |chain: Chain<'_, String, String>| {
            Ok(format!("done:{}", chain.item()))
        })
    }

    #[test]
    fn test_builder_keeps_order() {
        let dispatcher = Dispatcher::builder()
            .with(tag("a"))
            .with(tag("b"))
            .with_if(false, tag("skipped"))
            .with_if(true, tag("c"))
            .with(finish())
            .build();

        assert_eq!(dispatcher.len(), 4);
        assert_eq!(dispatcher.names(), vec!["a", "b", "c", "finish"]);
        assert_eq!(dispatcher.dispatch("x".to_string()).unwrap(), "done:xabc");
    }

    #[test]
    fn test_empty_dispatcher_fails() {
        let dispatcher: Dispatcher<String, String> = Dispatcher::builder().build();

        assert!(dispatcher.is_empty());
        assert!(matches!(
            dispatcher.dispatch("x".to_string()),
            Err(ChainError::EmptyChain)
        ));
    }

    #[test]
    fn test_dispatches_are_independent() {
        let dispatcher = Dispatcher::builder().with(tag("!")).with(finish()).build();

        assert_eq!(dispatcher.dispatch("one".to_string()).unwrap(), "done:one!");
        assert_eq!(dispatcher.dispatch("two".to_string()).unwrap(), "done:two!");
    }

    #[test]
    fn test_with_shared_and_from_vec() {
        let shared: SharedInterceptor<String, String> = Arc::new(finish());
        let built = Dispatcher::builder().with_shared(Arc::clone(&shared)).build();
        let from_vec: Dispatcher<String, String> = vec![Arc::clone(&shared)].into();

        assert!(Arc::ptr_eq(&built.interceptors()[0], &shared));
        assert!(Arc::ptr_eq(&from_vec.interceptors()[0], &shared));

        assert_eq!(built.dispatch("x".to_string()).unwrap(), "done:x");
        assert_eq!(from_vec.clone().dispatch("y".to_string()).unwrap(), "done:y");
    }

    #[test]
    fn test_debug_lists_interceptor_names() {
        let dispatcher = Dispatcher::builder().with(tag("a")).with(finish()).build();
        let debug = format!("{:?}", dispatcher);

        assert!(debug.contains("interceptor_count: 2"));
        assert!(debug.contains("[\"a\", \"finish\"]"));
    }
}
