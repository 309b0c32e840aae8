// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while traversing an interceptor chain.
//!
//! The chain machinery itself only ever produces [`ChainError::EmptyChain`] and
//! [`ChainError::ChainExhausted`]. Interceptor failures are built by the
//! interceptor that failed and travel back up the call stack untouched: no
//! wrapping, no retry, no recovery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    /// `dispatch` was called with no interceptors to run.
    #[error("cannot dispatch through an empty interceptor chain")]
    EmptyChain,

    /// `proceed` was called past the last interceptor and nothing produced a result.
    #[error("interceptor chain exhausted at position {position} without producing a result")]
    ChainExhausted { position: usize },

    /// An interceptor failed while handling the work item.
    #[error("interceptor '{interceptor}' failed: {source}")]
    InterceptorFailed {
        interceptor: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ChainError {
    /// Build an [`ChainError::InterceptorFailed`] for the named interceptor.
    pub fn interceptor(name: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        ChainError::InterceptorFailed {
            interceptor: name.into(),
            source: source.into(),
        }
    }

    /// Whether this error was raised by the chain itself rather than an interceptor.
    pub fn is_chain_error(&self) -> bool {
        matches!(self, ChainError::EmptyChain | ChainError::ChainExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ChainError::EmptyChain.to_string(),
            "cannot dispatch through an empty interceptor chain"
        );
        assert_eq!(
            ChainError::ChainExhausted { position: 2 }.to_string(),
            "interceptor chain exhausted at position 2 without producing a result"
        );

        let err = ChainError::interceptor("guard", anyhow::anyhow!("nope"));
        assert_eq!(err.to_string(), "interceptor 'guard' failed: nope");
    }

    #[test]
    fn test_interceptor_failure_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ChainError::interceptor("writer", io);

        let source = std::error::Error::source(&err).expect("source should be kept");
        assert_eq!(source.to_string(), "disk on fire");
        assert!(!err.is_chain_error());
    }

    #[test]
    fn test_is_chain_error() {
        assert!(ChainError::EmptyChain.is_chain_error());
        assert!(ChainError::ChainExhausted { position: 0 }.is_chain_error());
    }
}
