// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only interceptors for exercising the chain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::InstructionChain;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::traits::Interceptor;

/// Counts how often it runs and records its id in a shared call log, then forwards unchanged
pub struct ProbeInterceptor {
    pub id: String,
    pub calls: Arc<AtomicUsize>,
    pub call_log: Arc<Mutex<Vec<String>>>,
}

impl ProbeInterceptor {
    pub fn new(id: &str, call_log: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            id: id.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            call_log: Arc::clone(call_log),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Interceptor<Instruction, Outcome> for ProbeInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_log.lock().unwrap().push(self.id.clone());
        chain.forward()
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// Returns a fixed outcome without calling `proceed`
pub struct ShortCircuitInterceptor {
    pub body: String,
}

impl ShortCircuitInterceptor {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

impl Interceptor<Instruction, Outcome> for ShortCircuitInterceptor {
    fn intercept(&self, _chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        Ok(Outcome::new(self.body.as_str()))
    }

    fn name(&self) -> &str {
        "short_circuit"
    }
}

/// Always fails
pub struct FailingInterceptor;

impl Interceptor<Instruction, Outcome> for FailingInterceptor {
    fn intercept(&self, _chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        Err(ChainError::interceptor(
            "failing",
            anyhow::anyhow!("Simulated interceptor failure"),
        ))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
