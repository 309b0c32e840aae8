// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use super::InstructionChain;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::traits::Interceptor;

/// Metadata key holding the downstream time in microseconds.
pub const ELAPSED_US_KEY: &str = "elapsed_us";

/// Timing interceptor - forwards, then stamps the outcome with how long the rest of the chain took
pub struct TimingInterceptor {
    id: String,
}

impl TimingInterceptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Interceptor<Instruction, Outcome> for TimingInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        let start_time = Instant::now();
        let outcome = chain.forward()?;
        let elapsed = start_time.elapsed();

        Ok(outcome.with_metadata(ELAPSED_US_KEY, elapsed.as_micros().to_string()))
    }

    fn name(&self) -> &str {
        &self.id
    }
}
