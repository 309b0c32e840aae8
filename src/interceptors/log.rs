// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use super::InstructionChain;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::observability::messages::{interceptor::*, StructuredLog};
use crate::traits::Interceptor;

/// Log interceptor - logs the instruction, forwards it unchanged, logs what comes back
pub struct LogInterceptor {
    id: String,
}

impl LogInterceptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for LogInterceptor {
    fn default() -> Self {
        Self::new("log")
    }
}

impl Interceptor<Instruction, Outcome> for LogInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        let instruction = chain.item();
        let received = InstructionReceived {
            interceptor_id: &self.id,
            text: &instruction.text,
            metadata_entries: instruction.metadata.len(),
        };
        let span = received.span("log_interceptor");
        let _guard = span.enter();
        received.log();

        let start_time = Instant::now();
        match chain.forward() {
            Ok(outcome) => {
                OutcomeReturned {
                    interceptor_id: &self.id,
                    body: &outcome.body,
                    duration: start_time.elapsed(),
                }
                .log();
                Ok(outcome)
            }
            Err(error) => {
                DownstreamFailed {
                    interceptor_id: &self.id,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    fn name(&self) -> &str {
        &self.id
    }
}
