// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::InstructionChain;
use crate::config::consts::DEFAULT_ACTION_PREFIX;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::traits::Interceptor;

/// Configuration for the Action interceptor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ActionConfig {
    pub prefix: Option<String>,
}

/// Action interceptor - the terminal step; turns the instruction into an outcome
/// and never calls `proceed`
pub struct ActionInterceptor {
    id: String,
    prefix: String,
}

impl ActionInterceptor {
    pub fn new(id: impl Into<String>, config: ActionConfig) -> Self {
        Self {
            id: id.into(),
            prefix: config
                .prefix
                .unwrap_or_else(|| DEFAULT_ACTION_PREFIX.to_string()),
        }
    }
}

impl Default for ActionInterceptor {
    fn default() -> Self {
        Self::new("action", ActionConfig::default())
    }
}

impl Interceptor<Instruction, Outcome> for ActionInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        let instruction = chain.into_item();
        tracing::debug!(interceptor_id = %self.id, "Producing outcome from instruction");
        Ok(Outcome::new(format!("{}{}", self.prefix, instruction.text)))
    }

    fn name(&self) -> &str {
        &self.id
    }
}
