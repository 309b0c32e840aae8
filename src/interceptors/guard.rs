// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::InstructionChain;
use crate::config::consts::DEFAULT_BLOCKED_RESPONSE;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::observability::messages::{interceptor::InstructionBlocked, StructuredLog};
use crate::traits::Interceptor;

/// Metadata key naming the term that tripped the guard.
pub const BLOCKED_BY_KEY: &str = "blocked_by";

/// Configuration for the Guard interceptor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub blocked: Vec<String>,
    pub response: Option<String>,
}

/// Guard interceptor - short-circuits instructions containing a blocked term
pub struct GuardInterceptor {
    id: String,
    blocked: Vec<String>,
    response: String,
}

impl GuardInterceptor {
    pub fn new(id: impl Into<String>, config: GuardConfig) -> Self {
        Self {
            id: id.into(),
            blocked: config.blocked.iter().map(|t| t.to_lowercase()).collect(),
            response: config
                .response
                .unwrap_or_else(|| DEFAULT_BLOCKED_RESPONSE.to_string()),
        }
    }

    /// The first blocked term found in `text`, compared case-insensitively.
    pub fn matching_term(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        self.blocked
            .iter()
            .find(|term| !term.is_empty() && text.contains(term.as_str()))
            .map(String::as_str)
    }
}

impl Interceptor<Instruction, Outcome> for GuardInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        if let Some(term) = self.matching_term(&chain.item().text) {
            InstructionBlocked {
                interceptor_id: &self.id,
                term,
            }
            .log();
            return Ok(Outcome::new(self.response.as_str()).with_metadata(BLOCKED_BY_KEY, term));
        }

        chain.forward()
    }

    fn name(&self) -> &str {
        &self.id
    }
}
