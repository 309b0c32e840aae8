// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::InstructionChain;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::traits::Interceptor;

/// Configuration for the Prefix/Suffix Adder interceptor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PrefixSuffixConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Prefix/Suffix Adder interceptor - wraps the instruction text before forwarding it
pub struct PrefixSuffixAdderInterceptor {
    id: String,
    config: PrefixSuffixConfig,
}

impl PrefixSuffixAdderInterceptor {
    pub fn new(id: impl Into<String>, config: PrefixSuffixConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }

    fn wrap(&self, input: &str) -> String {
        let mut result = String::new();

        if let Some(prefix) = &self.config.prefix {
            result.push_str(prefix);
        }

        result.push_str(input);

        if let Some(suffix) = &self.config.suffix {
            result.push_str(suffix);
        }

        result
    }
}

impl Interceptor<Instruction, Outcome> for PrefixSuffixAdderInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        let wrapped = chain.item().with_text(self.wrap(&chain.item().text));
        chain.proceed(wrapped)
    }

    fn name(&self) -> &str {
        &self.id
    }
}
