// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::InstructionChain;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::traits::Interceptor;

/// Which case to rewrite the instruction text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    Upper,
    Lower,
    Proper,
    Title,
}

/// Configuration for the Change Text Case interceptor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChangeTextCaseConfig {
    pub case: TextCase,
}

/// Change Text Case interceptor - rewrites the instruction text, then forwards it
pub struct ChangeTextCaseInterceptor {
    id: String,
    config: ChangeTextCaseConfig,
}

impl ChangeTextCaseInterceptor {
    pub fn new(id: impl Into<String>, config: ChangeTextCaseConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }

    pub fn upper(id: impl Into<String>) -> Self {
        Self::new(id, ChangeTextCaseConfig { case: TextCase::Upper })
    }

    pub fn lower(id: impl Into<String>) -> Self {
        Self::new(id, ChangeTextCaseConfig { case: TextCase::Lower })
    }

    pub fn proper(id: impl Into<String>) -> Self {
        Self::new(id, ChangeTextCaseConfig { case: TextCase::Proper })
    }

    pub fn title(id: impl Into<String>) -> Self {
        Self::new(id, ChangeTextCaseConfig { case: TextCase::Title })
    }

    pub fn convert(&self, input: &str) -> String {
        match self.config.case {
            TextCase::Upper => input.to_uppercase(),
            TextCase::Lower => input.to_lowercase(),
            TextCase::Proper => input
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            TextCase::Title => input
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower_word = word.to_lowercase();
                    // First word is always capitalized; small words stay lowercase after that
                    if i == 0 || !is_small_word(&lower_word) {
                        capitalize(word)
                    } else {
                        lower_word
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn is_small_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an" | "the" | "and" | "or" | "but" | "in" | "on" | "at" | "to" | "for" | "of" | "with" | "by"
    )
}

impl Interceptor<Instruction, Outcome> for ChangeTextCaseInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        let converted = chain.item().with_text(self.convert(&chain.item().text));
        tracing::debug!(interceptor_id = %self.id, case = ?self.config.case, "Changed instruction text case");
        chain.proceed(converted)
    }

    fn name(&self) -> &str {
        &self.id
    }
}
