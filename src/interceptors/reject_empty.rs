// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::InstructionChain;
use crate::errors::ChainError;
use crate::model::{Instruction, Outcome};
use crate::observability::messages::{interceptor::InstructionRejected, StructuredLog};
use crate::traits::Interceptor;

const EMPTY_TEXT_REASON: &str = "instruction text is empty";

/// Reject Empty interceptor - fails the dispatch when the instruction has no text
pub struct RejectEmptyInterceptor {
    id: String,
}

impl RejectEmptyInterceptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Interceptor<Instruction, Outcome> for RejectEmptyInterceptor {
    fn intercept(&self, chain: InstructionChain<'_>) -> Result<Outcome, ChainError> {
        if chain.item().text.trim().is_empty() {
            InstructionRejected {
                interceptor_id: &self.id,
                reason: EMPTY_TEXT_REASON,
            }
            .log();
            return Err(ChainError::interceptor(
                self.id.as_str(),
                anyhow::anyhow!(EMPTY_TEXT_REASON),
            ));
        }

        chain.forward()
    }

    fn name(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dispatch;
    use crate::interceptors::stub::ProbeInterceptor;
    use crate::interceptors::ActionInterceptor;
    use crate::traits::SharedInterceptor;
    use std::sync::{Arc, Mutex};

    fn chain_with_probe() -> (Vec<SharedInterceptor<Instruction, Outcome>>, Arc<ProbeInterceptor>) {
        let call_log = Arc::new(Mutex::new(Vec::new()));
        let after = Arc::new(ProbeInterceptor::new("after", &call_log));
        let interceptors: Vec<SharedInterceptor<Instruction, Outcome>> = vec![
            Arc::new(RejectEmptyInterceptor::new("non_empty")),
            after.clone(),
            Arc::new(ActionInterceptor::default()),
        ];
        (interceptors, after)
    }

    #[test]
    fn test_rejects_blank_text() {
        for text in ["", "   ", "\t\n "] {
            let (interceptors, after) = chain_with_probe();

            match dispatch(&interceptors, Instruction::new(text)).unwrap_err() {
                ChainError::InterceptorFailed { interceptor, source } => {
                    assert_eq!(interceptor, "non_empty");
                    assert_eq!(source.to_string(), EMPTY_TEXT_REASON);
                }
                other => panic!("expected InterceptorFailed for {:?}, got {:?}", text, other),
            }
            assert_eq!(after.call_count(), 0, "text {:?} should not reach downstream", text);
        }
    }

    #[test]
    fn test_forwards_non_empty_text() {
        let (interceptors, after) = chain_with_probe();

        let outcome = dispatch(&interceptors, Instruction::new(" x ")).unwrap();

        assert_eq!(outcome.body, "processed: x ");
        assert_eq!(after.call_count(), 1);
    }
}
