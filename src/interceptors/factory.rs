use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::sync::Arc;

use super::*;
use crate::config::InterceptorConfig;
use crate::errors::InterceptorMapError;
use crate::model::{Instruction, Outcome};
use crate::traits::SharedInterceptor;

/// Interceptor types that never call `proceed`.
const TERMINAL_IMPLEMENTATIONS: &[&str] = &["action"];

/// Factory for creating local (in-process) interceptor instances
pub struct LocalInterceptorFactory;

impl LocalInterceptorFactory {
    /// Create an interceptor instance from configuration
    ///
    /// The `type` field in the config determines which interceptor to create:
    /// - "log" -> LogInterceptor
    /// - "change_text_case" -> ChangeTextCaseInterceptor (requires `case`)
    /// - "prefix_suffix" -> PrefixSuffixAdderInterceptor (optional `prefix`, `suffix`)
    /// - "guard" -> GuardInterceptor (optional `blocked`, `response`)
    /// - "reject" -> RejectEmptyInterceptor
    /// - "timing" -> TimingInterceptor
    /// - "action" -> ActionInterceptor (optional `prefix`)
    pub fn create_interceptor(
        config: &InterceptorConfig,
    ) -> Result<SharedInterceptor<Instruction, Outcome>, InterceptorMapError> {
        let id = config.id.clone();

        match config.kind.as_str() {
            "log" => Ok(Arc::new(LogInterceptor::new(id))),
            "change_text_case" => Ok(Arc::new(ChangeTextCaseInterceptor::new(
                id,
                decode_options(config)?,
            ))),
            "prefix_suffix" => Ok(Arc::new(PrefixSuffixAdderInterceptor::new(
                id,
                decode_options(config)?,
            ))),
            "guard" => Ok(Arc::new(GuardInterceptor::new(id, decode_options(config)?))),
            "reject" => Ok(Arc::new(RejectEmptyInterceptor::new(id))),
            "timing" => Ok(Arc::new(TimingInterceptor::new(id))),
            "action" => Ok(Arc::new(ActionInterceptor::new(id, decode_options(config)?))),

            // Add more interceptors here as they're implemented
            _ => Err(InterceptorMapError::UnknownImplementation {
                interceptor_id: config.id.clone(),
                kind: config.kind.clone(),
            }),
        }
    }

    /// List all available local interceptor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "log",
            "change_text_case",
            "prefix_suffix",
            "guard",
            "reject",
            "timing",
            "action",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(kind: &str) -> bool {
        Self::list_available_implementations().contains(&kind)
    }

    /// Whether interceptors of this type end every traversal that reaches them
    pub fn is_terminal(kind: &str) -> bool {
        TERMINAL_IMPLEMENTATIONS.contains(&kind)
    }
}

/// Decode the `options` block into the interceptor's typed configuration.
fn decode_options<T: DeserializeOwned>(config: &InterceptorConfig) -> Result<T, InterceptorMapError> {
    let mapping: Mapping = config
        .options
        .iter()
        .map(|(key, value)| (Value::String(key.clone()), value.clone()))
        .collect();

    serde_yaml::from_value(Value::Mapping(mapping)).map_err(|e| InterceptorMapError::InvalidOptions {
        interceptor_id: config.id.clone(),
        reason: e.to_string(),
    })
}
