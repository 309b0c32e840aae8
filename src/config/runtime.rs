use crate::config::Config;
use crate::engine::Dispatcher;
use crate::errors::InterceptorMapError;
use crate::interceptors::LocalInterceptorFactory;
use crate::model::{Instruction, Outcome};
use crate::observability::messages::{interceptor::InterceptorInstantiationFailed, StructuredLog};

/// Builds runtime components from configuration
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a dispatcher whose interceptors run in configuration order.
    ///
    /// Fails on the first interceptor that cannot be built.
    pub fn from_config(cfg: &Config) -> Result<Dispatcher<Instruction, Outcome>, InterceptorMapError> {
        let mut builder = Dispatcher::builder();

        for interceptor_config in &cfg.interceptors {
            match LocalInterceptorFactory::create_interceptor(interceptor_config) {
                Ok(interceptor) => builder = builder.with_shared(interceptor),
                Err(e) => {
                    InterceptorInstantiationFailed {
                        interceptor_id: &interceptor_config.id,
                        kind: &interceptor_config.kind,
                        reason: &e.to_string(),
                    }
                    .log();
                    return Err(e);
                }
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterceptorConfig;
    use std::collections::HashMap;

    fn interceptor(id: &str, kind: &str) -> InterceptorConfig {
        InterceptorConfig {
            id: id.to_string(),
            kind: kind.to_string(),
            options: HashMap::new(),
        }
    }

    #[test]
    fn test_from_config_table_driven() {
        struct TestCase {
            name: &'static str,
            config: Config,
            expected_names: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty config",
                config: Config {
                    name: None,
                    interceptors: vec![],
                },
                expected_names: vec![],
            },
            TestCase {
                name: "single action",
                config: Config {
                    name: None,
                    interceptors: vec![interceptor("act", "action")],
                },
                expected_names: vec!["act"],
            },
            TestCase {
                name: "order is preserved",
                config: Config {
                    name: Some("ordered".to_string()),
                    interceptors: vec![
                        interceptor("timing", "timing"),
                        interceptor("audit", "log"),
                        interceptor("non_empty", "reject"),
                        interceptor("act", "action"),
                    ],
                },
                expected_names: vec!["timing", "audit", "non_empty", "act"],
            },
        ];

        for test_case in test_cases {
            let dispatcher = RuntimeBuilder::from_config(&test_case.config)
                .unwrap_or_else(|e| panic!("Test case '{}' failed: {}", test_case.name, e));
            assert_eq!(
                dispatcher.names(),
                test_case.expected_names,
                "Test case '{}' failed",
                test_case.name
            );
        }
    }

    #[test]
    fn test_from_config_unknown_type_fails() {
        let config = Config {
            name: None,
            interceptors: vec![interceptor("audit", "log"), interceptor("x", "teleport")],
        };

        let result = RuntimeBuilder::from_config(&config);
        assert!(matches!(
            result,
            Err(InterceptorMapError::UnknownImplementation { ref kind, .. }) if kind == "teleport"
        ));
    }
}
