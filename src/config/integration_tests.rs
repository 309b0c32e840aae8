use crate::config::{load_and_validate_config, load_config, validate_interceptor_chain, RuntimeBuilder};
use crate::errors::ChainError;
use crate::interceptors::{BLOCKED_BY_KEY, ELAPSED_US_KEY};
use crate::model::{Instruction, Outcome};

/// The shipped default configuration reproduces the two-step chain
#[test]
fn test_default_yaml_dispatch() {
    let config = load_and_validate_config("configs/default.yaml").unwrap();
    assert_eq!(config.name.as_deref(), Some("default"));
    assert_eq!(config.interceptors.len(), 2);

    let dispatcher = RuntimeBuilder::from_config(&config).unwrap();
    let outcome = dispatcher.dispatch(Instruction::new("X")).unwrap();

    assert_eq!(outcome, Outcome::new("processed:X"));
}

/// The guard short-circuits before the action runs
#[test]
fn test_guarded_yaml_blocks_and_allows() {
    let config = load_and_validate_config("configs/guarded.yaml").unwrap();
    let dispatcher = RuntimeBuilder::from_config(&config).unwrap();
    assert_eq!(
        dispatcher.names(),
        vec!["timing", "audit", "non_empty", "guard", "action"]
    );

    let blocked = dispatcher
        .dispatch(Instruction::new("DROP TABLE users"))
        .unwrap();
    assert_eq!(blocked.body, "blocked");
    assert_eq!(
        blocked.metadata.get(BLOCKED_BY_KEY).map(String::as_str),
        Some("drop table")
    );
    assert!(blocked.metadata.contains_key(ELAPSED_US_KEY));

    let allowed = dispatcher.dispatch(Instruction::new("select 1")).unwrap();
    assert_eq!(allowed.body, "processed:select 1");
    assert!(allowed.metadata.contains_key(ELAPSED_US_KEY));
    assert!(!allowed.metadata.contains_key(BLOCKED_BY_KEY));
}

/// Handler failures come back out of dispatch as they were raised
#[test]
fn test_guarded_yaml_rejects_empty() {
    let config = load_and_validate_config("configs/guarded.yaml").unwrap();
    let dispatcher = RuntimeBuilder::from_config(&config).unwrap();

    let err = dispatcher.dispatch(Instruction::new("   ")).unwrap_err();
    match err {
        ChainError::InterceptorFailed { interceptor, source } => {
            assert_eq!(interceptor, "non_empty");
            assert_eq!(source.to_string(), "instruction text is empty");
        }
        other => panic!("expected InterceptorFailed, got {:?}", other),
    }
}

/// TOML configurations go through the same pipeline
#[test]
fn test_text_pipeline_toml_dispatch() {
    let config = load_and_validate_config("configs/text-pipeline.toml").unwrap();
    assert!(validate_interceptor_chain(&config).is_ok());

    let dispatcher = RuntimeBuilder::from_config(&config).unwrap();
    let outcome = dispatcher
        .dispatch(Instruction::new("the lord of the rings"))
        .unwrap();

    assert_eq!(outcome.body, "done:[The Lord of the Rings]");
}

/// Every shipped configuration loads and builds
#[test]
fn test_all_shipped_configs_build() {
    for path in [
        "configs/default.yaml",
        "configs/guarded.yaml",
        "configs/text-pipeline.toml",
    ] {
        let config = load_config(path).unwrap_or_else(|e| panic!("{}: {}", path, e));
        let dispatcher = RuntimeBuilder::from_config(&config)
            .unwrap_or_else(|e| panic!("{}: {}", path, e));
        assert!(!dispatcher.is_empty(), "{} built an empty dispatcher", path);
    }
}
