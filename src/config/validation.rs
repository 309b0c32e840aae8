//! Configuration validation for interceptor chains.
//!
//! Checks run in a fixed order and accumulate, so a broken configuration
//! reports every problem at once:
//!
//! 1. **Non-empty**: at least one interceptor is declared
//! 2. **Uniqueness**: interceptor IDs are unique
//! 3. **Known types**: every `type` has a local implementation
//! 4. **Terminal placement** (warnings): a terminal interceptor is the last
//!    one, and there is one at all
//!
//! Warnings describe chains that load and run but probably do not do what the
//! author meant: interceptors after a terminal one can never run, and a chain
//! with no terminal fails every dispatch that nothing short-circuits with
//! `ChainExhausted`.
//!
//! # Examples
//!
//! ```rust
//! use interceptor_chain::config::{parse_config, validate_interceptor_chain, ConfigFormat};
//! use interceptor_chain::errors::ValidationError;
//!
//! let config = parse_config(
//!     r#"
//! interceptors:
//!   - id: audit
//!     type: log
//!   - id: audit
//!     type: action
//! "#,
//!     ConfigFormat::Yaml,
//! )
//! .unwrap();
//!
//! let errors = validate_interceptor_chain(&config).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::DuplicateInterceptorId { interceptor_id: "audit".to_string() }]
//! );
//! ```

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::interceptors::LocalInterceptorFactory;
use crate::observability::messages::{validation::*, StructuredLog};

/// Validates a configuration, logging warnings and returning only hard errors.
///
/// # Returns
///
/// * `Ok(())` - Configuration is usable (it may still have produced warnings)
/// * `Err(Vec<ValidationError>)` - Every non-warning problem found
pub fn validate_interceptor_chain(config: &Config) -> Result<(), Vec<ValidationError>> {
    let (warnings, errors): (Vec<_>, Vec<_>) = check_interceptor_chain(config)
        .into_iter()
        .partition(ValidationError::is_warning);

    for warning in &warnings {
        log_finding(warning);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            log_finding(error);
        }
        Err(errors)
    }
}

/// Runs every check and returns all findings, warnings included, without logging.
pub fn check_interceptor_chain(config: &Config) -> Vec<ValidationError> {
    if config.interceptors.is_empty() {
        return vec![ValidationError::EmptyChain];
    }

    let mut findings = Vec::new();
    findings.extend(find_duplicate_ids(config));
    findings.extend(find_unknown_types(config));
    findings.extend(check_terminal_placement(config));
    findings
}

/// IDs double as interceptor names in logs and errors, so they must be unique.
fn find_duplicate_ids(config: &Config) -> Vec<ValidationError> {
    let mut seen_ids = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for interceptor in &config.interceptors {
        if !seen_ids.insert(interceptor.id.as_str()) && reported.insert(interceptor.id.as_str()) {
            errors.push(ValidationError::DuplicateInterceptorId {
                interceptor_id: interceptor.id.clone(),
            });
        }
    }

    errors
}

fn find_unknown_types(config: &Config) -> Vec<ValidationError> {
    config
        .interceptors
        .iter()
        .filter(|i| !LocalInterceptorFactory::is_implementation_available(&i.kind))
        .map(|i| ValidationError::UnknownInterceptorType {
            interceptor_id: i.id.clone(),
            kind: i.kind.clone(),
        })
        .collect()
}

fn check_terminal_placement(config: &Config) -> Vec<ValidationError> {
    let first_terminal = config
        .interceptors
        .iter()
        .position(|i| LocalInterceptorFactory::is_terminal(&i.kind));

    match first_terminal {
        Some(index) if index + 1 < config.interceptors.len() => {
            vec![ValidationError::UnreachableInterceptors {
                terminal: config.interceptors[index].id.clone(),
                unreachable: config.interceptors[index + 1..]
                    .iter()
                    .map(|i| i.id.clone())
                    .collect(),
            }]
        }
        Some(_) => Vec::new(),
        None => match config.interceptors.last() {
            Some(last) => vec![ValidationError::MissingTerminal {
                last: last.id.clone(),
            }],
            None => Vec::new(),
        },
    }
}

fn log_finding(finding: &ValidationError) {
    match finding {
        ValidationError::EmptyChain => EmptyChainConfigured.log(),
        ValidationError::DuplicateInterceptorId { interceptor_id } => {
            DuplicateInterceptorId { interceptor_id }.log()
        }
        ValidationError::UnknownInterceptorType {
            interceptor_id,
            kind,
        } => UnknownInterceptorType {
            interceptor_id,
            kind,
        }
        .log(),
        ValidationError::UnreachableInterceptors {
            terminal,
            unreachable,
        } => {
            let unreachable: Vec<&str> = unreachable.iter().map(String::as_str).collect();
            UnreachableInterceptors {
                terminal,
                unreachable: &unreachable,
            }
            .log()
        }
        ValidationError::MissingTerminal { last } => MissingTerminal { last }.log(),
    }
}
