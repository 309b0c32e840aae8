// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Local interceptors for [`Instruction`](crate::model::Instruction) /
//! [`Outcome`](crate::model::Outcome) chains.
//!
//! | type               | behavior |
//! |--------------------|----------|
//! | `log`              | logs the instruction and the outcome, forwards unchanged |
//! | `change_text_case` | rewrites the text (`upper`, `lower`, `proper`, `title`) |
//! | `prefix_suffix`    | wraps the text in a prefix and/or suffix |
//! | `guard`            | short-circuits instructions containing a blocked term |
//! | `reject`           | fails the dispatch on empty text |
//! | `timing`           | stamps the outcome with the downstream time |
//! | `action`           | terminal; produces `prefix + text` |
//!
//! All of them are built from configuration by [`LocalInterceptorFactory`].
//!
//! # Example
//! ```rust
//! use interceptor_chain::interceptors::default_interceptors;
//! use interceptor_chain::engine::dispatch;
//! use interceptor_chain::model::{Instruction, Outcome};
//!
//! let outcome = dispatch(&default_interceptors(), Instruction::new("X")).unwrap();
//! assert_eq!(outcome, Outcome::new("processed:X"));
//! ```

use std::sync::Arc;

use crate::engine::Chain;
use crate::model::{Instruction, Outcome};
use crate::traits::SharedInterceptor;

pub mod action;
pub mod change_text_case;
pub mod factory;
pub mod guard;
pub mod log;
pub mod prefix_suffix_adder;
pub mod reject_empty;
#[cfg(test)]
pub mod stub;
pub mod timing;

pub use action::*;
pub use change_text_case::*;
pub use factory::LocalInterceptorFactory;
pub use guard::*;
pub use log::*;
pub use prefix_suffix_adder::*;
pub use reject_empty::*;
pub use timing::*;

/// The cursor type every local interceptor receives.
pub type InstructionChain<'a> = Chain<'a, Instruction, Outcome>;

/// The fixed two-step chain: log, then act.
pub fn default_interceptors() -> Vec<SharedInterceptor<Instruction, Outcome>> {
    vec![
        Arc::new(LogInterceptor::default()),
        Arc::new(ActionInterceptor::default()),
    ]
}
