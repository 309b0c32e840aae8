// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The instruction / outcome pair the bundled interceptors work on.
//!
//! The chain itself is generic over both; these are just the concrete payloads
//! used by the local interceptors, the configuration layer and the binary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A unit of work flowing down the chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Instruction {
    pub text: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Instruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// A copy of this instruction carrying `text` and the same metadata.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: self.metadata.clone(),
        }
    }
}

impl From<&str> for Instruction {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Instruction {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// What comes back up the chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    pub body: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Outcome {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
