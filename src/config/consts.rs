/// Prefix the `action` interceptor puts in front of the instruction text
pub const DEFAULT_ACTION_PREFIX: &str = "processed:";
/// Body returned by the `guard` interceptor when it blocks an instruction
pub const DEFAULT_BLOCKED_RESPONSE: &str = "blocked";
/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
/// File extension that selects the TOML configuration format
pub const TOML_EXTENSION: &str = "toml";
