//! # depcheck core
//!
//! Module-path primitives for the depcheck dependency-rule checker.
//!
//! ## Features
//!
//! - **Module paths** as an immutable, hashable value type
//! - **Wildcard patterns** (`?`, `*`, trailing `%`) compiled to anchored regexes
//! - **Hierarchy navigation** from a module up to the root package
//! - **Thread-safe caching** of compiled patterns and ancestor chains
//!
//! ## Example
//!
//! ```rust
//! use depcheck_core::{compile_pattern, get_parent, Module};
//!
//! let rule = compile_pattern(&Module::new("toto.tata%"));
//! assert!(rule.matches("toto.tata.titi"));
//! assert!(!rule.matches("toto.tata_123"));
//!
//! assert_eq!(get_parent(&Module::new("toto.tata")), Module::new("toto"));
//! ```

pub mod error;
pub mod module;
pub mod pattern;

// Re-export commonly used types
pub use error::{PatternError, Result};
pub use module::{get_parent, Ancestors, Module};
pub use pattern::{
    compile_pattern, wildcard_to_regex, CacheConfig, CacheStats, MatchExpression, PatternCache,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
