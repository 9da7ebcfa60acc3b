//! Wildcard patterns over module paths
//!
//! Rule patterns are written as [`Module`](crate::Module) values using three
//! operators:
//!
//! - `?` matches exactly one character of any kind, `.` included
//! - `*` matches any run of characters, crossing segment boundaries
//! - a trailing `%` matches the prefix itself or anything nested under it
//!
//! Every other character is literal, and matching always covers the whole
//! candidate.
//!
//! # Examples
//!
//! ```
//! use depcheck_core::{compile_pattern, Module, PatternCache};
//!
//! let expr = compile_pattern(&Module::new("toto*.*"));
//! assert!(expr.matches("toto_azerty.titi.toto.tata"));
//! assert!(!expr.matches("tototata"));
//!
//! let cache = PatternCache::new();
//! assert!(cache.matches(&Module::new("toto.tata%"), "toto.tata.titi"));
//! ```

mod cache;
mod compiler;


pub use cache::{CacheConfig, CacheStats, PatternCache};
pub use compiler::{compile_pattern, wildcard_to_regex, MatchExpression};
