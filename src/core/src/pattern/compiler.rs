//! Translation of wildcard patterns into anchored regular expressions

use std::fmt;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::{PatternError, Result};
use crate::module::Module;

/// Marks a prefix-or-descendant pattern when it ends the pattern
const DESCENDANT_MARKER: char = '%';

/// Upper bound on the compiled program size (the regex crate default)
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Translates a wildcard pattern into the text of an anchored regex
///
/// The empty pattern translates to the empty string. Callers must treat it as
/// an absent pattern rather than compile it into a match-everything regex;
/// [`compile_pattern`] does exactly that.
///
/// # Examples
///
/// ```
/// use depcheck_core::{wildcard_to_regex, Module};
///
/// assert_eq!(wildcard_to_regex(&Module::new("")), "");
/// assert_eq!(wildcard_to_regex(&Module::new("toto.t?ta")), r"(?s)^toto\.t.ta$");
/// assert_eq!(
///     wildcard_to_regex(&Module::new("toto%")),
///     r"(?s)^(?:toto|toto\..*)$"
/// );
/// ```
pub fn wildcard_to_regex(module: &Module) -> String {
    let pattern = module.as_str();
    if pattern.is_empty() {
        return String::new();
    }

    match pattern.strip_suffix(DESCENDANT_MARKER) {
        Some(prefix) => {
            let body = translate(prefix);
            format!(r"(?s)^(?:{body}|{body}\..*)$")
        }
        None => format!("(?s)^{}$", translate(pattern)),
    }
}

/// Rewrites `?` and `*` and escapes every run of literal characters
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut literal = String::new();

    for c in pattern.chars() {
        let token = match c {
            '?' => ".",
            '*' => ".*",
            _ => {
                literal.push(c);
                continue;
            }
        };

        out.push_str(&regex::escape(&literal));
        literal.clear();
        out.push_str(token);
    }
    out.push_str(&regex::escape(&literal));

    out
}

/// Compiles a wildcard pattern into a [`MatchExpression`]
///
/// Never fails. If the regex engine rejects the translation the failure is
/// logged and the returned expression matches nothing.
pub fn compile_pattern(module: &Module) -> MatchExpression {
    compile_with_limit(module, REGEX_SIZE_LIMIT)
}

fn compile_with_limit(module: &Module, size_limit: usize) -> MatchExpression {
    match MatchExpression::build(module, size_limit) {
        Ok(expr) => {
            debug!("Compiled pattern '{}' to '{}'", module, expr.as_str());
            expr
        }
        Err(e) => {
            warn!("{}; pattern will never match", e);
            MatchExpression::never(module)
        }
    }
}

/// A compiled module pattern
///
/// Cheap to clone and safe to share between threads. An expression built from
/// the empty pattern never matches.
#[derive(Debug, Clone)]
pub struct MatchExpression {
    /// Source pattern
    pattern: Module,
    /// Regex text produced by [`wildcard_to_regex`]
    source: String,
    /// Compiled matcher, absent for the empty pattern
    regex: Option<Regex>,
}

impl MatchExpression {
    /// Compiles `pattern`, surfacing regex engine failures
    pub fn try_new(pattern: &Module) -> Result<Self> {
        Self::build(pattern, REGEX_SIZE_LIMIT)
    }

    fn build(pattern: &Module, size_limit: usize) -> Result<Self> {
        let source = wildcard_to_regex(pattern);
        let regex = if source.is_empty() {
            None
        } else {
            let regex = RegexBuilder::new(&source)
                .size_limit(size_limit)
                .build()
                .map_err(|e| PatternError::Compile {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
            Some(regex)
        };

        Ok(Self {
            pattern: pattern.clone(),
            source,
            regex,
        })
    }

    fn never(pattern: &Module) -> Self {
        Self {
            pattern: pattern.clone(),
            source: wildcard_to_regex(pattern),
            regex: None,
        }
    }

    /// Checks whether `candidate` matches the whole pattern
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(candidate))
    }

    /// Returns the pattern this expression was compiled from
    pub fn pattern(&self) -> &Module {
        &self.pattern
    }

    /// Returns the regex text
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether this expression comes from the empty pattern
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl fmt::Display for MatchExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
