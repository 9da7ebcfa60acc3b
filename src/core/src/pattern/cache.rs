//! Pattern cache with TTL expiry and ancestor chain memoization
//!
//! Compiling a pattern is cheap but not free, and a rule checker asks the same
//! handful of patterns about thousands of modules. [`PatternCache`] keeps one
//! compiled expression per distinct pattern and one ancestor chain per module.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

use super::compiler::{compile_pattern, MatchExpression};
use crate::module::Module;

/// Default cache TTL (60 seconds)
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Default maximum number of entries per cache
const DEFAULT_MAX_ENTRIES: usize = 10_000;

const EXPRESSION_HITS: &str = "expression_hits";
const EXPRESSION_MISSES: &str = "expression_misses";
const EXPRESSION_EXPIRATIONS: &str = "expression_expirations";
const ANCESTOR_HITS: &str = "ancestor_hits";
const ANCESTOR_MISSES: &str = "ancestor_misses";
const ANCESTOR_EXPIRATIONS: &str = "ancestor_expirations";

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for cached entries
    pub ttl: Duration,

    /// Maximum number of entries held by each cache
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Cache entry with TTL
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    created_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }

    /// Returns the value if not expired
    fn live(&self) -> Option<&T> {
        if self.is_expired() {
            None
        } else {
            Some(&self.value)
        }
    }
}

/// Statistics about cache performance
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Number of expired entries encountered
    pub expirations: usize,
    /// Total number of entries in cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoizes compiled patterns and ancestor chains
///
/// All methods take `&self`; share the cache behind an [`Arc`] to use it from
/// several threads.
///
/// # Examples
///
/// ```
/// use depcheck_core::{Module, PatternCache};
///
/// let cache = PatternCache::new();
/// let pattern = Module::new("toto.*");
///
/// assert!(cache.matches(&pattern, "toto.tata"));
/// assert!(cache.matches(&pattern, "toto.titi"));
/// assert_eq!(cache.stats().hits, 1);
///
/// let chain = cache.ancestors(&Module::new("toto.tata.titi"));
/// assert_eq!(chain, vec![Module::new("toto.tata"), Module::new("toto"), Module::root()]);
/// ```
pub struct PatternCache {
    /// Compiled expressions keyed by pattern
    expression_cache: Arc<DashMap<Module, CacheEntry<Arc<MatchExpression>>>>,
    /// Ancestor chains keyed by module
    ancestor_cache: Arc<DashMap<Module, CacheEntry<Vec<Module>>>>,
    config: CacheConfig,
    stats: Arc<DashMap<&'static str, usize>>,
}

impl PatternCache {
    /// Creates a new cache with the default configuration
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a new cache with a custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_config(CacheConfig {
            ttl,
            ..CacheConfig::default()
        })
    }

    /// Creates a new cache from a full configuration
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            expression_cache: Arc::new(DashMap::new()),
            ancestor_cache: Arc::new(DashMap::new()),
            config,
            stats: Arc::new(DashMap::new()),
        }
    }

    /// Returns the compiled expression for `pattern`, compiling it on a miss
    pub fn compile(&self, pattern: &Module) -> Arc<MatchExpression> {
        let cached = self
            .expression_cache
            .get(pattern)
            .map(|entry| entry.live().cloned());

        match cached {
            Some(Some(expr)) => {
                self.increment_stat(EXPRESSION_HITS);
                return expr;
            }
            Some(None) => self.increment_stat(EXPRESSION_EXPIRATIONS),
            None => self.increment_stat(EXPRESSION_MISSES),
        }

        let expr = Arc::new(compile_pattern(pattern));
        self.insert_bounded(&self.expression_cache, pattern, Arc::clone(&expr));

        expr
    }

    /// Checks if `candidate` matches `pattern`
    ///
    /// The empty pattern matches nothing.
    pub fn matches(&self, pattern: &Module, candidate: &str) -> bool {
        self.compile(pattern).matches(candidate)
    }

    /// Checks if `candidate` matches any of `patterns`
    pub fn matches_any(&self, patterns: &[Module], candidate: &str) -> bool {
        patterns
            .iter()
            .any(|pattern| self.matches(pattern, candidate))
    }

    /// Checks if `candidate` matches every one of `patterns`
    pub fn matches_all(&self, patterns: &[Module], candidate: &str) -> bool {
        patterns
            .iter()
            .all(|pattern| self.matches(pattern, candidate))
    }

    /// Returns the modules in `candidates` matching `pattern`, in order
    pub fn filter_matching(&self, pattern: &Module, candidates: &[Module]) -> Vec<Module> {
        let expr = self.compile(pattern);

        candidates
            .iter()
            .filter(|candidate| expr.matches(candidate.as_str()))
            .cloned()
            .collect()
    }

    /// Returns the enclosing packages of `module`, nearest first
    ///
    /// `toto.tata.titi` gives `[toto.tata, toto, ""]`; the root gives `[]`.
    pub fn ancestors(&self, module: &Module) -> Vec<Module> {
        let cached = self
            .ancestor_cache
            .get(module)
            .map(|entry| entry.live().cloned());

        match cached {
            Some(Some(chain)) => {
                self.increment_stat(ANCESTOR_HITS);
                return chain;
            }
            Some(None) => self.increment_stat(ANCESTOR_EXPIRATIONS),
            None => self.increment_stat(ANCESTOR_MISSES),
        }

        let chain: Vec<Module> = module.ancestors().collect();
        self.insert_bounded(&self.ancestor_cache, module, chain.clone());

        chain
    }

    /// Checks if `pattern` matches `module` or any package enclosing it
    ///
    /// The root is never tested, so the empty path cannot satisfy a rule.
    pub fn matches_self_or_ancestor(&self, pattern: &Module, module: &Module) -> bool {
        if module.is_empty() {
            return false;
        }

        let expr = self.compile(pattern);
        if expr.matches(module.as_str()) {
            return true;
        }

        self.ancestors(module)
            .iter()
            .filter(|ancestor| !ancestor.is_empty())
            .any(|ancestor| expr.matches(ancestor.as_str()))
    }

    /// Clears both caches and the statistics
    pub fn clear_cache(&self) {
        self.expression_cache.clear();
        self.ancestor_cache.clear();
        self.stats.clear();
    }

    /// Removes expired entries from both caches
    pub fn cleanup_expired(&self) {
        self.expression_cache.retain(|_, entry| !entry.is_expired());
        self.ancestor_cache.retain(|_, entry| !entry.is_expired());
    }

    /// Returns cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.get_stat(EXPRESSION_HITS) + self.get_stat(ANCESTOR_HITS),
            misses: self.get_stat(EXPRESSION_MISSES) + self.get_stat(ANCESTOR_MISSES),
            expirations: self.get_stat(EXPRESSION_EXPIRATIONS)
                + self.get_stat(ANCESTOR_EXPIRATIONS),
            entries: self.expression_cache.len() + self.ancestor_cache.len(),
        }
    }

    /// Resets cache statistics
    pub fn reset_stats(&self) {
        self.stats.clear();
    }

    /// Returns the current cache TTL
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Returns the cache configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the number of entries in the expression cache
    pub fn expression_cache_size(&self) -> usize {
        self.expression_cache.len()
    }

    /// Returns the number of entries in the ancestor cache
    pub fn ancestor_cache_size(&self) -> usize {
        self.ancestor_cache.len()
    }

    /// Inserts unless the cache is full of live entries
    fn insert_bounded<T>(&self, cache: &DashMap<Module, CacheEntry<T>>, key: &Module, value: T) {
        if cache.len() >= self.config.max_entries && !cache.contains_key(key) {
            cache.retain(|_, entry| !entry.is_expired());

            if cache.len() >= self.config.max_entries {
                debug!(
                    "Cache full ({} entries), not caching '{}'",
                    cache.len(),
                    key
                );
                return;
            }
        }

        cache.insert(key.clone(), CacheEntry::new(value, self.config.ttl));
    }

    fn increment_stat(&self, key: &'static str) {
        self.stats
            .entry(key)
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    fn get_stat(&self, key: &'static str) -> usize {
        self.stats.get(key).map(|v| *v).unwrap_or(0)
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
