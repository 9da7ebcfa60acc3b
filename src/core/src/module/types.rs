//! Module path value type

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Segment separator in a module path
pub(crate) const SEPARATOR: char = '.';

/// A dotted module path such as `pkg.sub.util`
///
/// The same type carries concrete paths and wildcard patterns (`pkg.sub*`,
/// `pkg.util%`). The empty path is the root: it stands for "no module" and is
/// its own parent.
///
/// Equality, ordering and hashing are those of the underlying string, so a
/// `HashMap<Module, _>` can be queried with a plain `&str`.
///
/// # Examples
///
/// ```
/// use depcheck_core::Module;
///
/// let module = Module::new("toto.tata");
/// assert_eq!(module.depth(), 2);
/// assert_eq!(module.segments().collect::<Vec<_>>(), vec!["toto", "tata"]);
/// assert!(Module::new("toto").is_parent_of(&module));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Module {
    path: String,
}

impl Module {
    /// Creates a module from its dotted path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the root (empty) module
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the raw dotted path
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Returns whether this is the root module
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the segments of this path, none for the root
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        let path = (!self.path.is_empty()).then_some(self.path.as_str());
        path.into_iter().flat_map(|p| p.split(SEPARATOR))
    }

    /// Returns the number of segments (0 for the root)
    pub fn depth(&self) -> usize {
        if self.path.is_empty() {
            0
        } else {
            self.path.matches(SEPARATOR).count() + 1
        }
    }

    /// Returns whether this module uses any wildcard operator
    pub fn has_wildcards(&self) -> bool {
        self.path.contains(['?', '*']) || self.path.ends_with('%')
    }

    /// Returns the immediate enclosing package
    ///
    /// See [`get_parent`](crate::module::get_parent).
    pub fn parent(&self) -> Self {
        super::get_parent(self)
    }

    /// Iterates over the enclosing packages, nearest first, ending at the root
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: (!self.is_empty()).then(|| self.parent()),
        }
    }

    /// Returns the child module named `segment`
    pub fn join(&self, segment: &str) -> Self {
        if self.path.is_empty() {
            Self::new(segment)
        } else {
            Self::new(format!("{}{}{}", self.path, SEPARATOR, segment))
        }
    }

    /// Checks if this module is the immediate parent of `other`
    pub fn is_parent_of(&self, other: &Module) -> bool {
        !other.is_empty() && other.parent() == *self
    }

    /// Checks if this module is the immediate child of `other`
    pub fn is_child_of(&self, other: &Module) -> bool {
        other.is_parent_of(self)
    }

    /// Checks if `other` is nested anywhere below this module
    ///
    /// The root is an ancestor of every other module; no module is its own
    /// ancestor.
    pub fn is_ancestor_of(&self, other: &Module) -> bool {
        if other.is_empty() {
            return false;
        }
        if self.is_empty() {
            return true;
        }

        other
            .path
            .strip_prefix(self.path.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }

    /// Checks if this module is nested anywhere below `other`
    pub fn is_descendant_of(&self, other: &Module) -> bool {
        other.is_ancestor_of(self)
    }
}

/// Iterator over the enclosing packages of a module
///
/// Created by [`Module::ancestors`]. Yields at most `depth()` items and always
/// ends with the root.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<Module>,
}

impl Iterator for Ancestors {
    type Item = Module;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !current.is_empty() {
            self.next = Some(current.parent());
        }
        Some(current)
    }
}

impl FromStr for Module {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Module {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Module {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<Module> for String {
    fn from(module: Module) -> Self {
        module.path
    }
}

impl AsRef<str> for Module {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl Borrow<str> for Module {
    fn borrow(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
