//! Dotted module paths and hierarchy navigation
//!
//! A [`Module`] is the value every other part of depcheck exchanges: concrete
//! import targets, configured rule patterns, and the packages enclosing them.
//!
//! # Examples
//!
//! ```
//! use depcheck_core::module::{get_parent, Module};
//!
//! let module = Module::new("toto.titi.tete.tata");
//! assert_eq!(get_parent(&module), Module::new("toto.titi.tete"));
//! assert_eq!(module.ancestors().count(), 4);
//! ```

mod types;

#[cfg(test)]
mod tests;

pub use types::{Ancestors, Module};

/// Returns the immediate enclosing package of `module`
///
/// Drops the last segment together with its separator. A module without any
/// `.` (a top-level package or the root itself) has the root as its parent.
pub fn get_parent(module: &Module) -> Module {
    match module.as_str().rfind('.') {
        Some(idx) => Module::new(&module.as_str()[..idx]),
        None => Module::root(),
    }
}
