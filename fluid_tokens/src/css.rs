// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS custom property naming.
//!
//! Token names map to custom property names by lower-casing, replacing `_`
//! with `-` and prepending [`CSS_PROPERTY_PREFIX`]. The mapping is
//! collision-free for `UPPER_SNAKE_CASE` names.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;

/// Prefix of every generated custom property name.
pub const CSS_PROPERTY_PREFIX: &str = "--";

/// Derives the CSS custom property name for a token name.
///
/// This is the uncached transform; [`CssNameCache`] memoizes it.
///
/// ```rust
/// use fluid_tokens::css_property_name;
///
/// assert_eq!(css_property_name("FLUID_SPACING_SMALL"), "--fluid-spacing-small");
/// ```
#[must_use]
pub fn css_property_name(token_name: &str) -> String {
    let mut out = String::with_capacity(CSS_PROPERTY_PREFIX.len() + token_name.len());
    out.push_str(CSS_PROPERTY_PREFIX);
    for ch in token_name.chars() {
        if ch == '_' {
            out.push('-');
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Memoized token name to custom property name mapping.
///
/// Each distinct token name is transformed once; later lookups hand out the
/// same `Rc<str>` allocation. Entries are never evicted since the token name
/// space is small and static.
///
/// The cache uses interior mutability so that lookups only need `&self`. It is
/// meant to be shared between accessors on the same thread through an `Rc`.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use fluid_tokens::CssNameCache;
///
/// let cache = CssNameCache::new();
/// let first = cache.get("FLUID_SPACING_SMALL");
/// let second = cache.get("FLUID_SPACING_SMALL");
///
/// assert_eq!(&*first, "--fluid-spacing-small");
/// assert!(Rc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Default)]
pub struct CssNameCache {
    names: RefCell<HashMap<Rc<str>, Rc<str>>>,
}

impl CssNameCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the custom property name for `token_name`, computing it on first use.
    pub fn get(&self, token_name: &str) -> Rc<str> {
        if let Some(cached) = self.names.borrow().get(token_name) {
            return cached.clone();
        }
        let computed: Rc<str> = css_property_name(token_name).into();
        self.names
            .borrow_mut()
            .insert(token_name.into(), computed.clone());
        computed
    }

    /// Returns the number of cached names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }
}

impl fmt::Debug for CssNameCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CssNameCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(css_property_name("FLUID_COLOR_TEXT"), "--fluid-color-text");
        assert_eq!(css_property_name("A"), "--a");
        assert_eq!(css_property_name(""), "--");
    }

    #[test]
    fn repeated_underscores_are_kept_apart() {
        assert_eq!(css_property_name("A__B_"), "--a--b-");
    }

    #[test]
    fn cache_returns_same_allocation() {
        let cache = CssNameCache::new();
        assert!(cache.is_empty());

        let a = cache.get("FLUID_SPACING_SMALL");
        let b = cache.get("FLUID_SPACING_SMALL");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache.get("FLUID_SPACING_LARGE");
        assert_eq!(&*c, "--fluid-spacing-large");
        assert_eq!(cache.len(), 2);
    }
}
