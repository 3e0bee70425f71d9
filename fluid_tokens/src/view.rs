// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only effective view over a token table and its overrides.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::InvalidMutation;
use crate::table::{TokenTable, find_entry};
use crate::value::{TokenName, TokenValue};

/// Where the effective value of a token comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenOrigin {
    /// The token exists in the original table and is not overridden.
    Original,
    /// The token exists in the original table and is overridden.
    Overridden,
    /// The token only exists because of an override.
    Dynamic,
}

/// Read-only, override-aware view of a [`TokenAccessor`](crate::TokenAccessor).
///
/// For every name, the view yields the override if one is set and the
/// original value otherwise. It never copies the original table: lookups go
/// through the override layer first and fall back to the table.
///
/// Enumeration ([`keys`](Self::keys), [`iter`](Self::iter)) yields exactly
/// the union of original and overridden names, once each, in ascending name
/// order. Override-only tokens are indistinguishable from original ones during
/// iteration; [`origin`](Self::origin) tells them apart when needed.
///
/// The view rejects writes: [`set`](Self::set) always returns
/// [`InvalidMutation`].
///
/// # Example
///
/// ```rust
/// use fluid_tokens::{TokenAccessor, TokenOrigin, TokenTableBuilder};
///
/// let mut accessor = TokenAccessor::new(
///     TokenTableBuilder::new().set("A", "1").set("B", "2").build(),
/// );
/// accessor.set_override("C", "3");
///
/// let view = accessor.tokens();
/// assert_eq!(view.keys().collect::<Vec<_>>(), ["A", "B", "C"]);
/// assert_eq!(view.get("C").and_then(|v| v.as_str()), Some("3"));
/// assert_eq!(view.origin("C"), Some(TokenOrigin::Dynamic));
/// assert!(view.set("A", "9").is_err());
/// ```
#[derive(Copy, Clone)]
pub struct TokenView<'a> {
    original: &'a TokenTable,
    overrides: &'a [(TokenName, TokenValue)],
}

impl<'a> TokenView<'a> {
    pub(crate) fn new(original: &'a TokenTable, overrides: &'a [(TokenName, TokenValue)]) -> Self {
        Self {
            original,
            overrides,
        }
    }

    #[inline]
    fn override_value(&self, name: &str) -> Option<&'a TokenValue> {
        find_entry(self.overrides, name)
            .ok()
            .map(|idx| &self.overrides[idx].1)
    }

    /// Gets the effective value of a token.
    ///
    /// Returns the override if present, else the original value, else `None`.
    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'a TokenValue> {
        self.override_value(name)
            .or_else(|| self.original.get(name))
    }

    /// Returns `true` if `name` is a known token, original or override-only.
    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.original.contains(name) || find_entry(self.overrides, name).is_ok()
    }

    /// Reports where the effective value of `name` comes from.
    ///
    /// Returns `None` for unknown tokens.
    #[must_use]
    pub fn origin(&self, name: &str) -> Option<TokenOrigin> {
        let overridden = find_entry(self.overrides, name).is_ok();
        match (self.original.contains(name), overridden) {
            (true, false) => Some(TokenOrigin::Original),
            (true, true) => Some(TokenOrigin::Overridden),
            (false, true) => Some(TokenOrigin::Dynamic),
            (false, false) => None,
        }
    }

    /// Rejects a direct write.
    ///
    /// The view is read-only; this always fails with [`InvalidMutation`] and
    /// leaves all state untouched. Use
    /// [`TokenAccessor::set_override`](crate::TokenAccessor::set_override).
    pub fn set(
        &self,
        name: impl Into<TokenName>,
        _value: impl Into<TokenValue>,
    ) -> Result<(), InvalidMutation> {
        Err(InvalidMutation { name: name.into() })
    }

    /// Returns the number of known tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        let dynamic = self
            .overrides
            .iter()
            .filter(|(name, _)| !self.original.contains(name))
            .count();
        self.original.len() + dynamic
    }

    /// Returns `true` if there are no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.overrides.is_empty()
    }

    /// Returns an iterator over every known token name, in ascending order.
    #[must_use]
    pub fn keys(&self) -> TokenKeys<'a> {
        TokenKeys { inner: self.iter() }
    }

    /// Returns an iterator over every token and its effective value, in
    /// ascending name order.
    #[must_use]
    pub fn iter(&self) -> TokenIter<'a> {
        TokenIter {
            original: self.original.entries(),
            overrides: self.overrides,
            original_i: 0,
            overrides_i: 0,
        }
    }

    /// Copies the current effective values into a standalone [`TokenTable`].
    ///
    /// The snapshot shares names and values with the view (both are reference
    /// counted) but is unaffected by later overrides.
    #[must_use]
    pub fn snapshot(&self) -> TokenTable {
        let mut iter = self.iter();
        let mut entries = Vec::with_capacity(self.len());
        while let Some((name, value)) = iter.next_entry() {
            entries.push((name.clone(), value.clone()));
        }
        TokenTable::from_sorted(entries)
    }
}

impl fmt::Debug for TokenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for TokenView<'a> {
    type Item = (&'a str, &'a TokenValue);
    type IntoIter = TokenIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &TokenView<'a> {
    type Item = (&'a str, &'a TokenValue);
    type IntoIter = TokenIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the effective tokens of a [`TokenView`].
///
/// Merges the sorted original entries with the sorted override entries. When
/// both layers contain a name, it is yielded once with the override value.
#[derive(Clone, Debug)]
pub struct TokenIter<'a> {
    original: &'a [(TokenName, TokenValue)],
    overrides: &'a [(TokenName, TokenValue)],
    original_i: usize,
    overrides_i: usize,
}

impl<'a> TokenIter<'a> {
    fn next_entry(&mut self) -> Option<&'a (TokenName, TokenValue)> {
        let original = self.original.get(self.original_i);
        let overridden = self.overrides.get(self.overrides_i);

        match (original, overridden) {
            (None, None) => None,
            (Some(entry), None) => {
                self.original_i += 1;
                Some(entry)
            }
            (None, Some(entry)) => {
                self.overrides_i += 1;
                Some(entry)
            }
            (Some(original), Some(overridden)) => {
                if original.0 < overridden.0 {
                    self.original_i += 1;
                    Some(original)
                } else if overridden.0 < original.0 {
                    self.overrides_i += 1;
                    Some(overridden)
                } else {
                    self.original_i += 1;
                    self.overrides_i += 1;
                    Some(overridden)
                }
            }
        }
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = (&'a str, &'a TokenValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().map(|(name, value)| (&**name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let original = self.original.len() - self.original_i;
        let overrides = self.overrides.len() - self.overrides_i;
        (original.max(overrides), Some(original + overrides))
    }
}

impl FusedIterator for TokenIter<'_> {}

/// Iterator over the token names of a [`TokenView`].
#[derive(Clone, Debug)]
pub struct TokenKeys<'a> {
    inner: TokenIter<'a>,
}

impl<'a> Iterator for TokenKeys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, _)| name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for TokenKeys<'_> {}
