// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable token tables.
//!
//! This module provides [`TokenTable`], the static source of design token
//! values, and [`TokenTableBuilder`] for constructing it.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::value::{TokenName, TokenValue};

/// An immutable mapping from token names to [`TokenValue`]s.
///
/// Tables are the static layer underneath a
/// [`TokenAccessor`](crate::TokenAccessor). Once built they cannot be changed
/// through any reference, and neither can the groups nested inside them: there
/// is no mutating API on either type.
///
/// # Memory Layout
///
/// Internally, `TokenTable` wraps an `Rc<TableData>`, making cloning cheap.
/// Entries are stored in a vector sorted by name for O(log n) lookup.
///
/// # Example
///
/// ```rust
/// use fluid_tokens::{TokenTable, TokenTableBuilder};
///
/// let tokens = TokenTableBuilder::new()
///     .set("FLUID_SPACING_SMALL", "8px")
///     .set("FLUID_LAYOUT_DENSE", 0.5)
///     .build();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(
///     tokens.get("FLUID_SPACING_SMALL").and_then(|v| v.as_str()),
///     Some("8px")
/// );
/// assert!(!tokens.contains("FLUID_SPACING_HUGE"));
/// ```
#[derive(Clone, Default)]
pub struct TokenTable {
    inner: Rc<TableData>,
}

#[derive(Default)]
struct TableData {
    /// Sorted by name for binary search lookup.
    entries: Vec<(TokenName, TokenValue)>,
}

impl TokenTable {
    /// Returns `true` if this table has no tokens.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Returns the number of tokens in this table.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    #[inline]
    fn find(&self, name: &str) -> Result<usize, usize> {
        find_entry(&self.inner.entries, name)
    }

    /// Gets the value of a token, if present.
    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.find(name).ok().map(|idx| &self.inner.entries[idx].1)
    }

    /// Returns `true` if this table has a token with the given name.
    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    /// Returns an iterator over the token names, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.entries.iter().map(|(name, _)| &**name)
    }

    /// Returns an iterator over the tokens, in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> + '_ {
        self.inner.entries.iter().map(|(name, value)| (&**name, value))
    }

    /// Returns `true` if both tables share the same storage.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The sorted entries, for merging with other sorted layers.
    #[inline]
    pub(crate) fn entries(&self) -> &[(TokenName, TokenValue)] {
        &self.inner.entries
    }

    /// Wraps entries that are already sorted by name and free of duplicates.
    pub(crate) fn from_sorted(entries: Vec<(TokenName, TokenValue)>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].0 < w[1].0),
            "entries must be sorted and unique"
        );
        Self {
            inner: Rc::new(TableData { entries }),
        }
    }

    /// Looks up the stored name so callers can share its allocation.
    #[inline]
    pub(crate) fn name(&self, name: &str) -> Option<&TokenName> {
        self.find(name).ok().map(|idx| &self.inner.entries[idx].0)
    }
}

impl PartialEq for TokenTable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.inner.entries == other.inner.entries
    }
}

impl fmt::Debug for TokenTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<N, V> FromIterator<(N, V)> for TokenTable
where
    N: Into<TokenName>,
    V: Into<TokenValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TokenTableBuilder::new(), |builder, (name, value)| {
                builder.set(name, value)
            })
            .build()
    }
}

/// Binary search for `name` in a slice sorted by name.
#[inline]
pub(crate) fn find_entry<V>(entries: &[(TokenName, V)], name: &str) -> Result<usize, usize> {
    entries.binary_search_by(|(probe, _)| (**probe).cmp(name))
}

/// Builder for constructing [`TokenTable`] instances.
///
/// # Example
///
/// ```rust
/// use fluid_tokens::TokenTableBuilder;
///
/// let themes = TokenTableBuilder::new()
///     .set(
///         "ABYSS",
///         TokenTableBuilder::new().set("FLUID_COLOR_BACKGROUND", "#14141f").build(),
///     )
///     .set(
///         "SURFACE",
///         TokenTableBuilder::new().set("FLUID_COLOR_BACKGROUND", "#ffffff").build(),
///     )
///     .build();
///
/// let surface = themes.get("SURFACE").and_then(|v| v.as_group()).unwrap();
/// assert_eq!(
///     surface.get("FLUID_COLOR_BACKGROUND").and_then(|v| v.as_str()),
///     Some("#ffffff")
/// );
/// ```
#[derive(Debug, Default)]
pub struct TokenTableBuilder {
    entries: Vec<(TokenName, TokenValue)>,
}

impl TokenTableBuilder {
    /// Creates a new empty table builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a token value in the table.
    ///
    /// If the token was already set, the value is replaced.
    #[must_use]
    pub fn set(mut self, name: impl Into<TokenName>, value: impl Into<TokenValue>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    pub(crate) fn insert(&mut self, name: TokenName, value: TokenValue) {
        match find_entry(&self.entries, &name) {
            Ok(idx) => {
                self.entries[idx].1 = value;
            }
            Err(idx) => {
                self.entries.insert(idx, (name, value));
            }
        }
    }

    /// Builds the table.
    #[must_use]
    pub fn build(self) -> TokenTable {
        TokenTable {
            inner: Rc::new(TableData {
                entries: self.entries,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn table_empty() {
        let table = TokenTableBuilder::new().build();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get("A").is_none());
    }

    #[test]
    fn table_replace_value() {
        let table = TokenTableBuilder::new().set("A", "1").set("A", "2").build();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A").and_then(TokenValue::as_str), Some("2"));
    }

    #[test]
    fn table_keys_are_sorted() {
        let table = TokenTableBuilder::new()
            .set("FLUID_SPACING_SMALL", "8px")
            .set("FLUID_COLOR_TEXT", "#000")
            .set("FLUID_LAYOUT_DENSE", 0.5)
            .build();

        let keys: Vec<_> = table.keys().collect();
        assert_eq!(
            keys,
            vec!["FLUID_COLOR_TEXT", "FLUID_LAYOUT_DENSE", "FLUID_SPACING_SMALL"]
        );
    }

    #[test]
    fn table_clone_is_cheap() {
        let table = TokenTableBuilder::new().set("A", "1").build();
        let table2 = table.clone();

        assert!(table.ptr_eq(&table2));
        assert_eq!(table, table2);
    }

    #[test]
    fn table_equality_is_structural() {
        let a = TokenTableBuilder::new().set("A", "1").set("B", 2_i32).build();
        let b: TokenTable = [("B", TokenValue::from(2_i32)), ("A", TokenValue::from("1"))]
            .into_iter()
            .collect();

        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn nested_groups_are_shared() {
        let palette = TokenTableBuilder::new().set("TEXT", "#fff").build();
        let table = TokenTableBuilder::new()
            .set("THEME", palette.clone())
            .build();

        let nested = table.get("THEME").and_then(TokenValue::as_group).unwrap();
        assert!(nested.ptr_eq(&palette));
    }

    #[test]
    fn stored_name_is_shared() {
        let name: TokenName = "A".into();
        let table = TokenTableBuilder::new().set(name.clone(), "1").build();
        assert!(Rc::ptr_eq(table.name("A").unwrap(), &name));
        assert!(table.name("B").is_none());
    }
}
