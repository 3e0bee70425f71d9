// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime overrides on top of an immutable token table.
//!
//! # Implementation
//!
//! Overrides are kept in a sorted `SmallVec` with binary search, the same
//! layout as the original table. This keeps enumeration a linear merge of two
//! sorted slices and avoids heap allocation for the handful of overrides a
//! provider usually carries.

use alloc::rc::Rc;
use smallvec::SmallVec;

use crate::css::CssNameCache;
use crate::table::{TokenTable, find_entry};
use crate::value::{TokenName, TokenValue};
use crate::view::TokenView;

/// Default inline capacity for override entries.
const INLINE_CAPACITY: usize = 8;

/// Owns a token table and a layer of runtime overrides.
///
/// The accessor is the only sanctioned way to change what its
/// [`TokenView`] reports:
///
/// - [`set_override`](Self::set_override) creates or replaces a token.
/// - [`remove_override`](Self::remove_override) restores the original value,
///   or drops the token entirely if it only existed as an override.
///
/// The original table is never modified.
///
/// # Example
///
/// ```rust
/// use fluid_tokens::{TokenAccessor, TokenTableBuilder};
///
/// let mut accessor = TokenAccessor::new(
///     TokenTableBuilder::new().set("FLUID_SPACING_SMALL", "8px").build(),
/// );
///
/// accessor.set_override("FLUID_SPACING_SMALL", "4px");
/// assert_eq!(
///     accessor.tokens().get("FLUID_SPACING_SMALL").and_then(|v| v.as_str()),
///     Some("4px")
/// );
///
/// // Removing the override reverts to the original value.
/// accessor.remove_override("FLUID_SPACING_SMALL");
/// assert_eq!(
///     accessor.tokens().get("FLUID_SPACING_SMALL").and_then(|v| v.as_str()),
///     Some("8px")
/// );
///
/// assert_eq!(
///     &*accessor.css_property_name("FLUID_SPACING_SMALL"),
///     "--fluid-spacing-small"
/// );
/// ```
#[derive(Debug)]
pub struct TokenAccessor {
    original: TokenTable,
    /// Sorted by name for binary search lookup.
    overrides: SmallVec<[(TokenName, TokenValue); INLINE_CAPACITY]>,
    css_names: Rc<CssNameCache>,
    revision: u64,
}

impl TokenAccessor {
    /// Creates an accessor over `original` with no overrides and a private
    /// CSS name cache.
    #[must_use]
    pub fn new(original: TokenTable) -> Self {
        Self::with_css_cache(original, Rc::default())
    }

    /// Creates an accessor that shares `css_names` with other accessors.
    #[must_use]
    pub fn with_css_cache(original: TokenTable, css_names: Rc<CssNameCache>) -> Self {
        Self {
            original,
            overrides: SmallVec::new(),
            css_names,
            revision: 0,
        }
    }

    /// Returns the read-only effective view.
    #[must_use]
    #[inline]
    pub fn tokens(&self) -> TokenView<'_> {
        TokenView::new(&self.original, &self.overrides)
    }

    /// Returns the original table, ignoring overrides.
    #[must_use]
    #[inline]
    pub fn original_tokens(&self) -> &TokenTable {
        &self.original
    }

    /// Returns the shared CSS name cache.
    #[must_use]
    #[inline]
    pub fn css_cache(&self) -> &Rc<CssNameCache> {
        &self.css_names
    }

    /// Returns a counter that changes whenever the effective view changes.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Creates or overrides the token `name`.
    ///
    /// If no token with that name exists it is created, otherwise its value
    /// is replaced. Values are not validated. Returns the previous override,
    /// if there was one.
    pub fn set_override(
        &mut self,
        name: &str,
        value: impl Into<TokenValue>,
    ) -> Option<TokenValue> {
        let value = value.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(token = name, value = ?value, "set design token override");

        self.revision = self.revision.wrapping_add(1);
        match find_entry(&self.overrides, name) {
            Ok(idx) => Some(core::mem::replace(&mut self.overrides[idx].1, value)),
            Err(idx) => {
                // Share the table's name allocation when overriding a native token.
                let name = self
                    .original
                    .name(name)
                    .cloned()
                    .unwrap_or_else(|| name.into());
                self.overrides.insert(idx, (name, value));
                None
            }
        }
    }

    /// Resets the token `name`.
    ///
    /// If the token was overridden, its original value is visible again. If it
    /// only existed as an override, it disappears from the view. Removing a
    /// token that has no override does nothing. Returns the removed value.
    pub fn remove_override(&mut self, name: &str) -> Option<TokenValue> {
        let idx = find_entry(&self.overrides, name).ok()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(token = name, "remove design token override");

        self.revision = self.revision.wrapping_add(1);
        Some(self.overrides.remove(idx).1)
    }

    /// Removes every override.
    pub fn clear_overrides(&mut self) {
        if self.overrides.is_empty() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(count = self.overrides.len(), "clear design token overrides");

        self.overrides.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Returns `true` if `name` currently has an override.
    #[must_use]
    #[inline]
    pub fn has_override(&self, name: &str) -> bool {
        find_entry(&self.overrides, name).is_ok()
    }

    /// Returns the current overrides, in ascending name order.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &TokenValue)> + '_ {
        self.overrides.iter().map(|(name, value)| (&**name, value))
    }

    /// Returns the CSS custom property name for `token_name`.
    ///
    /// Repeated calls with the same name return the same cached allocation.
    #[must_use]
    pub fn css_property_name(&self, token_name: &str) -> Rc<str> {
        self.css_names.get(token_name)
    }
}
