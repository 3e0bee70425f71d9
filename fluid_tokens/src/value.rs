// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Design token values.
//!
//! This module provides [`TokenValue`], the value type stored in a
//! [`TokenTable`] and in the override layer of a
//! [`TokenAccessor`](crate::TokenAccessor).

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt;

use crate::table::TokenTable;

/// Name of a design token, conventionally `UPPER_SNAKE_CASE`.
///
/// Names are reference counted so that tables, overrides and caches can share
/// them without copying the underlying string.
pub type TokenName = Rc<str>;

/// The value of a single design token.
///
/// Tokens are either scalar values (strings such as `"16px"` or `"#1a1a1a"`,
/// and plain numbers) or nested groups, which are used for things like
/// per-theme palettes.
///
/// Cloning is cheap: strings and groups are reference counted.
///
/// # Example
///
/// ```rust
/// use fluid_tokens::{TokenTableBuilder, TokenValue};
///
/// let spacing = TokenValue::from("16px");
/// assert_eq!(spacing.as_str(), Some("16px"));
/// assert_eq!(spacing.css_value().as_deref(), Some("16px"));
///
/// let density = TokenValue::from(0.5);
/// assert_eq!(density.as_number(), Some(0.5));
/// assert_eq!(density.css_value().as_deref(), Some("0.5"));
///
/// let palette = TokenValue::from(
///     TokenTableBuilder::new().set("FLUID_COLOR_TEXT", "#f0f0f5").build(),
/// );
/// assert!(palette.is_group());
/// assert_eq!(palette.css_value(), None);
/// ```
#[derive(Clone, PartialEq)]
pub enum TokenValue {
    /// A string value, used verbatim as a CSS value.
    String(Rc<str>),
    /// A numeric value.
    Number(f64),
    /// A nested, immutable group of tokens.
    Group(TokenTable),
}

impl TokenValue {
    /// Returns the string value, if this is a [`TokenValue::String`].
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a [`TokenValue::Number`].
    #[must_use]
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested table, if this is a [`TokenValue::Group`].
    #[must_use]
    #[inline]
    pub fn as_group(&self) -> Option<&TokenTable> {
        match self {
            Self::Group(table) => Some(table),
            _ => None,
        }
    }

    /// Returns `true` for nested groups.
    #[must_use]
    #[inline]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Returns the value as it would be written into a CSS custom property.
    ///
    /// Strings are returned as-is, numbers use their shortest decimal form
    /// (`16.0` becomes `"16"`). Groups have no CSS representation.
    #[must_use]
    pub fn css_value(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(s) => Some(Cow::Borrowed(&**s)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
            Self::Group(_) => None,
        }
    }
}

impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => fmt::Debug::fmt(&**s, f),
            Self::Number(n) => fmt::Debug::fmt(n, f),
            Self::Group(table) => fmt::Debug::fmt(table, f),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl From<Rc<str>> for TokenValue {
    fn from(value: Rc<str>) -> Self {
        Self::String(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for TokenValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<TokenTable> for TokenValue {
    fn from(value: TokenTable) -> Self {
        Self::Group(value)
    }
}
