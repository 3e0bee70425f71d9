// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluid Tokens: design token tables with a layered override view.
//!
//! This crate holds the data side of a design-system provider: a static table
//! of design tokens, a layer of runtime overrides on top of it, and a
//! read-only view that resolves each token through both layers.
//!
//! **Override → Original**
//!
//! ## Core Concepts
//!
//! ### Token Tables
//!
//! [`TokenTable`] maps token names (conventionally `UPPER_SNAKE_CASE`) to
//! [`TokenValue`]s: strings, numbers, or nested groups such as per-theme
//! palettes. Tables are immutable after creation and cheap to clone.
//!
//! ```rust
//! use fluid_tokens::TokenTableBuilder;
//!
//! let tokens = TokenTableBuilder::new()
//!     .set("FLUID_SPACING_SMALL", "8px")
//!     .set("FLUID_LAYOUT_DENSE", 0.5)
//!     .build();
//!
//! assert_eq!(tokens.len(), 2);
//! ```
//!
//! ### Overrides and the Effective View
//!
//! [`TokenAccessor`] owns a table plus overrides. Its [`TokenView`] resolves
//! every name to the override if present, else the original value. Writing
//! through the view is rejected with [`InvalidMutation`]; overrides only
//! change through [`TokenAccessor::set_override`] and
//! [`TokenAccessor::remove_override`].
//!
//! ```rust
//! use fluid_tokens::{TokenAccessor, TokenTableBuilder};
//!
//! let mut accessor = TokenAccessor::new(
//!     TokenTableBuilder::new().set("A", "1").set("B", "2").build(),
//! );
//!
//! // Overrides can introduce new tokens...
//! accessor.set_override("C", "3");
//! assert_eq!(accessor.tokens().keys().collect::<Vec<_>>(), ["A", "B", "C"]);
//!
//! // ...and removing them makes the token disappear again.
//! accessor.remove_override("C");
//! assert!(!accessor.tokens().contains("C"));
//!
//! // Overriding a native token and resetting it restores the original.
//! accessor.set_override("A", "9");
//! accessor.remove_override("A");
//! assert_eq!(accessor.tokens().get("A").and_then(|v| v.as_str()), Some("1"));
//!
//! assert!(accessor.tokens().set("A", "x").is_err());
//! ```
//!
//! ### CSS Custom Properties
//!
//! [`css_property_name`] maps `FLUID_SPACING_SMALL` to
//! `--fluid-spacing-small`. [`CssNameCache`] memoizes it, and accessors use a
//! (possibly shared) cache for [`TokenAccessor::css_property_name`].
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for tables and values, `Serialize`
//!   for views.
//! - `tracing` (default): trace events for override changes.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod accessor;
mod css;
mod error;
#[cfg(feature = "serde")]
mod serde_impls;
mod table;
mod value;
mod view;

pub use accessor::TokenAccessor;
pub use css::{CSS_PROPERTY_PREFIX, CssNameCache, css_property_name};
pub use error::InvalidMutation;
pub use table::{TokenTable, TokenTableBuilder};
pub use value::{TokenName, TokenValue};
pub use view::{TokenIter, TokenKeys, TokenOrigin, TokenView};
