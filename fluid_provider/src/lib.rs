// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluid Provider: themes, layout density and CSS custom properties on top of
//! [`fluid_tokens`].
//!
//! A [`Provider`] owns a [`TokenAccessor`](fluid_tokens::TokenAccessor) for a
//! subtree of components. It applies the active [`FluidTheme`] as overrides,
//! rescales spacing tokens for the active [`LayoutDensity`], and mirrors every
//! effective token into a [`StyleSink`] as a CSS custom property
//! (`FLUID_SPACING_SMALL` becomes `--fluid-spacing-small`).
//!
//! ## Token Layout
//!
//! The provider expects a few tokens in its table:
//!
//! - `FLUID_LAYOUT_DEFAULT`, `FLUID_LAYOUT_DENSE` and `FLUID_LAYOUT_LOOSE`:
//!   spacing factors per density, as numbers or numeric strings.
//! - `THEMES`: a group with one sub-group per theme (`ABYSS`, `SURFACE`). Each
//!   theme group holds the tokens that theme overrides.
//! - `FLUID_SPACING*`: pixel values such as `"16px"` that density scales.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use fluid_provider::{ProviderBuilder, TokenChange};
//! use fluid_tokens::TokenTableBuilder;
//!
//! let themes = TokenTableBuilder::new()
//!     .set("ABYSS", TokenTableBuilder::new().build())
//!     .set("SURFACE", TokenTableBuilder::new().build())
//!     .build();
//! let tokens = TokenTableBuilder::new()
//!     .set("FLUID_LAYOUT_DEFAULT", "1")
//!     .set("FLUID_LAYOUT_DENSE", "0.5")
//!     .set("FLUID_LAYOUT_LOOSE", "1.5")
//!     .set("FLUID_COLOR_ACCENT", "#3b82f6")
//!     .set("THEMES", themes)
//!     .build();
//!
//! let mut provider = ProviderBuilder::new(tokens).build().unwrap();
//! provider.connect().unwrap();
//!
//! let changes = Rc::new(Cell::new(0));
//! let seen = changes.clone();
//! provider.add_listener(move |change, tokens| {
//!     assert!(matches!(change, TokenChange::OverrideSet { .. }));
//!     assert_eq!(tokens.get("FLUID_COLOR_ACCENT").and_then(|v| v.as_str()), Some("#ef4444"));
//!     seen.set(seen.get() + 1);
//! });
//!
//! provider.set_override("FLUID_COLOR_ACCENT", "#ef4444");
//! assert_eq!(provider.style().get("--fluid-color-accent"), Some("#ef4444"));
//! assert_eq!(changes.get(), 1);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events on theme, density and
//!   override changes.
//! - `serde`: (de)serialize [`ProviderConfig`], [`FluidTheme`] and
//!   [`LayoutDensity`], and enable `serde` on `fluid_tokens`.

mod error;
mod event;
mod number;
mod provider;
mod sink;
mod theme;

pub use error::ProviderError;
pub use event::{ListenerId, TokenChange};
pub use provider::{Provider, ProviderBuilder};
pub use sink::{CustomProperties, StyleSink};
pub use theme::{FluidTheme, LayoutDensity, ProviderConfig, SPACING_TOKEN_PREFIX, THEMES_TOKEN};
