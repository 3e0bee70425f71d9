// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme and layout density configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ProviderError;

/// Name of the token group that holds one sub-group per theme.
pub const THEMES_TOKEN: &str = "THEMES";

/// Prefix shared by every spacing token that layout density scales.
pub const SPACING_TOKEN_PREFIX: &str = "FLUID_SPACING";

/// The themes a provider can apply to its children.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FluidTheme {
    /// Dark theme.
    #[default]
    Abyss,
    /// Light theme.
    Surface,
}

impl FluidTheme {
    /// Returns the lowercase name used in attributes and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abyss => "abyss",
            Self::Surface => "surface",
        }
    }

    /// Returns the key of this theme's group inside [`THEMES_TOKEN`].
    #[must_use]
    pub const fn group_key(self) -> &'static str {
        match self {
            Self::Abyss => "ABYSS",
            Self::Surface => "SURFACE",
        }
    }
}

impl fmt::Display for FluidTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FluidTheme {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abyss" => Ok(Self::Abyss),
            "surface" => Ok(Self::Surface),
            _ => Err(ProviderError::UnknownTheme(s.to_owned())),
        }
    }
}

/// Layout density inside a provider.
///
/// Non-default densities scale every spacing token by a factor read from the
/// token table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutDensity {
    /// Regular spacing.
    #[default]
    Default,
    /// Tighter spacing.
    Dense,
    /// Wider spacing.
    Loose,
}

impl LayoutDensity {
    /// All densities, in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Dense, Self::Loose];

    /// Returns the lowercase name used in attributes and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dense => "dense",
            Self::Loose => "loose",
        }
    }

    /// Returns the token that holds this density's spacing factor.
    #[must_use]
    pub const fn factor_token(self) -> &'static str {
        match self {
            Self::Default => "FLUID_LAYOUT_DEFAULT",
            Self::Dense => "FLUID_LAYOUT_DENSE",
            Self::Loose => "FLUID_LAYOUT_LOOSE",
        }
    }
}

impl fmt::Display for LayoutDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutDensity {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "dense" => Ok(Self::Dense),
            "loose" => Ok(Self::Loose),
            _ => Err(ProviderError::UnknownLayout(s.to_owned())),
        }
    }
}

/// Initial provider settings.
///
/// With the `serde` feature this deserializes from
/// `{ "theme": "surface", "layout": "dense" }`; missing fields take their
/// defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProviderConfig {
    /// Theme applied on connect.
    pub theme: FluidTheme,
    /// Layout density applied on connect.
    pub layout: LayoutDensity,
}
