// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use fluid_tokens::TokenName;

use crate::theme::FluidTheme;

/// Errors reported by a [`Provider`](crate::Provider).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderError {
    /// A token the provider depends on is not defined.
    MissingToken {
        /// Name of the missing token.
        name: TokenName,
    },
    /// A token that should hold a number has no numeric value.
    InvalidNumber {
        /// Name of the offending token.
        name: TokenName,
    },
    /// The token table has no `THEMES.<THEME>` group for a theme.
    MissingThemeGroup {
        /// The theme whose group is missing.
        theme: FluidTheme,
    },
    /// A theme name that is neither `abyss` nor `surface`.
    UnknownTheme(String),
    /// A layout density name that is neither `default`, `dense` nor `loose`.
    UnknownLayout(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken { name } => write!(f, "design token {:?} is not defined", &**name),
            Self::InvalidNumber { name } => {
                write!(f, "design token {:?} does not hold a number", &**name)
            }
            Self::MissingThemeGroup { theme } => write!(
                f,
                "design tokens have no THEMES.{} group for theme {theme}",
                theme.group_key()
            ),
            Self::UnknownTheme(name) => write!(f, "unknown theme {name:?}"),
            Self::UnknownLayout(name) => write!(f, "unknown layout density {name:?}"),
        }
    }
}

impl std::error::Error for ProviderError {}
