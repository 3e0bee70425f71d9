// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::value::TokenName;

/// Error returned when writing to a [`TokenView`](crate::TokenView) directly.
///
/// The view is read-only. Overrides go through
/// [`TokenAccessor::set_override`](crate::TokenAccessor::set_override) so that
/// the view and the override bookkeeping cannot drift apart.
#[derive(Clone, PartialEq, Eq)]
pub struct InvalidMutation {
    /// The token the caller tried to write.
    pub name: TokenName,
}

impl fmt::Debug for InvalidMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidMutation {{ name: {:?} }}", &*self.name)
    }
}

impl fmt::Display for InvalidMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setting design token {:?} directly is not allowed, use set_override() instead",
            &*self.name
        )
    }
}

impl core::error::Error for InvalidMutation {}
