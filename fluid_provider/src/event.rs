// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications.

use std::fmt;

use fluid_tokens::{TokenName, TokenView};

use crate::theme::{FluidTheme, LayoutDensity};

/// Describes what changed in a [`Provider`](crate::Provider).
#[derive(Clone, Debug, PartialEq)]
pub enum TokenChange {
    /// A single override was created or replaced.
    OverrideSet {
        /// The overridden token.
        name: TokenName,
    },
    /// A single override was removed.
    OverrideRemoved {
        /// The token whose override was removed.
        name: TokenName,
    },
    /// The theme changed and its overrides were applied.
    ThemeChanged {
        /// The new theme.
        theme: FluidTheme,
    },
    /// The layout density changed and spacing tokens were rescaled.
    LayoutChanged {
        /// The new layout density.
        layout: LayoutDensity,
    },
}

/// Handle returned by [`Provider::add_listener`](crate::Provider::add_listener).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u32);

type Listener = Box<dyn FnMut(&TokenChange, TokenView<'_>)>;

/// Registered change listeners, called in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u32,
}

impl Listeners {
    pub(crate) fn add(
        &mut self,
        listener: impl FnMut(&TokenChange, TokenView<'_>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, change: &TokenChange, view: TokenView<'_>) {
        for (_, listener) in &mut self.entries {
            listener(change, view);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
