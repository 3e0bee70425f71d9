// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destinations for generated CSS custom properties.

use std::collections::BTreeMap;

/// Receives custom property updates from a [`Provider`](crate::Provider).
///
/// Implement this for whatever applies styles in the embedding (a style
/// declaration, a stylesheet rule, a test recorder). Names always carry the
/// `--` prefix; values are already converted to CSS text.
pub trait StyleSink {
    /// Sets `name` to `value`, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);

    /// Removes `name`. Removing an unknown property does nothing.
    fn remove_property(&mut self, name: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&mut self, name: &str) {
        (**self).remove_property(name);
    }
}

/// In-memory [`StyleSink`] that keeps properties sorted by name.
///
/// # Example
///
/// ```rust
/// use fluid_provider::{CustomProperties, StyleSink};
///
/// let mut props = CustomProperties::new();
/// props.set_property("--fluid-spacing-small", "8px");
/// props.set_property("--fluid-color-text", "#f0f0f5");
///
/// assert_eq!(props.get("--fluid-spacing-small"), Some("8px"));
/// assert_eq!(
///     props.to_css(),
///     "--fluid-color-text: #f0f0f5;\n--fluid-spacing-small: 8px;\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomProperties {
    properties: BTreeMap<String, String>,
}

impl CustomProperties {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over `(name, value)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Renders the properties as CSS declarations, one per line.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out
    }
}

impl StyleSink for CustomProperties {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.get_mut(name) {
            Some(existing) => {
                existing.clear();
                existing.push_str(value);
            }
            None => {
                self.properties.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_and_remove_is_idempotent() {
        let mut props = CustomProperties::new();
        props.set_property("--a", "1");
        props.set_property("--a", "2");
        assert_eq!(props.get("--a"), Some("2"));
        assert_eq!(props.len(), 1);

        props.remove_property("--a");
        props.remove_property("--a");
        assert!(props.is_empty());
    }

    #[test]
    fn mut_ref_forwards() {
        fn write(mut sink: impl StyleSink) {
            sink.set_property("--x", "1");
        }

        let mut props = CustomProperties::new();
        write(&mut props);
        assert_eq!(props.get("--x"), Some("1"));
    }
}
