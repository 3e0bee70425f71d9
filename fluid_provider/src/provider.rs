// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The provider: theme, density and custom property synchronization.

use std::rc::Rc;

use fluid_tokens::{CssNameCache, TokenAccessor, TokenName, TokenTable, TokenValue, TokenView};

use crate::error::ProviderError;
use crate::event::{ListenerId, Listeners, TokenChange};
use crate::number::{parse_leading_float, parse_leading_int};
use crate::sink::{CustomProperties, StyleSink};
use crate::theme::{FluidTheme, LayoutDensity, ProviderConfig, SPACING_TOKEN_PREFIX, THEMES_TOKEN};

/// Spacing multipliers per layout density, read once from the token table.
#[derive(Copy, Clone, Debug, PartialEq)]
struct DensityFactors {
    default: f64,
    dense: f64,
    loose: f64,
}

impl DensityFactors {
    fn from_view(view: TokenView<'_>) -> Result<Self, ProviderError> {
        Ok(Self {
            default: density_factor(view, LayoutDensity::Default)?,
            dense: density_factor(view, LayoutDensity::Dense)?,
            loose: density_factor(view, LayoutDensity::Loose)?,
        })
    }

    fn get(self, layout: LayoutDensity) -> f64 {
        match layout {
            LayoutDensity::Default => self.default,
            LayoutDensity::Dense => self.dense,
            LayoutDensity::Loose => self.loose,
        }
    }
}

fn density_factor(view: TokenView<'_>, layout: LayoutDensity) -> Result<f64, ProviderError> {
    let name = layout.factor_token();
    let value = view.get(name).ok_or_else(|| ProviderError::MissingToken {
        name: name.into(),
    })?;
    let factor = match value {
        TokenValue::Number(n) => Some(*n),
        TokenValue::String(s) => parse_leading_float(s),
        TokenValue::Group(_) => None,
    };
    factor
        .filter(|f| f.is_finite())
        .ok_or_else(|| ProviderError::InvalidNumber { name: name.into() })
}

/// Scales a spacing value such as `"16px"` by `factor`.
///
/// Only the leading integer is used and the unit is assumed to be pixels.
/// Rounds half up, so `2.5` becomes `3` and `-2.5` becomes `-2`.
fn scale_spacing(value: &str, factor: f64) -> Option<String> {
    let base = parse_leading_int(value)?;
    // `+ 0.0` folds a negative zero into zero.
    let scaled = (base * factor + 0.5).floor() + 0.0;
    Some(format!("{scaled}px"))
}

/// Owns the design tokens for a subtree of components.
///
/// A provider wraps a [`TokenAccessor`] and drives it from two settings:
///
/// - the [`FluidTheme`], whose token group (`THEMES.<THEME>`) is applied as
///   overrides, and
/// - the [`LayoutDensity`], which rescales every `FLUID_SPACING*` token.
///
/// After every change it writes the affected CSS custom properties into its
/// [`StyleSink`] and notifies listeners with the updated [`TokenView`].
///
/// # Example
///
/// ```rust
/// use fluid_provider::{FluidTheme, LayoutDensity, ProviderBuilder};
/// use fluid_tokens::TokenTableBuilder;
///
/// let tokens = TokenTableBuilder::new()
///     .set("FLUID_LAYOUT_DEFAULT", "1")
///     .set("FLUID_LAYOUT_DENSE", "0.5")
///     .set("FLUID_LAYOUT_LOOSE", "1.5")
///     .set("FLUID_SPACING_MEDIUM", "16px")
///     .set(
///         "THEMES",
///         TokenTableBuilder::new()
///             .set("ABYSS", TokenTableBuilder::new().set("FLUID_COLOR_TEXT", "#f0f0f5").build())
///             .set("SURFACE", TokenTableBuilder::new().set("FLUID_COLOR_TEXT", "#14141f").build())
///             .build(),
///     )
///     .build();
///
/// let mut provider = ProviderBuilder::new(tokens).build().unwrap();
/// provider.connect().unwrap();
/// assert_eq!(provider.style().get("--fluid-color-text"), Some("#f0f0f5"));
///
/// provider.set_theme(FluidTheme::Surface).unwrap();
/// assert_eq!(provider.style().get("--fluid-color-text"), Some("#14141f"));
///
/// provider.set_layout(LayoutDensity::Dense);
/// assert_eq!(provider.style().get("--fluid-spacing-medium"), Some("8px"));
/// ```
#[derive(Debug)]
pub struct Provider<S = CustomProperties> {
    accessor: TokenAccessor,
    theme: FluidTheme,
    layout: LayoutDensity,
    factors: DensityFactors,
    sink: S,
    listeners: Listeners,
    connected: bool,
}

impl<S: StyleSink> Provider<S> {
    /// Returns the effective design tokens.
    #[must_use]
    #[inline]
    pub fn design_tokens(&self) -> TokenView<'_> {
        self.accessor.tokens()
    }

    /// Returns the effective value of one design token.
    #[must_use]
    pub fn design_token(&self, name: &str) -> Option<&TokenValue> {
        self.accessor.tokens().get(name)
    }

    /// Returns the underlying accessor.
    #[must_use]
    #[inline]
    pub fn accessor(&self) -> &TokenAccessor {
        &self.accessor
    }

    /// Returns the current theme.
    #[must_use]
    #[inline]
    pub fn theme(&self) -> FluidTheme {
        self.theme
    }

    /// Returns the current layout density.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> LayoutDensity {
        self.layout
    }

    /// Returns the spacing factor used for `layout`.
    #[must_use]
    pub fn density_factor(&self, layout: LayoutDensity) -> f64 {
        self.factors.get(layout)
    }

    /// Returns `true` once [`connect`](Self::connect) succeeded.
    #[must_use]
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns the style sink.
    #[must_use]
    #[inline]
    pub fn style(&self) -> &S {
        &self.sink
    }

    /// Consumes the provider and returns its style sink.
    #[must_use]
    pub fn into_style(self) -> S {
        self.sink
    }

    /// Applies the current theme (and density, if not the default) and writes
    /// every custom property.
    ///
    /// Call this once the provider is attached to whatever consumes its
    /// styles. Calling it again re-applies everything.
    pub fn connect(&mut self) -> Result<(), ProviderError> {
        let group = self.theme_group(self.theme)?;
        self.apply_theme_group(&group, None);
        if self.layout != LayoutDensity::Default {
            self.apply_spacing_overrides();
        }
        self.sync_custom_properties();
        self.connected = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            theme = %self.theme,
            layout = %self.layout,
            tokens = self.accessor.tokens().len(),
            "provider connected"
        );
        Ok(())
    }

    /// Switches the theme.
    ///
    /// Overrides from the previous theme that the new theme does not define
    /// are removed, then every token of the new theme group is applied as an
    /// override. Does nothing if `theme` is already active. Fails without
    /// changing anything when the token table has no group for `theme`.
    pub fn set_theme(&mut self, theme: FluidTheme) -> Result<(), ProviderError> {
        if theme == self.theme {
            return Ok(());
        }
        let group = self.theme_group(theme)?;
        let previous = self.theme_group(self.theme).ok();

        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.theme, to = %theme, overrides = group.len(), "switch theme");

        self.theme = theme;
        let stale = self.apply_theme_group(&group, previous.as_ref());
        self.sync_custom_properties();
        for name in &stale {
            self.sync_token(name);
        }
        self.notify(&TokenChange::ThemeChanged { theme });
        Ok(())
    }

    /// Switches the layout density and rescales spacing tokens.
    ///
    /// Does nothing if `layout` is already active.
    pub fn set_layout(&mut self, layout: LayoutDensity) {
        if layout == self.layout {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = %self.layout,
            to = %layout,
            factor = self.factors.get(layout),
            "switch layout density"
        );

        self.layout = layout;
        self.apply_spacing_overrides();
        self.sync_custom_properties();
        self.notify(&TokenChange::LayoutChanged { layout });
    }

    /// Creates or overrides a design token and updates its custom property.
    pub fn set_override(&mut self, name: &str, value: impl Into<TokenValue>) {
        self.accessor.set_override(name, value);
        self.sync_token(name);
        self.notify(&TokenChange::OverrideSet { name: name.into() });
    }

    /// Resets a design token and updates its custom property.
    ///
    /// Overridden tokens revert to their original value; override-only tokens
    /// disappear, together with their custom property. Returns the removed
    /// override, or `None` (and notifies nobody) if there was none.
    pub fn remove_override(&mut self, name: &str) -> Option<TokenValue> {
        let removed = self.accessor.remove_override(name)?;
        self.sync_token(name);
        self.notify(&TokenChange::OverrideRemoved { name: name.into() });
        Some(removed)
    }

    /// Registers a listener that runs after every change.
    ///
    /// Listeners see the change and the effective tokens after it was applied.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&TokenChange, TokenView<'_>) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, change: &TokenChange) {
        self.listeners.notify(change, self.accessor.tokens());
    }

    fn theme_group(&self, theme: FluidTheme) -> Result<TokenTable, ProviderError> {
        self.accessor
            .tokens()
            .get(THEMES_TOKEN)
            .and_then(TokenValue::as_group)
            .and_then(|themes| themes.get(theme.group_key()))
            .and_then(TokenValue::as_group)
            .cloned()
            .ok_or(ProviderError::MissingThemeGroup { theme })
    }

    /// Applies `group` as overrides and removes the overrides that only
    /// `previous` defined. Returns the removed names.
    fn apply_theme_group(
        &mut self,
        group: &TokenTable,
        previous: Option<&TokenTable>,
    ) -> Vec<TokenName> {
        let mut stale = Vec::new();
        if let Some(previous) = previous {
            for name in previous.keys() {
                if !group.contains(name) && self.accessor.remove_override(name).is_some() {
                    stale.push(name.into());
                }
            }
        }
        for (name, value) in group.iter() {
            self.accessor.set_override(name, value.clone());
        }
        stale
    }

    fn apply_spacing_overrides(&mut self) {
        let factor = self.factors.get(self.layout);
        let original = self.accessor.original_tokens().clone();
        let spacings = original
            .iter()
            .filter(|(name, _)| name.starts_with(SPACING_TOKEN_PREFIX))
            .filter_map(|(name, value)| Some((name, value.as_str()?)));

        for (name, value) in spacings {
            match scale_spacing(value, factor) {
                Some(scaled) => {
                    self.accessor.set_override(name, scaled);
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(token = name, value, "spacing token has no pixel value");
                }
            }
        }
    }

    /// Writes a custom property for every string or numeric token.
    fn sync_custom_properties(&mut self) {
        let view = self.accessor.tokens();
        for (name, value) in view.iter() {
            let Some(css) = value.css_value() else {
                continue;
            };
            let property = self.accessor.css_property_name(name);
            self.sink.set_property(&property, &css);
        }
    }

    /// Writes or removes the custom property of a single token.
    fn sync_token(&mut self, name: &str) {
        let property = self.accessor.css_property_name(name);
        match self.accessor.tokens().get(name).and_then(TokenValue::css_value) {
            Some(css) => self.sink.set_property(&property, &css),
            None => self.sink.remove_property(&property),
        }
    }
}

/// Builder for [`Provider`].
///
/// # Example
///
/// ```rust
/// use fluid_provider::{CustomProperties, FluidTheme, LayoutDensity, ProviderBuilder};
/// use fluid_tokens::TokenTableBuilder;
///
/// let tokens = TokenTableBuilder::new()
///     .set("FLUID_LAYOUT_DEFAULT", 1)
///     .set("FLUID_LAYOUT_DENSE", 0.5)
///     .set("FLUID_LAYOUT_LOOSE", 1.5)
///     .build();
///
/// let provider = ProviderBuilder::new(tokens)
///     .theme(FluidTheme::Surface)
///     .layout(LayoutDensity::Loose)
///     .sink(CustomProperties::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(provider.theme(), FluidTheme::Surface);
/// assert_eq!(provider.density_factor(LayoutDensity::Loose), 1.5);
/// assert!(!provider.is_connected());
/// ```
#[derive(Debug)]
pub struct ProviderBuilder<S = CustomProperties> {
    tokens: TokenTable,
    config: ProviderConfig,
    css_cache: Option<Rc<CssNameCache>>,
    sink: S,
}

impl ProviderBuilder {
    /// Starts a builder over `tokens` with an in-memory [`CustomProperties`] sink.
    #[must_use]
    pub fn new(tokens: TokenTable) -> Self {
        Self {
            tokens,
            config: ProviderConfig::default(),
            css_cache: None,
            sink: CustomProperties::new(),
        }
    }
}

impl<S: StyleSink> ProviderBuilder<S> {
    /// Sets the initial theme.
    #[must_use]
    pub fn theme(mut self, theme: FluidTheme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Sets the initial layout density.
    #[must_use]
    pub fn layout(mut self, layout: LayoutDensity) -> Self {
        self.config.layout = layout;
        self
    }

    /// Sets theme and layout density at once.
    #[must_use]
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares a CSS name cache with other providers.
    #[must_use]
    pub fn css_cache(mut self, cache: Rc<CssNameCache>) -> Self {
        self.css_cache = Some(cache);
        self
    }

    /// Replaces the style sink.
    #[must_use]
    pub fn sink<T: StyleSink>(self, sink: T) -> ProviderBuilder<T> {
        ProviderBuilder {
            tokens: self.tokens,
            config: self.config,
            css_cache: self.css_cache,
            sink,
        }
    }

    /// Builds the provider.
    ///
    /// Fails if a layout density factor token is missing or not numeric.
    /// Nothing is written to the sink until [`Provider::connect`].
    pub fn build(self) -> Result<Provider<S>, ProviderError> {
        let accessor = match self.css_cache {
            Some(cache) => TokenAccessor::with_css_cache(self.tokens, cache),
            None => TokenAccessor::new(self.tokens),
        };
        let factors = DensityFactors::from_view(accessor.tokens())?;
        Ok(Provider {
            accessor,
            theme: self.config.theme,
            layout: self.config.layout,
            factors,
            sink: self.sink,
            listeners: Listeners::default(),
            connected: false,
        })
    }
}
