//! Height fitting as the controls use it.
//!
//! Wraps the fitter with the control's resolver, metrics provider and
//! settings, and handles resolver/provider failures: fonts for the failing
//! writing system are taken from the configured fallback and the text is
//! fitted again. Stored runs keep their writing system. If even the fallback
//! fails the text is shown unfitted.

use std::sync::Arc;

use polytext_config::{Config, StyleError};
use polytext_fonts::{
    FitError, FontMetricsProvider, ResolvedFont, RichString, StyleResolver, adjust_to_height,
    apply_floor, clear_explicit_size, rendered_height_mp,
};

/// Fits rich strings for one control.
pub struct TextFitter {
    resolver: Box<dyn StyleResolver>,
    metrics: Arc<dyn FontMetricsProvider>,
    max_height_mp: u32,
    min_size_mp: Option<u32>,
    fallback_writing_system: String,
}

impl TextFitter {
    /// Unconstrained fitter; set a budget with [`with_max_height`](Self::with_max_height).
    pub fn new(
        resolver: Box<dyn StyleResolver>,
        metrics: Arc<dyn FontMetricsProvider>,
        fallback_writing_system: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            metrics,
            max_height_mp: 0,
            min_size_mp: None,
            fallback_writing_system: fallback_writing_system.into(),
        }
    }

    /// Fitter using the config's stylesheet, fallback and control settings.
    pub fn from_config(config: &Config, metrics: Arc<dyn FontMetricsProvider>) -> Self {
        Self::new(
            Box::new(config.stylesheet()),
            metrics,
            config.fallback_writing_system.clone(),
        )
        .with_max_height(config.controls.max_item_height_mp)
        .with_min_size(config.controls.min_point_size_mp)
    }

    pub fn with_max_height(mut self, max_height_mp: u32) -> Self {
        self.max_height_mp = max_height_mp;
        self
    }

    pub fn with_min_size(mut self, min_size_mp: Option<u32>) -> Self {
        self.min_size_mp = min_size_mp;
        self
    }

    pub fn max_height_mp(&self) -> u32 {
        self.max_height_mp
    }

    pub fn set_max_height(&mut self, max_height_mp: u32) {
        self.max_height_mp = max_height_mp;
    }

    /// Swap in a resolver for a new stylesheet and drop cached metrics.
    pub fn set_resolver(&mut self, resolver: Box<dyn StyleResolver>) {
        self.resolver = resolver;
        self.metrics.invalidate();
    }

    pub fn resolver(&self) -> &dyn StyleResolver {
        self.resolver.as_ref()
    }

    /// Fit `text` to the budget.
    ///
    /// Runs whose writing system cannot be resolved or measured are sized
    /// with the fallback writing system's font. Their own writing system is
    /// kept, so a later stylesheet that knows it refits them properly.
    pub fn fit(&self, text: &Arc<RichString>) -> Arc<RichString> {
        let fitted = match self.with_fallback(|resolver| {
            adjust_to_height(text, self.max_height_mp, resolver, self.metrics.as_ref())
        }) {
            Ok(fitted) => fitted,
            Err(err) => {
                log::error!(
                    "Fallback writing system '{}' cannot be used either ({}); showing text unfitted",
                    self.fallback_writing_system,
                    err
                );
                return Arc::clone(text);
            }
        };
        match self.min_size_mp {
            Some(min) => apply_floor(&fitted, min),
            None => fitted,
        }
    }

    /// Drop earlier adjustments and fit again from the styles' natural sizes.
    pub fn refit(&self, text: &Arc<RichString>) -> Arc<RichString> {
        self.fit(&clear_explicit_size(text))
    }

    /// Height of `text` as drawn, or `None` if it cannot be measured.
    pub fn rendered_height_mp(&self, text: &RichString) -> Option<u32> {
        match self.with_fallback(|resolver| {
            rendered_height_mp(text, resolver, self.metrics.as_ref())
        }) {
            Ok(height) => Some(height),
            Err(err) => {
                log::warn!("Cannot measure item: {}", err);
                None
            }
        }
    }

    /// Run `attempt`, resolving each writing system that fails through the
    /// fallback instead and trying again. Each writing system is substituted
    /// at most once; a failure of the fallback itself is returned.
    fn with_fallback<T>(
        &self,
        mut attempt: impl FnMut(&dyn StyleResolver) -> Result<T, FitError>,
    ) -> Result<T, FitError> {
        let fallback = self.fallback_writing_system.as_str();
        let mut substituted: Vec<String> = Vec::new();
        loop {
            let resolver = SubstitutingResolver {
                inner: self.resolver.as_ref(),
                substituted: &substituted,
                fallback,
            };
            let err = match attempt(&resolver) {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            let failed = err.writing_system().to_string();
            if failed == fallback || substituted.contains(&failed) {
                return Err(err);
            }
            log::warn!("{}; using writing system '{}' fonts instead", err, fallback);
            substituted.push(failed);
        }
    }
}

/// Resolves the listed writing systems as `fallback`, everything else as is.
struct SubstitutingResolver<'a> {
    inner: &'a dyn StyleResolver,
    substituted: &'a [String],
    fallback: &'a str,
}

impl StyleResolver for SubstitutingResolver<'_> {
    fn resolve(&self, style: &str, writing_system: &str) -> Result<ResolvedFont, StyleError> {
        if self.substituted.iter().any(|ws| ws == writing_system) {
            self.inner.resolve(style, self.fallback)
        } else {
            self.inner.resolve(style, writing_system)
        }
    }
}
