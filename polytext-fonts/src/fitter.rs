//! Shrinks oversized runs so a rich string fits a height budget.
//!
//! For every run the natural font is resolved from its style and writing
//! system. If that font is taller than the budget, the size is stepped down
//! by a quarter point until it fits; metrics are re-queried at each step
//! because hinted heights do not scale smoothly. Runs that already fit are
//! left exactly as they were, and the fit always starts from the style's
//! natural size, so repeated fitting never compounds.

use std::sync::Arc;

use polytext_config::StyleError;
use thiserror::Error;

use crate::metrics::{FontError, FontMetricsProvider};
use crate::resolver::{ResolvedFont, StyleResolver};
use crate::rich_string::{RichString, Run};

/// Decrement applied per shrink step: 0.25pt.
pub const SHRINK_STEP_MP: u32 = 250;

/// Why a run could not be measured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("cannot resolve style '{style}' for writing system '{writing_system}': {source}")]
    Style {
        style: String,
        writing_system: String,
        #[source]
        source: StyleError,
    },
    #[error("no metrics for '{face}' (writing system '{writing_system}'): {source}")]
    Metrics {
        face: String,
        writing_system: String,
        #[source]
        source: FontError,
    },
}

impl FitError {
    /// Writing system of the run that failed.
    pub fn writing_system(&self) -> &str {
        match self {
            FitError::Style { writing_system, .. } | FitError::Metrics { writing_system, .. } => {
                writing_system
            }
        }
    }
}

fn resolve_run<R>(run: &Run, resolver: &R) -> Result<ResolvedFont, FitError>
where
    R: StyleResolver + ?Sized,
{
    resolver
        .resolve(run.style(), run.writing_system())
        .map_err(|source| FitError::Style {
            style: run.style().to_string(),
            writing_system: run.writing_system().to_string(),
            source,
        })
}

/// Height in millipoints of `font` drawn at `size_mp`.
pub fn font_height_mp<M>(font: &ResolvedFont, size_mp: u32, metrics: &M) -> Result<u32, FontError>
where
    M: FontMetricsProvider + ?Sized,
{
    Ok(metrics
        .metrics(&font.face, size_mp, font.style)?
        .height_mp(size_mp))
}

/// Largest size reachable from `font.size_mp` in quarter-point steps whose
/// height is within `max_height_mp`.
///
/// Returns the natural size when it already fits. No lower bound is applied;
/// size 0 ends the search.
pub fn fit_point_size<M>(
    font: &ResolvedFont,
    max_height_mp: u32,
    metrics: &M,
) -> Result<u32, FontError>
where
    M: FontMetricsProvider + ?Sized,
{
    let mut size = font.size_mp;
    let mut height = font_height_mp(font, size, metrics)?;
    while height > max_height_mp && size > 0 {
        size = size.saturating_sub(SHRINK_STEP_MP);
        height = font_height_mp(font, size, metrics)?;
    }
    Ok(size)
}

/// Fit every run of `text` within `max_height_mp`.
///
/// A zero budget means "no constraint". When no run needs a new size the
/// same `Arc` is returned.
pub fn adjust_to_height<R, M>(
    text: &Arc<RichString>,
    max_height_mp: u32,
    resolver: &R,
    metrics: &M,
) -> Result<Arc<RichString>, FitError>
where
    R: StyleResolver + ?Sized,
    M: FontMetricsProvider + ?Sized,
{
    if max_height_mp == 0 {
        return Ok(Arc::clone(text));
    }

    let mut builder = None;
    for (index, run) in text.runs().iter().enumerate() {
        let font = resolve_run(run, resolver)?;
        let fitted =
            fit_point_size(&font, max_height_mp, metrics).map_err(|source| FitError::Metrics {
                face: font.face.clone(),
                writing_system: run.writing_system().to_string(),
                source,
            })?;

        if fitted == font.size_mp || run.explicit_size_mp() == Some(fitted) {
            continue;
        }

        log::debug!(
            "Run {} ({} / {}) shrunk from {}mp to {}mp to fit {}mp",
            index,
            run.style(),
            run.writing_system(),
            font.size_mp,
            fitted,
            max_height_mp
        );
        builder
            .get_or_insert_with(|| text.to_builder())
            .set_explicit_size(index, Some(fitted));
    }

    Ok(match builder {
        Some(builder) => Arc::new(builder.build()),
        None => Arc::clone(text),
    })
}

/// Strip explicit sizes from every run; the same `Arc` when none had one.
pub fn clear_explicit_size(text: &Arc<RichString>) -> Arc<RichString> {
    if !text.has_explicit_sizes() {
        return Arc::clone(text);
    }
    let mut builder = text.to_builder();
    builder.map_props(|props| props.explicit_size_mp = None);
    Arc::new(builder.build())
}

/// Raise explicit sizes below `min_size_mp` to it.
///
/// Fitting has no floor of its own; hosts that need a legible minimum apply
/// this afterwards, accepting that floored runs may exceed the budget.
pub fn apply_floor(text: &Arc<RichString>, min_size_mp: u32) -> Arc<RichString> {
    let below = |size: Option<u32>| size.is_some_and(|s| s < min_size_mp);
    if !text.runs().iter().any(|run| below(run.explicit_size_mp())) {
        return Arc::clone(text);
    }
    let mut builder = text.to_builder();
    builder.map_props(|props| {
        if below(props.explicit_size_mp) {
            props.explicit_size_mp = Some(min_size_mp);
        }
    });
    Arc::new(builder.build())
}

/// Tallest run of `text` as it will be drawn (explicit size if set,
/// otherwise the style's size).
pub fn rendered_height_mp<R, M>(text: &RichString, resolver: &R, metrics: &M) -> Result<u32, FitError>
where
    R: StyleResolver + ?Sized,
    M: FontMetricsProvider + ?Sized,
{
    let mut tallest = 0;
    for run in text.runs() {
        let font = resolve_run(run, resolver)?;
        let size = run.explicit_size_mp().unwrap_or(font.size_mp);
        let height = font_height_mp(&font, size, metrics).map_err(|source| FitError::Metrics {
            face: font.face.clone(),
            writing_system: run.writing_system().to_string(),
            source,
        })?;
        tallest = tallest.max(height);
    }
    Ok(tallest)
}
