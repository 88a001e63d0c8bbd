//! Metrics provider backed by the system font database.
//!
//! Faces are found with fontdb and their `hhea`/`OS/2` vertical metrics are
//! read through swash. Outline metrics scale linearly, so results are cached
//! per (face, bold, italic) regardless of size.

use std::num::NonZeroUsize;

use fontdb::{Database, Family, Query};
use lru::LruCache;
use parking_lot::Mutex;
use polytext_config::ControlSettings;
use swash::FontRef;

use super::{FontError, FontMetrics, FontMetricsProvider};
use crate::resolver::FontStyle;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MetricsKey {
    face: String,
    style: FontStyle,
}

/// `FontMetricsProvider` over a fontdb `Database`, with an LRU cache.
pub struct SystemFontMetrics {
    db: Database,
    cache: Mutex<LruCache<MetricsKey, FontMetrics>>,
}

impl SystemFontMetrics {
    /// Load the system fonts and cache up to `cache_size` faces.
    pub fn new(cache_size: usize) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::info!("Loaded {} system fonts", db.len());
        Self::with_database(db, cache_size)
    }

    /// System fonts, with the cache sized from the control settings.
    pub fn from_settings(settings: &ControlSettings) -> Self {
        Self::new(settings.metrics_cache_size)
    }

    /// Use an already populated database.
    pub fn with_database(db: Database, cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            db,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Register font bytes (TTF/OTF/TTC) in addition to the system fonts.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.cache.lock().clear();
    }

    /// Number of faces currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    fn load_metrics(&self, face: &str, style: FontStyle) -> Result<FontMetrics, FontError> {
        let query = Query {
            families: &[Family::Name(face)],
            weight: if style.bold {
                fontdb::Weight::BOLD
            } else {
                fontdb::Weight::NORMAL
            },
            style: if style.italic {
                fontdb::Style::Italic
            } else {
                fontdb::Style::Normal
            },
            ..Query::default()
        };

        let id = self
            .db
            .query(&query)
            .ok_or_else(|| FontError::FaceNotFound(face.to_string()))?;

        let raw = self
            .db
            .with_face_data(id, |data, index| {
                FontRef::from_index(data, index as usize).map(|font| font.metrics(&[]))
            })
            .flatten()
            .ok_or_else(|| FontError::InvalidFontData(face.to_string()))?;

        if raw.units_per_em == 0 {
            return Err(FontError::InvalidMetrics(face.to_string()));
        }

        let metrics = FontMetrics {
            cell_ascent: raw.ascent.abs().round() as u32,
            cell_descent: raw.descent.abs().round() as u32,
            em_height: u32::from(raw.units_per_em),
        };
        log::debug!(
            "Metrics for '{}' (bold={}, italic={}): {:?}",
            face,
            style.bold,
            style.italic,
            metrics
        );
        Ok(metrics)
    }
}

impl FontMetricsProvider for SystemFontMetrics {
    fn metrics(
        &self,
        face: &str,
        _size_mp: u32,
        style: FontStyle,
    ) -> Result<FontMetrics, FontError> {
        let key = MetricsKey {
            face: face.to_string(),
            style,
        };
        if let Some(metrics) = self.cache.lock().get(&key) {
            return Ok(*metrics);
        }

        let metrics = self.load_metrics(face, style)?;
        self.cache.lock().put(key, metrics);
        Ok(metrics)
    }

    fn invalidate(&self) {
        let mut cache = self.cache.lock();
        log::debug!("Dropping {} cached font metrics", cache.len());
        cache.clear();
    }
}
