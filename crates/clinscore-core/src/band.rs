/// One bucket of a threshold classification, covering `[min, max)`.
///
/// Tables are ordered ascending and contiguous: each band's `max` is the next
/// band's `min`. Open ends use `f64::NEG_INFINITY` / `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub stage: &'static str,
    pub description: &'static str,
    pub interpretation: &'static str,
}

impl Band {
    pub const fn new(
        min: f64,
        max: f64,
        stage: &'static str,
        description: &'static str,
        interpretation: &'static str,
    ) -> Self {
        Self {
            min,
            max,
            stage,
            description,
            interpretation,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Find the band containing `value`. Values outside the table clamp to the
/// nearest end, so a calculator never fails after validation.
///
/// # Panics
///
/// Panics on an empty table; tables are compile-time constants.
pub fn classify(bands: &'static [Band], value: f64) -> &'static Band {
    &bands[band_index(bands, value)]
}

/// Position of the band [`classify`] would return, for parallel lookup
/// tables such as per-band event rates.
pub fn band_index(bands: &[Band], value: f64) -> usize {
    bands
        .iter()
        .position(|b| b.contains(value))
        .unwrap_or_else(|| {
            if bands.first().is_some_and(|b| value < b.min) {
                0
            } else {
                bands.len().saturating_sub(1)
            }
        })
}

/// True when the table is non-empty, every band is non-degenerate, and each
/// band starts where the previous one ends.
pub fn is_contiguous(bands: &[Band]) -> bool {
    !bands.is_empty()
        && bands.iter().all(|b| b.min < b.max)
        && bands.windows(2).all(|w| w[0].max == w[1].min)
}
