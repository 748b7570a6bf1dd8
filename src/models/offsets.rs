//! Per-glyph manual horizontal offsets

use serde::{Deserialize, Serialize};

/// Default clamp range for manual offsets, in logical pixels
pub const DEFAULT_OFFSET_LIMIT: f64 = 100.0;

/// Signed pixel offsets, one per glyph index.
///
/// Values are always within `[-limit, limit]`. When the glyph count changes
/// the whole vector is discarded and reallocated to zeros; adjustments are
/// tied to index only, so an insertion would otherwise shift them onto the
/// wrong glyphs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserOffsets {
    values: Vec<f64>,
    limit: f64,
}

impl UserOffsets {
    pub fn new(limit: f64) -> Self {
        Self {
            values: Vec::new(),
            limit: limit.abs(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Offset at `index`, zero when out of range
    pub fn get(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }

    /// Store a clamped offset and return the stored value.
    /// Out-of-range indices are ignored and yield zero.
    pub fn set(&mut self, index: usize, value: f64) -> f64 {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value.clamp(-self.limit, self.limit);
                *slot
            }
            None => 0.0,
        }
    }

    /// Reallocate to `glyph_count` zeros if the length differs.
    /// Returns true when a reset happened.
    pub fn reconcile(&mut self, glyph_count: usize) -> bool {
        if self.values.len() == glyph_count {
            return false;
        }
        log::debug!(
            "glyph count changed {} -> {}, clearing manual offsets",
            self.values.len(),
            glyph_count
        );
        self.values = vec![0.0; glyph_count];
        true
    }

    /// Zero every offset without changing the length
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Default for UserOffsets {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET_LIMIT)
    }
}
