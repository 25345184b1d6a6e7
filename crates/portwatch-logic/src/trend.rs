//! Synthetic historical trends for the zone detail panel.
//!
//! Each zone gets a 24-point series `baseline(id) + 10 * sin(i / 3)`. The
//! baseline comes from an FNV-1a hash of the zone letter folded into
//! [60, 80], so it is stable across runs. [`TrendCache`] keeps one series
//! per zone for the lifetime of a session.

use std::collections::HashMap;

use crate::layout::ZoneId;

pub const TREND_POINTS: usize = 24;
pub const BASELINE_MIN: f32 = 60.0;
pub const BASELINE_MAX: f32 = 80.0;
pub const AMPLITUDE: f32 = 10.0;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| {
        (hash ^ b as u32).wrapping_mul(FNV_PRIME)
    })
}

/// Deterministic baseline in `[BASELINE_MIN, BASELINE_MAX]` for a zone.
pub fn baseline(id: ZoneId) -> f32 {
    let mut buf = [0u8; 4];
    let hash = fnv1a(id.letter().encode_utf8(&mut buf).as_bytes());
    // Hundredths across the 20-point span
    let steps = (BASELINE_MAX - BASELINE_MIN) as u32 * 100 + 1;
    BASELINE_MIN + (hash % steps) as f32 / 100.0
}

/// Generate the full series for a zone. Pure; the cache only avoids recomputation.
pub fn generate_trend(id: ZoneId) -> Vec<f32> {
    let base = baseline(id);
    (0..TREND_POINTS)
        .map(|i| base + AMPLITUDE * (i as f32 / 3.0).sin())
        .collect()
}

/// Per-session memo of zone trends.
#[derive(Debug, Clone, Default)]
pub struct TrendCache {
    series: HashMap<ZoneId, Vec<f32>>,
}

impl TrendCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached series for `id`, generating it on first request.
    pub fn get_or_generate(&mut self, id: ZoneId) -> &[f32] {
        self.series.entry(id).or_insert_with(|| generate_trend(id))
    }

    pub fn get(&self, id: ZoneId) -> Option<&[f32]> {
        self.series.get(&id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_in_range_for_all_zones() {
        for id in ZoneId::ALL {
            let b = baseline(id);
            assert!(
                (BASELINE_MIN..=BASELINE_MAX).contains(&b),
                "zone {} baseline {} out of range",
                id,
                b
            );
        }
    }

    #[test]
    fn test_baseline_deterministic() {
        let c = ZoneId::from_letter('C').unwrap();
        assert_eq!(baseline(c).to_bits(), baseline(c).to_bits());
    }

    #[test]
    fn test_trend_shape() {
        let a = ZoneId::from_letter('A').unwrap();
        let series = generate_trend(a);
        assert_eq!(series.len(), TREND_POINTS);
        assert_eq!(series[0], baseline(a));
        let expected = baseline(a) + 10.0 * (3.0f32 / 3.0).sin();
        assert!((series[3] - expected).abs() < 1e-4);
        for v in &series {
            assert!(*v >= BASELINE_MIN - AMPLITUDE && *v <= BASELINE_MAX + AMPLITUDE);
        }
    }

    #[test]
    fn test_cache_returns_identical_series() {
        let mut cache = TrendCache::new();
        let d = ZoneId::from_letter('D').unwrap();
        let first: Vec<u32> = cache.get_or_generate(d).iter().map(|v| v.to_bits()).collect();
        let second: Vec<u32> = cache.get_or_generate(d).iter().map(|v| v.to_bits()).collect();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(ZoneId::from_letter('E').unwrap()).is_none());
    }
}
